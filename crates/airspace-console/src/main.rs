//! Airspace console - reads report and query events from stdin (or a file)
//! and writes one response line per query to stdout.

use airspace_console::{Config, OutputFormat, Session};
use airspace_core::Airspace;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Track aircraft from position reports and answer traffic queries
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Read events from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON surveillance rules file (env: AIRSPACE_RULES)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Monitored radius in km (env: AIRSPACE_RADIUS_KM)
    #[arg(long)]
    radius: Option<f64>,

    /// Response format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries responses only
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("airspace_console=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if args.rules.is_some() {
        config.rules_path = args.rules;
    }
    if args.radius.is_some() {
        config.radius_km = args.radius;
    }
    config.format = args.format;

    let rules = config.rules()?;
    tracing::info!(
        radius_km = rules.monitored_radius_km,
        speed_factor = rules.speed_conversion_factor,
        "starting airspace console"
    );

    let mut session = Session::new(Airspace::new(rules), config.format);
    let stdout = io::stdout().lock();
    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input {}", path.display()))?;
            session.run(BufReader::new(file), stdout)?
        }
        None => session.run(io::stdin().lock(), stdout)?,
    };

    tracing::info!(
        lines = summary.lines,
        reports = summary.reports,
        queries = summary.queries,
        rejected = summary.rejected,
        closed = summary.closed,
        "airspace console finished"
    );
    Ok(())
}
