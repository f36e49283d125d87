//! Console configuration from environment.

use airspace_core::SurveillanceRules;
use anyhow::Context;
use std::env;
use std::path::PathBuf;

/// How responses are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Operator-readable lines
    #[default]
    Text,
    /// One JSON object per response
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON rules file; defaults apply when absent
    pub rules_path: Option<PathBuf>,
    /// Overrides the rules' monitored radius
    pub radius_km: Option<f64>,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rules_path: env::var_os("AIRSPACE_RULES").map(PathBuf::from),
            radius_km: env::var("AIRSPACE_RADIUS_KM")
                .ok()
                .and_then(|s| s.parse().ok()),
            format: OutputFormat::default(),
        }
    }

    /// Resolve the surveillance rules this session runs with.
    pub fn rules(&self) -> anyhow::Result<SurveillanceRules> {
        let mut rules = match &self.rules_path {
            Some(path) => SurveillanceRules::from_json_file(path)
                .with_context(|| format!("loading rules from {}", path.display()))?,
            None => SurveillanceRules::default(),
        };
        if let Some(radius_km) = self.radius_km {
            rules.monitored_radius_km = radius_km;
        }
        rules.validate().context("invalid surveillance rules")?;
        Ok(rules)
    }
}
