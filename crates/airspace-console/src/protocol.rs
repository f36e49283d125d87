//! Line protocol for track reports and operator queries.
//!
//! ```text
//! #ADS-B:<id>,time:<hh>:<mm>,N:<north>,E:<east>,alt:<alt>,head:<heading>,speed:<speed>
//! *time:<hh>:<mm>,<request>[,<id>[, <min_sep>]]
//! ```

use airspace_core::{Track, TrackId};
use std::str::FromStr;

const REPORT_PREFIX: &str = "#ADS-B:";
const QUERY_PREFIX: &str = "*";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Position report; replaces any previous report for the same id
    Report(Track),
    Query { time: f64, request: Request },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    NumContacts,
    EstimatePosition { id: TrackId },
    CheckSeparation { id: TrackId, min_separation: f64 },
    Close,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid value {value:?} for `{field}`")]
    InvalidValue { field: &'static str, value: String },
    #[error("unknown request {0:?}")]
    UnknownRequest(String),
}

/// Parse one input line.
///
/// Returns `Ok(None)` for lines that are neither reports nor queries; those
/// are not part of the protocol and are skipped silently.
pub fn parse_line(line: &str) -> Result<Option<Event>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(body) = line.strip_prefix(REPORT_PREFIX) {
        return parse_report(body).map(|track| Some(Event::Report(track)));
    }
    if let Some(body) = line.strip_prefix(QUERY_PREFIX) {
        return parse_query(body).map(Some);
    }
    Ok(None)
}

fn parse_report(body: &str) -> Result<Track, ParseError> {
    let mut fields = body.split(',');
    let id: TrackId = number("id", next(&mut fields, "id")?)?;
    let time = clock(labeled(next(&mut fields, "time")?, "time:")?)?;
    let north = real("N", labeled(next(&mut fields, "N")?, "N:")?)?;
    let east = real("E", labeled(next(&mut fields, "E")?, "E:")?)?;
    let altitude = number("alt", labeled(next(&mut fields, "alt")?, "alt:")?)?;
    let heading = real("head", labeled(next(&mut fields, "head")?, "head:")?)?;
    let speed = real("speed", labeled(next(&mut fields, "speed")?, "speed:")?)?;

    Ok(Track::new(id, time, north, east)
        .with_altitude(altitude)
        .with_velocity(heading, speed))
}

fn parse_query(body: &str) -> Result<Event, ParseError> {
    let mut fields = body.split(',');
    let time = clock(labeled(next(&mut fields, "time")?, "time:")?)?;
    let name = next(&mut fields, "request")?.trim();

    let request = match name {
        "num_contacts" => Request::NumContacts,
        "close" => Request::Close,
        "est_pos" => Request::EstimatePosition {
            id: number("id", next(&mut fields, "id")?)?,
        },
        "check_separation" => Request::CheckSeparation {
            id: number("id", next(&mut fields, "id")?)?,
            min_separation: real("min_sep", next(&mut fields, "min_sep")?)?,
        },
        other => return Err(ParseError::UnknownRequest(other.to_string())),
    };

    Ok(Event::Query { time, request })
}

fn next<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    fields
        .next()
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(ParseError::MissingField(field))
}

fn labeled<'a>(raw: &'a str, label: &'static str) -> Result<&'a str, ParseError> {
    raw.trim()
        .strip_prefix(label)
        .ok_or(ParseError::MissingField(label.trim_end_matches(':')))
}

fn number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ParseError> {
    let raw = raw.trim();
    raw.parse().map_err(|_| ParseError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

/// Like [`number`], but rejects NaN and infinities.
fn real(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let value: f64 = number(field, raw)?;
    if !value.is_finite() {
        return Err(ParseError::InvalidValue {
            field,
            value: raw.trim().to_string(),
        });
    }
    Ok(value)
}

/// `hh:mm` to seconds since midnight of the reference day.
fn clock(raw: &str) -> Result<f64, ParseError> {
    let (hours, minutes) = raw.split_once(':').ok_or(ParseError::InvalidValue {
        field: "time",
        value: raw.to_string(),
    })?;
    let hours: i64 = number("time", hours)?;
    let minutes: i64 = number("time", minutes)?;
    hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .map(|seconds| seconds as f64)
        .ok_or(ParseError::InvalidValue {
            field: "time",
            value: raw.to_string(),
        })
}
