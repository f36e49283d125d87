//! Surveillance rules and unit conversion constants.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the monitored area and kinematic units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveillanceRules {
    /// Radius of the area of operation around the origin (km)
    pub monitored_radius_km: f64,
    /// Multiplier turning reported speed into distance per speed time unit
    pub speed_conversion_factor: f64,
    /// Seconds in the speed's time unit (3600 for per-hour speeds)
    pub seconds_per_time_unit: f64,
}

impl Default for SurveillanceRules {
    fn default() -> Self {
        Self {
            monitored_radius_km: 350.0,
            speed_conversion_factor: 3.6,
            seconds_per_time_unit: 3600.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rules file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

impl SurveillanceRules {
    /// Load rules from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(raw)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject values that would make projection meaningless.
    pub fn validate(&self) -> Result<(), RulesError> {
        let checks = [
            ("monitored_radius_km", self.monitored_radius_km),
            ("speed_conversion_factor", self.speed_conversion_factor),
            ("seconds_per_time_unit", self.seconds_per_time_unit),
        ];
        for (field, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(RulesError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Speed multiplier from reported units to kilometers per second.
    pub fn km_per_second_per_speed_unit(&self) -> f64 {
        self.speed_conversion_factor / self.seconds_per_time_unit
    }
}
