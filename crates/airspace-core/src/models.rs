//! Core data models for the airspace engine.

use serde::{Deserialize, Serialize};

/// Aircraft identifier, unique within a registry.
pub type TrackId = i32;

/// Most recent kinematic report for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    /// Seconds since the reference epoch
    pub report_time: f64,
    /// Kilometers north of the monitoring origin
    pub north: f64,
    /// Kilometers east of the monitoring origin
    pub east: f64,
    /// Reported altitude. Not used by the horizontal separation math.
    pub altitude: i32,
    /// Degrees, 0 = north, clockwise
    pub heading: f64,
    /// Ground speed in the report's native unit (knots)
    pub speed: f64,
}

impl Track {
    /// Create a stationary track at the given position.
    pub fn new(id: TrackId, report_time: f64, north: f64, east: f64) -> Self {
        Self {
            id,
            report_time,
            north,
            east,
            altitude: 0,
            heading: 0.0,
            speed: 0.0,
        }
    }

    /// Set heading and speed.
    pub fn with_velocity(mut self, heading: f64, speed: f64) -> Self {
        self.heading = heading;
        self.speed = speed;
        self
    }

    pub fn with_altitude(mut self, altitude: i32) -> Self {
        self.altitude = altitude;
        self
    }

    /// Position as last reported.
    pub fn position(&self) -> Position {
        Position::new(self.north, self.east)
    }
}

/// Horizontal position in kilometers relative to the monitoring origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub north: f64,
    pub east: f64,
}

impl Position {
    pub fn new(north: f64, east: f64) -> Self {
        Self { north, east }
    }

    /// Euclidean distance from the origin.
    pub fn range(&self) -> f64 {
        (self.north.powi(2) + self.east.powi(2)).sqrt()
    }

    /// Position after moving with `velocity` for `elapsed` seconds.
    pub fn advance(&self, velocity: Velocity, elapsed: f64) -> Self {
        Self {
            north: self.north + velocity.north * elapsed,
            east: self.east + velocity.east * elapsed,
        }
    }
}

/// Horizontal velocity in kilometers per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub north: f64,
    pub east: f64,
}

impl Velocity {
    pub fn new(north: f64, east: f64) -> Self {
        Self { north, east }
    }
}

/// First future separation violation found for a reference aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub reference_id: TrackId,
    pub other_id: TrackId,
    /// Seconds since the reference epoch at which separation first drops to the threshold
    pub time_of_violation: f64,
    /// Reported violation position (reference aircraft at the violation instant)
    pub position: Position,
    /// Other aircraft's dead-reckoned position at the same instant
    pub other_position: Position,
}

/// Result of a separation check against every other tracked aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SeparationStatus {
    Safe,
    Conflict(ConflictReport),
}

impl SeparationStatus {
    pub fn is_safe(&self) -> bool {
        matches!(self, SeparationStatus::Safe)
    }
}
