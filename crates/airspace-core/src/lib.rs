//! Airspace core - live track registry with dead-reckoning queries
//! and closest-point-of-approach separation checks.

pub mod airspace;
pub mod conflict;
pub mod error;
pub mod kinematics;
pub mod models;
pub mod query;
pub mod registry;
pub mod rules;

pub use airspace::Airspace;
pub use conflict::{ConflictOutcome, ConflictSolver};
pub use error::QueryError;
pub use kinematics::KinematicProjector;
pub use models::{ConflictReport, Position, SeparationStatus, Track, TrackId, Velocity};
pub use query::QueryEngine;
pub use registry::{RegistrySnapshot, TrackRegistry, TrackSource};
pub use rules::SurveillanceRules;
