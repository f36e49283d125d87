//! Query failure taxonomy.

use crate::models::TrackId;

/// Classified outcome of a query that could not produce a result.
///
/// Both variants render as "not in area of operation" to an operator,
/// but callers can always tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// No live track exists for the id
    #[error("aircraft {id} is not tracked")]
    NotFound { id: TrackId },
    /// Track exists but its projected position lies outside the monitored radius
    #[error("aircraft {id} projected {distance_km:.1} km from origin, outside {radius_km:.1} km")]
    OutOfRange {
        id: TrackId,
        distance_km: f64,
        radius_km: f64,
    },
}

impl QueryError {
    pub fn id(&self) -> TrackId {
        match self {
            QueryError::NotFound { id } | QueryError::OutOfRange { id, .. } => *id,
        }
    }
}
