//! Point-in-time queries over a set of tracks.

use crate::conflict::{ConflictOutcome, ConflictSolver};
use crate::error::QueryError;
use crate::kinematics::KinematicProjector;
use crate::models::{Position, SeparationStatus, TrackId};
use crate::registry::TrackSource;
use crate::rules::SurveillanceRules;

/// Answers contact-count, position-estimate and separation queries.
///
/// The engine borrows the tracks for the duration of one call only, so the
/// same engine serves the live registry and frozen snapshots alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    projector: KinematicProjector,
    solver: ConflictSolver,
}

impl QueryEngine {
    pub fn new(rules: &SurveillanceRules) -> Self {
        let projector = KinematicProjector::from_rules(rules);
        Self {
            projector,
            solver: ConflictSolver::new(projector),
        }
    }

    pub fn projector(&self) -> &KinematicProjector {
        &self.projector
    }

    /// Number of aircraft whose projected position at `query_time` lies
    /// within `radius` km of the origin (boundary inclusive).
    pub fn count_contacts<S>(&self, source: &S, query_time: f64, radius: f64) -> usize
    where
        S: TrackSource + ?Sized,
    {
        source
            .tracks()
            .filter(|track| self.projector.project(track, query_time).range() <= radius)
            .count()
    }

    /// Dead-reckoned position of `id` at `query_time`.
    pub fn estimate_position<S>(
        &self,
        source: &S,
        query_time: f64,
        id: TrackId,
        radius: f64,
    ) -> Result<Position, QueryError>
    where
        S: TrackSource + ?Sized,
    {
        let track = source.find(id).ok_or(QueryError::NotFound { id })?;
        let position = self.projector.project(&track, query_time);
        let distance_km = position.range();
        if distance_km > radius {
            return Err(QueryError::OutOfRange {
                id,
                distance_km,
                radius_km: radius,
            });
        }
        Ok(position)
    }

    /// Check `id` against every other tracked aircraft and report the first
    /// future separation violation encountered in iteration order.
    pub fn check_separation<S>(
        &self,
        source: &S,
        query_time: f64,
        id: TrackId,
        min_separation: f64,
    ) -> Result<SeparationStatus, QueryError>
    where
        S: TrackSource + ?Sized,
    {
        let Some(reference) = source.find(id) else {
            tracing::info!(id, "separation check for aircraft not in area of operation");
            return Err(QueryError::NotFound { id });
        };

        for other in source.tracks().filter(|track| track.id != id) {
            match self.solver.solve(&reference, &other, query_time, min_separation) {
                ConflictOutcome::Violation(report) => {
                    tracing::debug!(
                        reference = id,
                        other = other.id,
                        time_of_violation = report.time_of_violation,
                        "separation violation predicted"
                    );
                    return Ok(SeparationStatus::Conflict(report));
                }
                outcome => {
                    tracing::trace!(reference = id, other = other.id, ?outcome, "pair clear");
                }
            }
        }

        Ok(SeparationStatus::Safe)
    }
}
