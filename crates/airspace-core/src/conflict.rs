//! Closest-point-of-approach separation solver.
//!
//! Both aircraft are dead-reckoned to the query time, then their relative
//! motion is treated as a straight line. Squared horizontal separation along
//! that line is a quadratic in look-ahead time `t >= 0`:
//!
//! ```text
//! |dP(t)|^2 - sep^2 = a*t^2 + b*t + c
//! a = |dV|^2,  b = 2 (dV . dP0),  c = |dP0|^2 - sep^2
//! ```
//!
//! The smaller real root, if strictly positive, is the first instant the
//! pair reaches the minimum separation.

use crate::kinematics::KinematicProjector;
use crate::models::{ConflictReport, Track};
use serde::{Deserialize, Serialize};

/// How a single (reference, other) pair was classified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConflictOutcome {
    /// Negative discriminant: separation never reaches the threshold
    NeverConverges,
    /// Zero discriminant: threshold touched at one instant but not violated
    Tangent,
    /// Identical velocities and currently outside the threshold
    ParallelClear,
    /// Threshold crossing lies at or before the query time
    NoFutureCrossing,
    /// First future violation
    Violation(ConflictReport),
}

impl ConflictOutcome {
    pub fn into_report(self) -> Option<ConflictReport> {
        match self {
            ConflictOutcome::Violation(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, ConflictOutcome::Violation(_))
    }
}

/// Pairwise separation solver. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictSolver {
    projector: KinematicProjector,
}

impl ConflictSolver {
    pub fn new(projector: KinematicProjector) -> Self {
        Self { projector }
    }

    /// Decide whether `other` will come within `min_separation` km of
    /// `reference` after `query_time`.
    pub fn solve(
        &self,
        reference: &Track,
        other: &Track,
        query_time: f64,
        min_separation: f64,
    ) -> ConflictOutcome {
        let ref_velocity = self.projector.velocity(reference);
        let other_velocity = self.projector.velocity(other);
        let ref_pos = self.projector.project(reference, query_time);
        let other_pos = self.projector.project(other, query_time);

        let dp_north = other_pos.north - ref_pos.north;
        let dp_east = other_pos.east - ref_pos.east;
        let dv_north = other_velocity.north - ref_velocity.north;
        let dv_east = other_velocity.east - ref_velocity.east;

        let a = dv_north.powi(2) + dv_east.powi(2);
        let b = 2.0 * (dv_north * dp_north + dv_east * dp_east);
        let c = dp_north.powi(2) + dp_east.powi(2) - min_separation.powi(2);

        if a == 0.0 {
            // Separation is constant; either always inside or never.
            return if c <= 0.0 {
                ConflictOutcome::NoFutureCrossing
            } else {
                ConflictOutcome::ParallelClear
            };
        }

        let d = b.powi(2) - 4.0 * a * c;
        if d < 0.0 {
            return ConflictOutcome::NeverConverges;
        }
        if d == 0.0 {
            return ConflictOutcome::Tangent;
        }

        let sqrt_d = d.sqrt();
        let t1 = (-b + sqrt_d) / (2.0 * a);
        let t2 = (-b - sqrt_d) / (2.0 * a);
        let t_min = t1.min(t2);
        // Non-finite kinematics never produce a violation.
        if !(t_min.is_finite() && t_min > 0.0) {
            return ConflictOutcome::NoFutureCrossing;
        }

        ConflictOutcome::Violation(ConflictReport {
            reference_id: reference.id,
            other_id: other.id,
            time_of_violation: query_time + t_min,
            position: ref_pos.advance(ref_velocity, t_min),
            other_position: other_pos.advance(other_velocity, t_min),
        })
    }
}
