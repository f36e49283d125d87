//! Dead-reckoning under constant heading and speed.

use crate::models::{Position, Track, Velocity};
use crate::rules::SurveillanceRules;

/// Projects tracks forward in time. Stateless apart from the unit conversion,
/// which is fixed at construction so every aircraft uses the same factor.
#[derive(Debug, Clone, Copy)]
pub struct KinematicProjector {
    km_per_second_per_speed_unit: f64,
}

impl Default for KinematicProjector {
    fn default() -> Self {
        Self::from_rules(&SurveillanceRules::default())
    }
}

impl KinematicProjector {
    pub fn from_rules(rules: &SurveillanceRules) -> Self {
        Self {
            km_per_second_per_speed_unit: rules.km_per_second_per_speed_unit(),
        }
    }

    /// Velocity components in km/s.
    ///
    /// The north component takes the sine of the heading and the east
    /// component the cosine, matching the reference data this engine is
    /// validated against.
    pub fn velocity(&self, track: &Track) -> Velocity {
        let speed = track.speed * self.km_per_second_per_speed_unit;
        let heading_rad = track.heading.to_radians();
        Velocity::new(speed * heading_rad.sin(), speed * heading_rad.cos())
    }

    /// Horizontal position of `track` at `to_time` (seconds since epoch).
    pub fn project(&self, track: &Track, to_time: f64) -> Position {
        let elapsed = to_time - track.report_time;
        track.position().advance(self.velocity(track), elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn projection_at_report_time_is_identity() {
        let projector = KinematicProjector::default();
        let track = Track::new(3, 7200.0, 12.5, -40.25).with_velocity(123.0, 480.0);
        let pos = projector.project(&track, 7200.0);
        assert_eq!(pos, Position::new(12.5, -40.25));
    }

    #[test]
    fn heading_zero_moves_along_east_component() {
        let projector = KinematicProjector::default();
        // 100 knots * 3.6 = 360 km per hour
        let track = Track::new(1, 0.0, 0.0, 0.0).with_velocity(0.0, 100.0);
        let pos = projector.project(&track, 3600.0);
        assert!(pos.north.abs() < EPS);
        assert!((pos.east - 360.0).abs() < EPS);
    }

    #[test]
    fn heading_ninety_moves_along_north_component() {
        let projector = KinematicProjector::default();
        let track = Track::new(1, 0.0, 0.0, 0.0).with_velocity(90.0, 100.0);
        let pos = projector.project(&track, 1800.0);
        assert!((pos.north - 180.0).abs() < EPS);
        assert!(pos.east.abs() < EPS);
    }

    #[test]
    fn projection_backwards_in_time() {
        let projector = KinematicProjector::default();
        let track = Track::new(1, 600.0, 0.0, 0.0).with_velocity(0.0, 100.0);
        let pos = projector.project(&track, 0.0);
        assert!((pos.east + 60.0).abs() < EPS);
    }

    #[test]
    fn custom_units_apply_uniformly() {
        let rules = SurveillanceRules {
            speed_conversion_factor: 1.0,
            seconds_per_time_unit: 1.0,
            ..SurveillanceRules::default()
        };
        let projector = KinematicProjector::from_rules(&rules);
        let track = Track::new(1, 0.0, 0.0, 0.0).with_velocity(90.0, 2.0);
        let pos = projector.project(&track, 5.0);
        assert!((pos.north - 10.0).abs() < EPS);
    }
}
