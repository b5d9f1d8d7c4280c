//! Two-regime propagation timing: fast offshore travel, abrupt slowdown past
//! the shelf knee.

use crate::seabed::SeabedProfile;

/// Baseline deep-water speed at the 40 m reference depth (canvas units per time unit)
const BASE_DEEP_SPEED: f32 = 0.6;

/// Reference depth that yields the baseline speed (meters)
const REFERENCE_DEPTH_M: f32 = 40.0;

/// Fixed speed over the rising slope, representing shoaling deceleration
const SLOPE_SPEED: f32 = 0.2;

/// Travel schedule derived from one seabed profile (canvas units / time units).
///
/// Splits the deep-to-shore run into two constant-speed regimes and exposes a
/// normalized time-to-position mapping.
#[derive(Debug, Clone)]
pub struct PropagationSchedule {
    /// Constant speed over the flat deep floor
    pub speed_deep: f32,

    /// Constant speed over the rising slope
    pub speed_slope: f32,

    /// Time units spent in the deep regime
    pub time_deep: f32,

    /// Time units spent in the slope regime
    pub time_slope: f32,

    /// Total travel time in abstract time units
    pub total_time_units: f32,

    /// Horizontal extent of the deep regime
    pub deep_dist: f32,

    /// Shoreline position (position ceiling)
    pub shore_x: f32,
}

impl PropagationSchedule {
    /// Build the schedule for a profile at the given deep-water depth.
    ///
    /// Deep-water speed scales with `sqrt(depth / 40)`: deeper water
    /// propagates faster, normalized so 40 m yields the 0.6 baseline.
    pub fn build(profile: &SeabedProfile, depth_m: f32) -> Self {
        let deep_dist = profile.shelf_knee_x.max(0.0);
        let slope_dist = profile.shore_x - deep_dist;

        let speed_deep = BASE_DEEP_SPEED * (depth_m / REFERENCE_DEPTH_M).sqrt();
        let speed_slope = SLOPE_SPEED;

        let time_deep = deep_dist / speed_deep;
        let time_slope = slope_dist / speed_slope;

        Self {
            speed_deep,
            speed_slope,
            time_deep,
            time_slope,
            total_time_units: time_deep + time_slope,
            deep_dist,
            shore_x: profile.shore_x,
        }
    }

    /// Map normalized progress `t` in [0,1] to a horizontal position.
    ///
    /// Piecewise linear: fast motion offshore, then the slower slope rate
    /// after crossing the knee. Clamped to the shoreline.
    pub fn position_at(&self, t: f32) -> f32 {
        let vt = t * self.total_time_units;
        let x = if vt < self.time_deep {
            vt * self.speed_deep
        } else {
            self.deep_dist + (vt - self.time_deep) * self.speed_slope
        };
        x.min(self.shore_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SimulationInputs, SurfaceConfig};

    fn schedule(slope: u32, depth_m: f32) -> PropagationSchedule {
        let inputs = SimulationInputs {
            slope,
            depth_m,
            ..Default::default()
        };
        let profile = SeabedProfile::build(&inputs, &SurfaceConfig::default());
        PropagationSchedule::build(&profile, depth_m)
    }

    #[test]
    fn test_position_endpoints() {
        for slope in 1..=10 {
            for depth in [10.0, 40.0, 80.0] {
                let s = schedule(slope, depth);
                assert_eq!(s.position_at(0.0), 0.0);
                assert!(
                    (s.position_at(1.0) - s.shore_x).abs() < 0.1,
                    "end position {} != shore {} (slope={}, depth={})",
                    s.position_at(1.0),
                    s.shore_x,
                    slope,
                    depth
                );
            }
        }
    }

    #[test]
    fn test_position_monotonically_non_decreasing() {
        for slope in [1, 5, 10] {
            let s = schedule(slope, 40.0);
            let mut prev = -1.0;
            for i in 0..=1000 {
                let x = s.position_at(i as f32 / 1000.0);
                assert!(
                    x >= prev,
                    "position went backward at t={} (slope={})",
                    i as f32 / 1000.0,
                    slope
                );
                prev = x;
            }
        }
    }

    #[test]
    fn test_slope_regime_is_slower() {
        let s = schedule(5, 40.0);
        assert!(s.speed_deep > s.speed_slope);

        // Position rate just before the knee must exceed the rate just after.
        let t_knee = s.time_deep / s.total_time_units;
        let dt = 0.001;
        let rate_before = s.position_at(t_knee) - s.position_at(t_knee - dt);
        let rate_after = s.position_at(t_knee + dt) - s.position_at(t_knee);
        assert!(
            rate_before > rate_after,
            "no slowdown at knee: {} vs {}",
            rate_before,
            rate_after
        );
    }

    #[test]
    fn test_deep_speed_scales_with_sqrt_depth() {
        let shallow = schedule(5, 10.0);
        let deep = schedule(5, 80.0);
        let ratio = shallow.speed_deep / deep.speed_deep;
        let expected = (10.0f32 / 40.0).sqrt() / (80.0f32 / 40.0).sqrt();
        assert!(
            (ratio - expected).abs() < 1e-5,
            "speed ratio {} != {}",
            ratio,
            expected
        );
        assert!((expected - 0.3536).abs() < 1e-3);

        // 40 m is the normalization point for the 0.6 baseline.
        assert!((schedule(5, 40.0).speed_deep - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_position_clamped_to_shore() {
        let s = schedule(10, 40.0);
        assert!(s.position_at(1.0) <= s.shore_x);
        assert!(s.position_at(1.5) <= s.shore_x);
    }
}
