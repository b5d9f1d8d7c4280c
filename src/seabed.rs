//! Seabed profile builder: flat deep floor, then a single quadratic rise to shore.

use crate::params::{SimulationInputs, SurfaceConfig};

/// Derived seabed geometry for one input set (canvas units).
///
/// Shared by the renderer and the propagation/shoaling samplers so the drawn
/// curve and the simulated wave path never drift apart.
#[derive(Debug, Clone)]
pub struct SeabedProfile {
    /// Horizontal extent of the rising slope region
    pub run: f32,

    /// Boundary between the flat deep floor and the rise
    pub shelf_knee_x: f32,

    /// Curve control parameter: 0.2 (gradual rise) to 0.9 (long flat, abrupt rise)
    pub tension: f32,

    /// Floor y in the deep region (below sea level, larger = deeper)
    pub deep_depth_y: f32,

    /// Floor y at the shoreline (the still-water line)
    pub shore_depth_y: f32,

    /// X position of the shoreline
    pub shore_x: f32,
}

impl SeabedProfile {
    /// Build the profile for the given slope and depth.
    ///
    /// Slope 1 gives the longest run (gentle shelf), slope 10 the shortest.
    /// Depth is mapped linearly (clamped) from [10,80] m to the configured
    /// pixel-depth range below the sea-level baseline.
    pub fn build(inputs: &SimulationInputs, surface: &SurfaceConfig) -> Self {
        let slope_frac = (inputs.slope - 1) as f32 / 9.0;
        let run = surface.max_run - slope_frac * (surface.max_run - surface.min_run);
        let tension = 0.2 + slope_frac * 0.7;

        let shore_x = surface.shore_x();
        let shelf_knee_x = shore_x - run;

        let (d_min, d_max) = SimulationInputs::DEPTH_RANGE_M;
        let depth_frac = ((inputs.depth_m - d_min) / (d_max - d_min)).clamp(0.0, 1.0);
        let depth_px =
            surface.depth_px_min + depth_frac * (surface.depth_px_max - surface.depth_px_min);

        Self {
            run,
            shelf_knee_x,
            tension,
            deep_depth_y: surface.sea_level_y + depth_px,
            shore_depth_y: surface.sea_level_y,
            shore_x,
        }
    }

    /// Floor y at a horizontal position.
    ///
    /// Flat at `deep_depth_y` up to the shelf knee, then a quadratic curve to
    /// `(shore_x, shore_depth_y)` with control point `(knee + run*tension,
    /// deep_depth_y)`. The flat-control-point placement is what produces
    /// "long flat then sharp rise" at high tension.
    pub fn floor_y_at(&self, x: f32) -> f32 {
        if x <= self.shelf_knee_x {
            return self.deep_depth_y;
        }
        if x >= self.shore_x {
            return self.shore_depth_y;
        }

        // Invert the Bezier x(t) = knee + 2t(1-t)*run*tension + t^2*run.
        // x is strictly increasing in t for tension < 1, so the positive
        // root is the one in [0,1].
        let dx = x - self.shelf_knee_x;
        let a = self.run * (1.0 - 2.0 * self.tension);
        let b = 2.0 * self.run * self.tension;
        let t = if a.abs() < 1e-6 {
            dx / b
        } else {
            (-b + (b * b + 4.0 * a * dx).sqrt()) / (2.0 * a)
        };
        let t = t.clamp(0.0, 1.0);

        // With both endpoints and the control point sharing deep_depth_y in
        // the flat segment, y reduces to deep + t^2 * (shore - deep).
        self.deep_depth_y + t * t * (self.shore_depth_y - self.deep_depth_y)
    }
}
