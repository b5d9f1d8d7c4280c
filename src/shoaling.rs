//! Green's-law height shoaling with steep-slope damping.
//!
//! The exponents and correction factors here are visually tuned, not derived
//! from a cited physical model. They are load-bearing for the invariant that
//! a gentle slope amplifies more than a steep one, so they must not change.

use crate::params::SimulationInputs;
use crate::seabed::SeabedProfile;

/// Canvas amplitude per intensity step (before visual gain)
const AMP_PER_INTENSITY: f32 = 3.0;

/// Floor on the normalized remaining depth, preventing blow-up near shore
const DEPTH_RATIO_FLOOR: f32 = 0.1;

/// Green's-law exponent applied to 1/depth_ratio
const SHOALING_EXPONENT: f32 = 0.25;

/// Slope step above which the damping correction kicks in
const STEEP_SLOPE_THRESHOLD: u32 = 6;

/// Damping gained per slope step past the threshold
const STEEP_FACTOR_PER_STEP: f32 = 0.15;

/// Base wave amplitude in canvas units: intensity 1..10 maps to roughly
/// 3..30, scaled by the visual gain.
pub fn wave_amplitude(inputs: &SimulationInputs) -> f32 {
    inputs.intensity as f32 * AMP_PER_INTENSITY * inputs.visual_gain
}

/// Normalized remaining depth at a horizontal position: 1 over the flat deep
/// floor, falling toward the 0.1 floor as the wave approaches shore.
///
/// The fall-off is sharpened by tension (`progress^(1 + tension*1.5)`), so
/// steep profiles hold full depth longer and then lose it abruptly.
pub fn depth_ratio_at(x: f32, profile: &SeabedProfile) -> f32 {
    if x <= profile.shelf_knee_x {
        return 1.0;
    }
    let progress =
        ((x - profile.shelf_knee_x) / (profile.shore_x - profile.shelf_knee_x)).clamp(0.0, 1.0);
    let power = 1.0 + profile.tension * 1.5;
    let adjusted = progress.powf(power);
    (1.0 - adjusted).max(DEPTH_RATIO_FLOOR)
}

/// Amplification factor at a position: Green's-law growth from the shrinking
/// depth ratio, damped on steep slopes (reflecting profiles cap their growth).
pub fn shoaling_factor_at(x: f32, slope: u32, profile: &SeabedProfile) -> f32 {
    let mut factor = (1.0 / depth_ratio_at(x, profile)).powf(SHOALING_EXPONENT);
    if slope > STEEP_SLOPE_THRESHOLD {
        let steep_factor = (slope - STEEP_SLOPE_THRESHOLD) as f32 * STEEP_FACTOR_PER_STEP;
        factor *= 1.0 - steep_factor;
    }
    factor
}

/// Wave height at a horizontal position for the given inputs.
pub fn height_at(x: f32, inputs: &SimulationInputs, profile: &SeabedProfile) -> f32 {
    wave_amplitude(inputs) * shoaling_factor_at(x, inputs.slope, profile)
}
