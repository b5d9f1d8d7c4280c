//! Sea-surface sampler: two layered sinusoid paths plus the traveling
//! packet bump.

use std::f32::consts::PI;

use crate::params::SurfaceWaves;

/// Samples the animated sea surface at a horizontal position.
///
/// The body path is a fixed-frequency two-sinusoid sum; the highlight path is
/// the same waves with a phase offset and a vertical bias, drawn translucent
/// on top of the body.
#[derive(Debug, Clone)]
pub struct SeaSurface {
    waves: SurfaceWaves,
    sea_level_y: f32,
}

impl SeaSurface {
    pub fn new(waves: SurfaceWaves, sea_level_y: f32) -> Self {
        Self { waves, sea_level_y }
    }

    /// Primary body path y at `x` for the given time and intensity.
    pub fn body_y_at(&self, x: f32, time_s: f32, intensity: u32) -> f32 {
        self.sea_level_y + self.chop_at(x, time_s, intensity, 0.0)
    }

    /// Highlight path y at `x`: phase-shifted and biased upward.
    pub fn highlight_y_at(&self, x: f32, time_s: f32, intensity: u32) -> f32 {
        self.sea_level_y
            + self.waves.highlight_bias
            + self.chop_at(x, time_s, intensity, self.waves.highlight_phase)
    }

    fn chop_at(&self, x: f32, time_s: f32, intensity: u32, phase: f32) -> f32 {
        let w = &self.waves;
        let amp = w.amplitude_for(intensity);
        let primary = (x * w.freq_primary + time_s * w.speed_primary + phase).sin();
        let secondary = (x * w.freq_secondary - time_s * w.speed_secondary + phase).sin();
        amp * (0.6 * primary + 0.4 * secondary)
    }
}

/// Cosine-windowed hump the packet carves into the surface path.
///
/// Zero outside `[center - width/2, center + width/2]`, peaking at `height`
/// at the center. Returned as a positive elevation (subtract from y).
pub fn packet_bump(x: f32, center: f32, width: f32, height: f32) -> f32 {
    let half = width / 2.0;
    let d = (x - center) / half;
    if !(-1.0..=1.0).contains(&d) {
        return 0.0;
    }
    height * 0.5 * (1.0 + (PI * d).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_stays_within_amplitude_band() {
        let surface = SeaSurface::new(SurfaceWaves::default(), 110.0);
        let amp = SurfaceWaves::default().amplitude_for(10);
        for i in 0..600 {
            let y = surface.body_y_at(i as f32, 3.7, 10);
            assert!(
                (y - 110.0).abs() <= amp + 1e-4,
                "surface left its band at x={}: {}",
                i,
                y
            );
        }
    }

    #[test]
    fn test_highlight_is_biased_and_phase_shifted() {
        let waves = SurfaceWaves::default();
        let surface = SeaSurface::new(waves.clone(), 110.0);

        // With flat chop (intensity would still add chop, so compare the two
        // layers averaged over a cycle: the bias separates their means).
        let n = 1000;
        let mean_body: f32 = (0..n)
            .map(|i| surface.body_y_at(i as f32, 0.0, 5))
            .sum::<f32>()
            / n as f32;
        let mean_highlight: f32 = (0..n)
            .map(|i| surface.highlight_y_at(i as f32, 0.0, 5))
            .sum::<f32>()
            / n as f32;
        assert!(
            mean_highlight < mean_body,
            "highlight not raised: {} vs {}",
            mean_highlight,
            mean_body
        );

        // Phase offset: the layers disagree pointwise beyond the bias alone.
        let body = surface.body_y_at(100.0, 0.0, 5);
        let highlight = surface.highlight_y_at(100.0, 0.0, 5);
        assert!((highlight - body - waves.highlight_bias).abs() > 0.01);
    }

    #[test]
    fn test_packet_bump_window() {
        assert_eq!(packet_bump(0.0, 100.0, 40.0, 20.0), 0.0);
        assert_eq!(packet_bump(200.0, 100.0, 40.0, 20.0), 0.0);
        assert!((packet_bump(100.0, 100.0, 40.0, 20.0) - 20.0).abs() < 1e-5);
        // Edges taper to zero
        assert!(packet_bump(119.9, 100.0, 40.0, 20.0) < 0.1);
        // Strictly inside the window the bump is positive
        assert!(packet_bump(110.0, 100.0, 40.0, 20.0) > 0.0);
    }
}
