//! Parameter definitions with physical units and documented semantics.
//!
//! All tuning constants of the shoaling model live here with:
//! - Physical units (meters, seconds, logical pixels)
//! - Documented ranges and meanings
//! - Validation at the host seam

/// Live simulation inputs, as set by the host UI (CLI + keyboard here).
///
/// Slope and intensity are integer steps; depth and visual gain are reals.
/// Visual gain scales drawn amplitude only and never feeds the timing model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInputs {
    /// Seabed steepness step, 1 (long gentle shelf) to 10 (short abrupt rise)
    pub slope: u32,

    /// Wave intensity step, 1 to 10 (drives base amplitude and packet width)
    pub intensity: u32,

    /// Deep-water depth in meters, 10.0 to 80.0
    pub depth_m: f32,

    /// Visual amplitude multiplier, 0.5 to 3.0 (presentation only)
    pub visual_gain: f32,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            slope: 4,
            intensity: 5,
            depth_m: 40.0,
            visual_gain: 1.0,
        }
    }
}

impl SimulationInputs {
    pub const SLOPE_RANGE: (u32, u32) = (1, 10);
    pub const INTENSITY_RANGE: (u32, u32) = (1, 10);
    pub const DEPTH_RANGE_M: (f32, f32) = (10.0, 80.0);
    pub const VISUAL_GAIN_RANGE: (f32, f32) = (0.5, 3.0);

    /// Return a copy with every field saturated into its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            slope: self.slope.clamp(Self::SLOPE_RANGE.0, Self::SLOPE_RANGE.1),
            intensity: self
                .intensity
                .clamp(Self::INTENSITY_RANGE.0, Self::INTENSITY_RANGE.1),
            depth_m: self
                .depth_m
                .clamp(Self::DEPTH_RANGE_M.0, Self::DEPTH_RANGE_M.1),
            visual_gain: self
                .visual_gain
                .clamp(Self::VISUAL_GAIN_RANGE.0, Self::VISUAL_GAIN_RANGE.1),
        }
    }

    /// Validate ranges (used at the CLI seam; internal code assumes clamped inputs)
    pub fn validate(&self) -> Result<(), String> {
        if self.slope < Self::SLOPE_RANGE.0 || self.slope > Self::SLOPE_RANGE.1 {
            return Err(format!("Slope must be in [1,10], got {}", self.slope));
        }
        if self.intensity < Self::INTENSITY_RANGE.0 || self.intensity > Self::INTENSITY_RANGE.1 {
            return Err(format!("Intensity must be in [1,10], got {}", self.intensity));
        }
        if self.depth_m < Self::DEPTH_RANGE_M.0 || self.depth_m > Self::DEPTH_RANGE_M.1 {
            return Err(format!("Depth must be in [10,80] m, got {}", self.depth_m));
        }
        if self.visual_gain < Self::VISUAL_GAIN_RANGE.0
            || self.visual_gain > Self::VISUAL_GAIN_RANGE.1
        {
            return Err(format!(
                "Visual gain must be in [0.5,3.0], got {}",
                self.visual_gain
            ));
        }
        Ok(())
    }
}

/// Logical drawing-surface geometry (canvas units).
///
/// All seabed/timing constants are expressed against this 600x300 surface;
/// rescale every field proportionally to target another size.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Logical width (canvas units)
    pub width: f32,

    /// Logical height (canvas units)
    pub height: f32,

    /// Gap between the shoreline and the right edge (canvas units)
    pub shore_margin: f32,

    /// Slope run at slope=1 (longest, gentlest shelf)
    pub max_run: f32,

    /// Slope run at slope=10 (shortest, steepest shelf)
    pub min_run: f32,

    /// Still-water line, measured down from the top edge
    pub sea_level_y: f32,

    /// Floor offset below sea level at 10 m depth (canvas units)
    pub depth_px_min: f32,

    /// Floor offset below sea level at 80 m depth (canvas units)
    pub depth_px_max: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            shore_margin: 50.0,
            max_run: 500.0,
            min_run: 30.0,
            sea_level_y: 110.0,
            depth_px_min: 30.0,
            depth_px_max: 95.0,
        }
    }
}

impl SurfaceConfig {
    /// X position of the shoreline
    pub fn shore_x(&self) -> f32 {
        self.width - self.shore_margin
    }
}

/// Sea-surface appearance constants (fixed frequencies and phases).
///
/// The surface is a sum of two sinusoids; only the amplitude reacts to
/// intensity (`base + intensity * scale`). The highlight layer reuses the
/// same waves with a phase offset and vertical bias.
#[derive(Debug, Clone)]
pub struct SurfaceWaves {
    /// Amplitude floor at intensity 0 (canvas units)
    pub base_amplitude: f32,

    /// Amplitude gained per intensity step
    pub amplitude_per_intensity: f32,

    /// Primary sinusoid spatial frequency (radians per canvas unit)
    pub freq_primary: f32,

    /// Primary sinusoid angular speed (radians per second)
    pub speed_primary: f32,

    /// Secondary sinusoid spatial frequency (radians per canvas unit)
    pub freq_secondary: f32,

    /// Secondary sinusoid angular speed (radians per second)
    pub speed_secondary: f32,

    /// Highlight layer phase offset (radians)
    pub highlight_phase: f32,

    /// Highlight layer vertical bias (canvas units, negative = raised)
    pub highlight_bias: f32,
}

impl Default for SurfaceWaves {
    fn default() -> Self {
        Self {
            base_amplitude: 1.5,
            amplitude_per_intensity: 0.85,
            freq_primary: 0.022,
            speed_primary: 1.3,
            freq_secondary: 0.047,
            speed_secondary: 2.1,
            highlight_phase: 0.9,
            highlight_bias: -4.0,
        }
    }
}

impl SurfaceWaves {
    /// Surface chop amplitude for a given intensity step
    pub fn amplitude_for(&self, intensity: u32) -> f32 {
        self.base_amplitude + intensity as f32 * self.amplitude_per_intensity
    }
}

/// Wave-packet lifecycle constants
pub mod packet_constants {
    /// Wall-clock travel time of one packet, deep water to shore (seconds)
    pub const PACKET_DURATION_S: f64 = 5.0;

    /// Packet base width (canvas units)
    pub const BASE_WIDTH: f32 = 40.0;

    /// Packet width gained per intensity step
    pub const WIDTH_PER_INTENSITY: f32 = 2.0;
}

/// Seawall overlay presentation constants
pub mod seawall_constants {
    /// Drawn wall height per recommended meter (canvas units)
    pub const PX_PER_METER: f32 = 6.0;

    /// Cap on drawn wall height (canvas units)
    pub const MAX_HEIGHT_PX: f32 = 90.0;

    /// Wall thickness (canvas units)
    pub const WIDTH_PX: f32 = 10.0;
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (physical pixels)
    pub window_width: u32,

    /// Window height (physical pixels)
    pub window_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        // 2x the logical surface for a crisp default window
        Self {
            window_width: 1200,
            window_height: 600,
        }
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_clamp_to_documented_ranges() {
        let wild = SimulationInputs {
            slope: 99,
            intensity: 0,
            depth_m: 500.0,
            visual_gain: 0.01,
        };
        let c = wild.clamped();
        assert_eq!(c.slope, 10);
        assert_eq!(c.intensity, 1);
        assert_eq!(c.depth_m, 80.0);
        assert_eq!(c.visual_gain, 0.5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_inputs_validate_rejects_out_of_range() {
        let mut inputs = SimulationInputs::default();
        assert!(inputs.validate().is_ok());

        inputs.slope = 11;
        assert!(inputs.validate().is_err());

        inputs.slope = 5;
        inputs.depth_m = 9.0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_surface_amplitude_scales_with_intensity() {
        let waves = SurfaceWaves::default();
        assert!((waves.amplitude_for(1) - 2.35).abs() < 1e-6);
        assert!((waves.amplitude_for(10) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_shore_x_respects_margin() {
        let surface = SurfaceConfig::default();
        assert_eq!(surface.shore_x(), 550.0);
    }
}
