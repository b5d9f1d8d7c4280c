//! Command-line argument parsing.

use clap::Parser;

use crate::params::{RecordingConfig, SimulationInputs};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Shorewave")]
#[command(about = "Interactive wave-shoaling hazard visualizer", long_about = None)]
pub struct Args {
    /// Seabed slope, 1 (gentle) to 10 (steep)
    #[arg(long, value_name = "STEP", default_value = "4")]
    pub slope: u32,

    /// Wave intensity, 1 to 10
    #[arg(long, value_name = "STEP", default_value = "5")]
    pub intensity: u32,

    /// Deep-water depth in meters, 10 to 80
    #[arg(long, value_name = "METERS", default_value = "40")]
    pub depth: f32,

    /// Visual amplitude gain, 0.5 to 3.0
    #[arg(long, value_name = "FACTOR", default_value = "1.0")]
    pub gain: f32,

    /// Recommended seawall height in meters (from an external assessment)
    #[arg(long, value_name = "METERS")]
    pub seawall: Option<f32>,

    /// Record the animation to PNG frames (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    /// Build the initial simulation inputs, rejecting out-of-range values.
    pub fn parse_inputs(&self) -> Result<SimulationInputs, String> {
        let inputs = SimulationInputs {
            slope: self.slope,
            intensity: self.intensity,
            depth_m: self.depth,
            visual_gain: self.gain,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Result<Option<RecordingConfig>, String> {
        self.record
            .map(|duration| {
                let config = RecordingConfig::new(duration);
                std::fs::create_dir_all(config.frames_dir())
                    .map_err(|e| format!("Failed to create frames directory: {}", e))?;
                Ok(config)
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_inputs() {
        let args = Args::parse_from(["shorewave"]);
        let inputs = args.parse_inputs().unwrap();
        assert_eq!(inputs.slope, 4);
        assert_eq!(inputs.intensity, 5);
        assert_eq!(inputs.depth_m, 40.0);
        assert!(args.seawall.is_none());
    }

    #[test]
    fn test_out_of_range_slope_rejected() {
        let args = Args::parse_from(["shorewave", "--slope", "12"]);
        assert!(args.parse_inputs().is_err());
    }
}
