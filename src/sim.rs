//! Simulation controller: owns the derived models, the in-flight wave packet,
//! and the cancel-and-restart lifecycle.
//!
//! Both continuous processes (surface tick, packet transition) are driven by
//! the host's frame clock. On any input change the controller rebuilds every
//! derived value, drops the in-flight packet, and bumps a generation counter
//! before returning, so no sample computed from the old inputs can coexist
//! with the new configuration.

use crate::params::{packet_constants, SimulationInputs, SurfaceConfig, SurfaceWaves};
use crate::propagation::PropagationSchedule;
use crate::seabed::SeabedProfile;
use crate::shoaling;
use crate::surface::SeaSurface;

/// One finite-duration wave instance traveling from deep water to shore.
#[derive(Debug, Clone, Copy)]
pub struct WavePacket {
    /// Timeline second at which this packet started
    pub spawned_at: f64,

    /// Drawn packet width (canvas units)
    pub width: f32,

    /// Input generation the packet belongs to
    pub generation: u64,
}

/// Per-frame packet sample: where the packet is and how tall it stands.
#[derive(Debug, Clone, Copy)]
pub struct PacketSample {
    pub progress: f32,
    pub x: f32,
    pub height: f32,
}

/// The shoaling simulation for one input configuration.
pub struct ShoalingSim {
    inputs: SimulationInputs,
    surface_config: SurfaceConfig,
    profile: SeabedProfile,
    schedule: PropagationSchedule,
    sea_surface: SeaSurface,
    packet: WavePacket,
    generation: u64,
    /// Timeline second the surface animation (re)started at
    surface_epoch: f64,
}

impl ShoalingSim {
    /// Create the simulation. Inputs are clamped into their documented
    /// ranges; `now` is the host timeline in seconds.
    pub fn new(inputs: SimulationInputs, surface_config: SurfaceConfig, now: f64) -> Self {
        let inputs = inputs.clamped();
        let profile = SeabedProfile::build(&inputs, &surface_config);
        let schedule = PropagationSchedule::build(&profile, inputs.depth_m);
        let sea_surface = SeaSurface::new(SurfaceWaves::default(), surface_config.sea_level_y);
        let packet = Self::spawn_packet(&inputs, now, 0);

        Self {
            inputs,
            surface_config,
            profile,
            schedule,
            sea_surface,
            packet,
            generation: 0,
            surface_epoch: now,
        }
    }

    fn spawn_packet(inputs: &SimulationInputs, now: f64, generation: u64) -> WavePacket {
        WavePacket {
            spawned_at: now,
            width: packet_constants::BASE_WIDTH
                + inputs.intensity as f32 * packet_constants::WIDTH_PER_INTENSITY,
            generation,
        }
    }

    /// Replace the live inputs, rebuilding all derived state.
    ///
    /// The in-flight packet is dropped and a fresh one spawned at `now`, and
    /// the surface animation restarts its phase. The generation counter
    /// ticks so stale samples are detectable.
    pub fn set_inputs(&mut self, inputs: SimulationInputs, now: f64) {
        self.inputs = inputs.clamped();
        self.profile = SeabedProfile::build(&self.inputs, &self.surface_config);
        self.schedule = PropagationSchedule::build(&self.profile, self.inputs.depth_m);
        self.generation += 1;
        self.packet = Self::spawn_packet(&self.inputs, now, self.generation);
        self.surface_epoch = now;
    }

    /// Advance the packet lifecycle: a packet that reached the shore is
    /// replaced immediately, with no gap, by the next one in sequence.
    pub fn update(&mut self, now: f64) {
        while now - self.packet.spawned_at >= packet_constants::PACKET_DURATION_S {
            self.packet.spawned_at += packet_constants::PACKET_DURATION_S;
        }
    }

    /// Sample the in-flight packet at `now` (linear easing over the fixed
    /// 5-second duration).
    pub fn sample_packet(&self, now: f64) -> PacketSample {
        let elapsed = now - self.packet.spawned_at;
        let progress =
            (elapsed / packet_constants::PACKET_DURATION_S).clamp(0.0, 1.0) as f32;
        let x = self.schedule.position_at(progress);
        let height = shoaling::height_at(x, &self.inputs, &self.profile);
        PacketSample {
            progress,
            x,
            height,
        }
    }

    /// Seconds of surface animation since the last (re)start.
    pub fn surface_time(&self, now: f64) -> f32 {
        (now - self.surface_epoch) as f32
    }

    pub fn inputs(&self) -> &SimulationInputs {
        &self.inputs
    }

    pub fn surface_config(&self) -> &SurfaceConfig {
        &self.surface_config
    }

    pub fn profile(&self) -> &SeabedProfile {
        &self.profile
    }

    pub fn schedule(&self) -> &PropagationSchedule {
        &self.schedule
    }

    pub fn sea_surface(&self) -> &SeaSurface {
        &self.sea_surface
    }

    pub fn packet(&self) -> &WavePacket {
        &self.packet
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_at(now: f64) -> ShoalingSim {
        ShoalingSim::new(SimulationInputs::default(), SurfaceConfig::default(), now)
    }

    #[test]
    fn test_packet_travels_and_respawns_without_gap() {
        let mut sim = sim_at(0.0);

        let start = sim.sample_packet(0.0);
        assert_eq!(start.progress, 0.0);
        assert_eq!(start.x, 0.0);

        let end = sim.sample_packet(4.999);
        assert!(end.progress > 0.99);

        // Crossing the 5 s boundary respawns immediately: the next packet is
        // already 0.2 s into its run, not waiting at zero.
        sim.update(5.2);
        let next = sim.sample_packet(5.2);
        assert!((next.progress - 0.04).abs() < 1e-4);
        assert_eq!(sim.packet().generation, 0);
    }

    #[test]
    fn test_respawn_catches_up_after_long_stall() {
        let mut sim = sim_at(0.0);
        sim.update(17.3);
        let sample = sim.sample_packet(17.3);
        // 17.3 = 3 full packets + 2.3 s into the fourth
        assert!((sample.progress - 2.3 / 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_input_change_cancels_in_flight_packet() {
        let mut sim = sim_at(0.0);
        sim.update(2.5);
        let before = sim.sample_packet(2.5);
        assert!(before.progress > 0.0);
        let old_generation = sim.packet().generation;
        let old_total = sim.schedule().total_time_units;

        let steeper = SimulationInputs {
            slope: 9,
            ..SimulationInputs::default()
        };
        sim.set_inputs(steeper, 2.5);

        // The old packet is gone: the new one starts at zero progress, under
        // the new generation, against the rebuilt schedule.
        let after = sim.sample_packet(2.5);
        assert_eq!(after.progress, 0.0);
        assert_eq!(after.x, 0.0);
        assert_eq!(sim.packet().generation, old_generation + 1);
        assert_eq!(sim.generation(), old_generation + 1);
        assert!(sim.schedule().total_time_units != old_total);
        assert_eq!(sim.inputs().slope, 9);

        // Surface phase restarted too.
        assert_eq!(sim.surface_time(2.5), 0.0);
    }

    #[test]
    fn test_packet_width_scales_with_intensity() {
        let mut inputs = SimulationInputs::default();
        inputs.intensity = 1;
        let sim = ShoalingSim::new(inputs, SurfaceConfig::default(), 0.0);
        assert_eq!(sim.packet().width, 42.0);

        inputs.intensity = 10;
        let sim = ShoalingSim::new(inputs, SurfaceConfig::default(), 0.0);
        assert_eq!(sim.packet().width, 60.0);
    }

    #[test]
    fn test_constructor_clamps_host_inputs() {
        let wild = SimulationInputs {
            slope: 40,
            intensity: 0,
            depth_m: -3.0,
            visual_gain: 9.0,
        };
        let sim = ShoalingSim::new(wild, SurfaceConfig::default(), 0.0);
        assert!(sim.inputs().validate().is_ok());
    }

    #[test]
    fn test_packet_height_matches_shoaling_model() {
        let mut sim = sim_at(0.0);
        sim.update(4.9);
        let sample = sim.sample_packet(4.9);
        let expected = shoaling::height_at(sample.x, sim.inputs(), sim.profile());
        assert_eq!(sample.height, expected);
        // Near shore the packet stands taller than its deep-water amplitude.
        assert!(sample.height > shoaling::wave_amplitude(sim.inputs()));
    }
}
