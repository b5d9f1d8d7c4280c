//! Shorewave - an interactive wave-shoaling hazard visualizer
//!
//! A wave packet travels from deep water to shore over a parametric seabed:
//! fast offshore, slowing and steepening past the shelf knee. Slope,
//! intensity, depth, and visual gain are live inputs; every change restarts
//! the animation cleanly.

mod cli;
mod params;
mod propagation;
mod rendering;
mod scene;
mod seabed;
mod shoaling;
mod sim;
mod surface;

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use clap::Parser;

use cli::Args;
use params::{RecordingConfig, RenderConfig, SimulationInputs, SurfaceConfig};
use rendering::RenderSystem;
use sim::ShoalingSim;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    sim: ShoalingSim,
    recommended_seawall_m: Option<f32>,

    // Configuration
    render_config: RenderConfig,
    surface_config: SurfaceConfig,
    recording_config: Option<RecordingConfig>,

    // Time tracking
    start_time: Instant,
    frame_num: usize,
}

impl App {
    fn new(
        inputs: SimulationInputs,
        recommended_seawall_m: Option<f32>,
        recording_config: Option<RecordingConfig>,
    ) -> Self {
        let surface_config = SurfaceConfig::default();
        let sim = ShoalingSim::new(inputs, surface_config.clone(), 0.0);

        Self {
            window: None,
            render_system: None,
            sim,
            recommended_seawall_m,
            render_config: RenderConfig::default(),
            surface_config,
            recording_config,
            start_time: Instant::now(),
            frame_num: 0,
        }
    }

    /// Current simulation timeline in seconds.
    ///
    /// Recording uses the frame counter as the clock so captured frames are
    /// deterministic; interactive mode follows wall time.
    fn now(&self) -> f64 {
        match &self.recording_config {
            Some(config) => self.frame_num as f64 / config.fps as f64,
            None => self.start_time.elapsed().as_secs_f64(),
        }
    }

    /// Apply a keyboard adjustment to the live inputs.
    ///
    /// Every change routes through `set_inputs`: the in-flight packet and
    /// surface phase are torn down before the new configuration starts.
    fn adjust_inputs(&mut self, key: KeyCode) {
        let current = *self.sim.inputs();
        let changed = match key {
            KeyCode::ArrowUp => SimulationInputs {
                slope: current.slope + 1,
                ..current
            },
            KeyCode::ArrowDown => SimulationInputs {
                slope: current.slope.saturating_sub(1),
                ..current
            },
            KeyCode::ArrowRight => SimulationInputs {
                intensity: current.intensity + 1,
                ..current
            },
            KeyCode::ArrowLeft => SimulationInputs {
                intensity: current.intensity.saturating_sub(1),
                ..current
            },
            KeyCode::KeyW => SimulationInputs {
                depth_m: current.depth_m + 5.0,
                ..current
            },
            KeyCode::KeyS => SimulationInputs {
                depth_m: current.depth_m - 5.0,
                ..current
            },
            KeyCode::KeyD => SimulationInputs {
                visual_gain: current.visual_gain + 0.25,
                ..current
            },
            KeyCode::KeyA => SimulationInputs {
                visual_gain: current.visual_gain - 0.25,
                ..current
            },
            _ => return,
        };

        let now = self.now();
        self.sim.set_inputs(changed, now);
        let inputs = self.sim.inputs();
        println!(
            "Inputs: slope={} intensity={} depth={}m gain={:.2} (generation {})",
            inputs.slope,
            inputs.intensity,
            inputs.depth_m,
            inputs.visual_gain,
            self.sim.generation()
        );
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Shorewave - Wave Shoaling Visualizer")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.surface_config,
            self.recording_config.clone(),
        ))
        .unwrap();

        println!("\nShorewave is running!");
        println!("Arrows: slope/intensity  W/S: depth  A/D: gain  ESC: quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.start_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.adjust_inputs(key);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                if let Some(ref config) = self.recording_config {
                    if self.frame_num >= config.total_frames() {
                        println!("Recording complete: {} frames", config.total_frames());
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self) {
        let now = self.now();

        // Advance the packet lifecycle (respawns on completion, no gap)
        self.sim.update(now);

        // Build and upload this frame's scene
        let vertices = scene::build(&self.sim, now, self.recommended_seawall_m);

        let Some(ref mut render_system) = self.render_system else {
            return;
        };
        render_system.update_vertices(&vertices);

        if let Err(e) = render_system.render(self.frame_num) {
            eprintln!("Render error: {:?}", e);
        }
        self.frame_num += 1;
    }
}

fn main() {
    let args = Args::parse();

    let inputs = match args.parse_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            std::process::exit(1);
        }
    };

    let recording_config = match args.create_recording_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Shorewave - coastal wave-shoaling visualizer");
    println!(
        "slope={} intensity={} depth={}m gain={:.2}",
        inputs.slope, inputs.intensity, inputs.depth_m, inputs.visual_gain
    );
    if let Some(height) = args.seawall {
        println!("Seawall overlay: {:.1} m recommended", height);
    }

    let mut app = App::new(inputs, args.seawall, recording_config);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
