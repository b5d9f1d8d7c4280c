//! Builds the per-frame 2D scene geometry in logical canvas units.
//!
//! Everything is emitted as one triangle list: sea body fill, translucent
//! highlight ribbon, seabed fill, and the optional seawall overlay. The
//! renderer clears the surface and draws this list, nothing is retained
//! across frames.

use bytemuck::{Pod, Zeroable};

use crate::params::seawall_constants;
use crate::sim::ShoalingSim;
use crate::surface::packet_bump;

/// Colored 2D vertex (logical canvas coordinates, y down)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex2d {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

const SEA_BODY: [f32; 4] = [0.08, 0.3, 0.55, 1.0];
const HIGHLIGHT: [f32; 4] = [0.75, 0.92, 1.0, 0.35];
const SEABED: [f32; 4] = [0.76, 0.64, 0.42, 1.0];
const SEAWALL: [f32; 4] = [0.45, 0.46, 0.52, 1.0];

/// Horizontal sampling step for the surface and floor polylines
const SAMPLE_STEP: f32 = 2.0;

/// Highlight ribbon half-thickness
const HIGHLIGHT_HALF: f32 = 1.2;

/// Build the scene triangle list for one frame.
///
/// `now` is the host timeline in seconds; `recommended_seawall_m` is the
/// external analysis result (presentation only, may be absent).
pub fn build(sim: &ShoalingSim, now: f64, recommended_seawall_m: Option<f32>) -> Vec<Vertex2d> {
    let config = sim.surface_config();
    let time_s = sim.surface_time(now);
    let intensity = sim.inputs().intensity;
    let packet = sim.sample_packet(now);
    let packet_width = sim.packet().width;

    let surface_y = |x: f32| -> f32 {
        let y = sim.sea_surface().body_y_at(x, time_s, intensity)
            - packet_bump(x, packet.x, packet_width, packet.height);
        y.max(2.0)
    };

    let mut vertices = Vec::new();

    // Sea body: surface path down to the bottom edge
    let mut x = 0.0;
    while x < config.width {
        let x1 = (x + SAMPLE_STEP).min(config.width);
        push_quad(
            &mut vertices,
            x,
            surface_y(x),
            config.height,
            x1,
            surface_y(x1),
            config.height,
            SEA_BODY,
        );
        x = x1;
    }

    // Highlight ribbon, phase-offset and raised, blended over the body
    let mut x = 0.0;
    while x < config.width {
        let x1 = (x + SAMPLE_STEP).min(config.width);
        let y0 = sim.sea_surface().highlight_y_at(x, time_s, intensity);
        let y1 = sim.sea_surface().highlight_y_at(x1, time_s, intensity);
        push_quad(
            &mut vertices,
            x,
            y0 - HIGHLIGHT_HALF,
            y0 + HIGHLIGHT_HALF,
            x1,
            y1 - HIGHLIGHT_HALF,
            y1 + HIGHLIGHT_HALF,
            HIGHLIGHT,
        );
        x = x1;
    }

    // Seabed fill: floor curve down to the bottom edge, drawn over the sea
    let mut x = 0.0;
    while x < config.width {
        let x1 = (x + SAMPLE_STEP).min(config.width);
        push_quad(
            &mut vertices,
            x,
            sim.profile().floor_y_at(x),
            config.height,
            x1,
            sim.profile().floor_y_at(x1),
            config.height,
            SEABED,
        );
        x = x1;
    }

    // Seawall overlay: shore-anchored rectangle, only when a recommendation
    // exists. Does not feed back into the model.
    if let Some(height_m) = recommended_seawall_m {
        let wall_px =
            (height_m * seawall_constants::PX_PER_METER).min(seawall_constants::MAX_HEIGHT_PX);
        let x0 = sim.profile().shore_x;
        let x1 = x0 + seawall_constants::WIDTH_PX;
        let top = config.sea_level_y - wall_px;
        let bottom = config.sea_level_y + 8.0;
        push_quad(&mut vertices, x0, top, bottom, x1, top, bottom, SEAWALL);
    }

    vertices
}

/// Push the two triangles of a vertical quad between two sampled columns.
#[allow(clippy::too_many_arguments)]
fn push_quad(
    vertices: &mut Vec<Vertex2d>,
    x0: f32,
    top0: f32,
    bottom0: f32,
    x1: f32,
    top1: f32,
    bottom1: f32,
    color: [f32; 4],
) {
    let tl = Vertex2d {
        position: [x0, top0],
        color,
    };
    let bl = Vertex2d {
        position: [x0, bottom0],
        color,
    };
    let tr = Vertex2d {
        position: [x1, top1],
        color,
    };
    let br = Vertex2d {
        position: [x1, bottom1],
        color,
    };
    vertices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SimulationInputs, SurfaceConfig};

    fn sim() -> ShoalingSim {
        ShoalingSim::new(SimulationInputs::default(), SurfaceConfig::default(), 0.0)
    }

    #[test]
    fn test_scene_is_a_triangle_list() {
        let vertices = build(&sim(), 0.0, None);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 3, 0);
    }

    #[test]
    fn test_seawall_emitted_only_when_recommended() {
        let sim = sim();
        let without = build(&sim, 0.0, None);
        let with = build(&sim, 0.0, Some(4.0));
        assert_eq!(with.len(), without.len() + 6);
    }

    #[test]
    fn test_packet_raises_the_surface_at_its_position() {
        let mut sim = sim();
        sim.update(2.0);
        let packet = sim.sample_packet(2.0);
        let time_s = sim.surface_time(2.0);
        let undisturbed =
            sim.sea_surface()
                .body_y_at(packet.x, time_s, sim.inputs().intensity);

        let vertices = build(&sim, 2.0, None);
        // The sea-body quad nearest the packet center must sit above (smaller
        // y) the undisturbed surface path.
        let near = vertices
            .iter()
            .filter(|v| v.color == SEA_BODY && (v.position[0] - packet.x).abs() < SAMPLE_STEP)
            .map(|v| v.position[1])
            .fold(f32::INFINITY, f32::min);
        assert!(
            near < undisturbed,
            "no bump at packet x={}: {} vs {}",
            packet.x,
            near,
            undisturbed
        );
    }

    #[test]
    fn test_vertices_stay_on_the_logical_surface() {
        let config = SurfaceConfig::default();
        let mut sim = sim();
        sim.update(4.5);
        for v in build(&sim, 4.5, Some(10.0)) {
            assert!(v.position[0] >= 0.0 && v.position[0] <= config.width);
            assert!(v.position[1] >= 0.0 && v.position[1] <= config.height);
        }
    }
}
