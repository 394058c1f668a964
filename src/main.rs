//! Headless stipple demo.
//!
//! Loads a generated sphere, sweeps a scripted pointer across the viewport
//! and logs hover transitions and the animated uniforms frame by frame.
//!
//! Usage: `stipple [options.toml]`

use std::f32::consts::{PI, TAU};
use std::path::Path;

use stipple::engine::{Engine, MeshData};
use stipple::input::InputEvent;
use stipple::options::Options;
use web_time::{Duration, Instant};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAME: Duration = Duration::from_millis(16);
const SWEEP_FRAMES: u32 = 120;
const SETTLE_FRAMES: u32 = 40;

/// UV sphere of the given radius centered on the origin.
fn uv_sphere(radius: f32, rings: u32, segments: u32) -> MeshData {
    let mut positions = Vec::new();
    for ring in 0..=rings {
        let theta = ring as f32 / rings as f32 * PI;
        for segment in 0..=segments {
            let phi = segment as f32 / segments as f32 * TAU;
            positions.extend_from_slice(&[
                radius * theta.sin() * phi.cos(),
                radius * theta.cos(),
                radius * theta.sin() * phi.sin(),
            ]);
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::new();
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * stride + segment;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    MeshData { positions, indices }
}

fn load_options() -> Options {
    match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("debug"),
    )
    .init();

    let mut engine = Engine::new(load_options());
    let start = Instant::now();
    engine.handle_input(
        InputEvent::Resized {
            width: WIDTH,
            height: HEIGHT,
        },
        start,
    );

    if let Err(e) = engine.on_mesh_loaded(uv_sphere(0.5, 24, 48)) {
        log::error!("Mesh load failed: {e}");
        std::process::exit(1);
    }
    if let Some(state) = engine.render_state() {
        log::info!(
            "{} instances, cube of {} indices",
            state.instance_count,
            engine.cube_geometry().indices.len()
        );
    }

    let mut now = start;
    let mut hovering = false;
    for frame in 0..SWEEP_FRAMES + SETTLE_FRAMES {
        now += FRAME;
        if frame < SWEEP_FRAMES {
            let x = frame as f32 / (SWEEP_FRAMES - 1) as f32 * WIDTH as f32;
            engine.handle_input(
                InputEvent::PointerMoved {
                    x,
                    y: HEIGHT as f32 * 0.5,
                },
                now,
            );
        }
        let animating = engine.advance(now);

        let state = engine.interaction_state();
        if state.hovering != hovering {
            hovering = state.hovering;
            log::info!(
                "frame {frame}: {}",
                if hovering { "hover enter" } else { "hover leave" }
            );
        }
        log::trace!(
            "frame {frame}: strength {:.3} focus {:.3} eye {:.3}",
            state.hover_strength,
            state.focus_point,
            engine.camera().eye
        );
        if !animating && frame >= SWEEP_FRAMES {
            log::info!("settled after frame {frame}");
            break;
        }
    }

    let state = engine.interaction_state();
    log::info!(
        "final hover strength {:.3}, focus point {:.3}",
        state.hover_strength,
        state.focus_point
    );
}
