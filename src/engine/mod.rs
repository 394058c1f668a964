//! Host-facing engine: mesh load gate, input routing and per-frame advance.

mod accessors;
mod input;

pub use accessors::RenderState;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Instant;

use crate::camera::Camera;
use crate::error::StippleError;
use crate::interaction::InteractionMachine;
use crate::options::Options;
use crate::picking::{ReferenceMesh, Viewport};
use crate::placement::{build_instances, InstanceTable};
use crate::uniforms::UniformStore;

/// Raw mesh buffers handed over when loading completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Flat `[x, y, z, x, y, z, ...]` vertex positions.
    pub positions: Vec<f32>,
    /// Triangle indices; empty means consecutive vertex triples.
    pub indices: Vec<u32>,
}

/// Everything derived from a loaded mesh. Exists only once loading has
/// succeeded in full.
#[derive(Debug)]
struct LoadedScene {
    table: InstanceTable,
    store: UniformStore,
    mesh: ReferenceMesh,
    machine: InteractionMachine,
}

/// Host-facing entry point tying placement, picking, interaction and the
/// camera together.
///
/// The host drives it from one thread:
/// 1. [`on_mesh_loaded`](Self::on_mesh_loaded) once the mesh is available,
/// 2. [`handle_input`](Self::handle_input) for every window event,
/// 3. [`advance`](Self::advance) then [`render_state`](Self::render_state)
///    once per frame.
///
/// Pointer events and frame ticks before a successful load are ignored.
#[derive(Debug)]
pub struct Engine {
    options: Options,
    camera: Camera,
    viewport: Viewport,
    rng: StdRng,
    scene: Option<LoadedScene>,
    loads: u64,
}

impl Engine {
    /// Unloaded engine with OS-seeded placement randomness.
    pub fn new(options: Options) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    /// Unloaded engine with deterministic placement randomness.
    pub fn with_seed(options: Options, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: Options, rng: StdRng) -> Self {
        let camera = Camera::from_options(&options.camera, 1.0);
        Self {
            options,
            camera,
            viewport: Viewport::new(0.0, 0.0),
            rng,
            scene: None,
            loads: 0,
        }
    }

    /// Build instances, uniforms and the collision mesh from `mesh`.
    ///
    /// All or nothing: on error the engine is left unloaded, including when
    /// a previous mesh had been loaded.
    pub fn on_mesh_loaded(
        &mut self,
        mesh: MeshData,
    ) -> Result<(), StippleError> {
        self.scene = None;
        let MeshData { positions, indices } = mesh;

        let table = build_instances(
            &positions,
            positions.len() / 3,
            &self.options.placement,
            &mut self.rng,
        )?;
        let store = UniformStore::from_table(&table)?;
        let reference = ReferenceMesh::new(&positions, &indices)?;

        let rest_eye = Vec3::from_array(self.options.camera.eye);
        self.camera.eye = rest_eye;
        let machine =
            InteractionMachine::new(self.options.interaction.clone(), rest_eye);

        log::debug!(
            "mesh loaded: {} instances, {} triangles",
            table.len(),
            reference.triangle_count()
        );
        self.loads += 1;
        self.scene = Some(LoadedScene {
            table,
            store,
            mesh: reference,
            machine,
        });
        Ok(())
    }

    /// Tick all ramps to `now`, committing their values to the uniform
    /// store and camera. This is the only place values change during a
    /// frame.
    ///
    /// Returns whether any ramp is still in flight, so hosts can stop
    /// redrawing once everything has settled.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        scene
            .machine
            .update(now, &mut scene.store, &mut self.camera)
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;
    use web_time::Duration;

    use super::*;
    use crate::error::GeometryError;
    use crate::input::InputEvent;
    use crate::interaction::InteractionState;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn pointer(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    /// Quad facing the default camera at z = 0, its shared edge kept off the
    /// view axis.
    fn quad() -> MeshData {
        MeshData {
            positions: vec![
                -0.4, -0.5, 0.0, 0.6, -0.5, 0.0, 0.6, 0.5, 0.0, -0.4, 0.5, 0.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    fn loaded_engine() -> Engine {
        let mut engine = Engine::with_seed(Options::default(), 42);
        engine.on_mesh_loaded(quad()).unwrap();
        engine.handle_input(
            InputEvent::Resized {
                width: 800,
                height: 600,
            },
            Instant::now(),
        );
        engine
    }

    #[test]
    fn test_three_vertex_mesh_places_instances_at_vertices() {
        let mut engine = Engine::with_seed(Options::default(), 1);
        engine
            .on_mesh_loaded(MeshData {
                positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                indices: Vec::new(),
            })
            .unwrap();

        let state = engine.render_state().unwrap();
        assert_eq!(state.instance_count, 3);
        assert_eq!(state.transforms[0], Mat4::IDENTITY);
        assert_eq!(state.transforms[1], Mat4::from_translation(Vec3::X));
        assert_eq!(state.transforms[2], Mat4::from_translation(Vec3::Y));
        assert_eq!(state.uniforms.len(), 3);
    }

    #[test]
    fn test_center_pointer_hovers_three_vertex_mesh() {
        let mut engine = Engine::with_seed(Options::default(), 1);
        engine
            .on_mesh_loaded(MeshData {
                positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                indices: Vec::new(),
            })
            .unwrap();
        let t0 = Instant::now();
        engine.handle_input(
            InputEvent::Resized {
                width: 800,
                height: 600,
            },
            t0,
        );

        engine.handle_input(pointer(400.0, 300.0), t0);
        assert!(engine.interaction_state().hovering);
        let _ = engine.advance(t0 + ms(600));
        let state = engine.interaction_state();
        assert_eq!(state.hover_strength, 1.0);
        assert!(state.focus_point.length() < 1e-4);
    }

    #[test]
    fn test_failed_load_leaves_engine_unloaded() {
        let mut engine = Engine::with_seed(Options::default(), 1);
        let err = engine
            .on_mesh_loaded(MeshData {
                positions: vec![0.0; 4],
                indices: Vec::new(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            StippleError::Geometry(GeometryError::NotTriples { len: 4 })
        ));
        assert!(!engine.is_loaded());

        engine.on_mesh_loaded(quad()).unwrap();
        let bad_indices = MeshData {
            indices: vec![0, 1, 9],
            ..quad()
        };
        assert!(engine.on_mesh_loaded(bad_indices).is_err());
        assert!(!engine.is_loaded());
        assert!(engine.render_state().is_none());
    }

    #[test]
    fn test_pointer_before_load_is_ignored() {
        let mut engine = Engine::with_seed(Options::default(), 1);
        let t0 = Instant::now();
        let camera = engine.camera().clone();
        engine.handle_input(
            InputEvent::Resized {
                width: 800,
                height: 600,
            },
            t0,
        );
        engine.handle_input(pointer(400.0, 300.0), t0);
        assert!(!engine.advance(t0 + ms(500)));
        assert_eq!(engine.camera().eye, camera.eye);
        assert_eq!(engine.interaction_state(), InteractionState::default());
    }

    #[test]
    fn test_resize_updates_viewport_and_aspect() {
        let engine = loaded_engine();
        assert_eq!(engine.viewport(), Viewport::new(800.0, 600.0));
        assert!((engine.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_hover_then_leave_end_to_end() {
        let mut engine = loaded_engine();
        let t0 = Instant::now();

        engine.handle_input(pointer(400.0, 300.0), t0);
        assert!(engine.interaction_state().hovering);
        assert!(engine.advance(t0 + ms(100)));
        assert!(!engine.advance(t0 + ms(600)));

        let state = engine.interaction_state();
        assert_eq!(state.hover_strength, 1.0);
        assert!(state.focus_point.length() < 1e-4);
        let render = engine.render_state().unwrap();
        assert!(render.uniforms.iter().all(|u| u.hover_strength == 1.0));

        // Top-left corner is off the quad.
        engine.handle_input(pointer(5.0, 5.0), t0 + ms(600));
        assert!(!engine.interaction_state().hovering);
        let mut previous = 1.0;
        let mut now = t0 + ms(600);
        for _ in 0..20 {
            now += ms(16);
            let _ = engine.advance(now);
            let strength = engine.interaction_state().hover_strength;
            assert!(strength <= previous);
            previous = strength;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn test_render_state_exposes_camera_uniform() {
        let mut engine = loaded_engine();
        let t0 = Instant::now();
        engine.handle_input(pointer(800.0, 0.0), t0);
        let _ = engine.advance(t0 + ms(600));

        let render = engine.render_state().unwrap();
        let eye = Vec3::from_array(render.camera.position);
        assert!((eye - Vec3::new(0.15, 0.1, 1.2)).length() < 1e-5);
        assert_eq!(render.instance_count, 4);
        assert!(render.revision > 0);
        // Corner pointer misses the quad, so only the camera moved.
        assert!(!engine.interaction_state().hovering);
        assert_eq!(engine.interaction_state().focus_point, Vec3::ZERO);
    }
}
