//! Read-only views of engine state.

use glam::Mat4;

use super::Engine;
use crate::camera::{Camera, CameraUniform};
use crate::interaction::InteractionState;
use crate::options::Options;
use crate::picking::Viewport;
use crate::placement::{cube_geometry, CubeGeometry};
use crate::uniforms::InstanceUniforms;

/// Everything a frame needs to draw, borrowed from the engine.
///
/// Holds no logic; values are exactly what the last
/// [`advance`](Engine::advance) committed.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    /// Per-instance placement transforms.
    pub transforms: &'a [Mat4],
    /// Raw column-major transforms, ready for upload.
    pub transforms_raw: &'a [[f32; 16]],
    /// Per-instance uniform records.
    pub uniforms: &'a [InstanceUniforms],
    /// Camera uniform for the current eye and aspect.
    pub camera: CameraUniform,
    /// Number of instances to draw.
    pub instance_count: usize,
    /// Uniform store write counter; unchanged means no re-upload needed.
    pub revision: u64,
    /// Successful mesh loads so far; changes whenever the instance table is
    /// rebuilt.
    pub scene_generation: u64,
}

impl Engine {
    /// Read-only view for rendering, or `None` before a mesh has loaded.
    pub fn render_state(&self) -> Option<RenderState<'_>> {
        let scene = self.scene.as_ref()?;
        Some(RenderState {
            transforms: scene.table.transforms(),
            transforms_raw: scene.table.transforms_raw(),
            uniforms: scene.store.read_for_render(),
            camera: CameraUniform::from_camera(&self.camera),
            instance_count: scene.table.len(),
            revision: scene.store.revision(),
            scene_generation: self.loads,
        })
    }

    /// Whether a mesh has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.scene.is_some()
    }

    /// Interaction values as of the last tick; the initial state before
    /// loading.
    pub fn interaction_state(&self) -> InteractionState {
        self.scene
            .as_ref()
            .map_or_else(InteractionState::default, |scene| {
                scene.machine.state()
            })
    }

    /// Latest viewport size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current camera, including drift.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Options the engine was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Box mesh drawn once per instance.
    pub fn cube_geometry(&self) -> CubeGeometry {
        cube_geometry(self.options.placement.cube_size)
    }
}
