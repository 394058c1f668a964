//! Input routing for [`Engine`].

use glam::Vec2;
use web_time::Instant;

use super::Engine;
use crate::input::InputEvent;
use crate::picking::{resolve_ndc, Viewport};

impl Engine {
    /// Process a platform-agnostic input event.
    ///
    /// Pointer moves are resolved against the reference mesh and fed to the
    /// interaction state machine; they start or retarget ramps but never
    /// write uniforms directly. Resizes update the viewport used for NDC
    /// normalization and the camera aspect.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::PointerMoved { x, y }, Instant::now());
    /// ```
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.dispatch_pointer_moved(Vec2::new(x, y), now);
            }
            InputEvent::Resized { width, height } => {
                self.resize(width, height);
            }
        }
    }

    fn dispatch_pointer_moved(&mut self, pointer: Vec2, now: Instant) {
        let Some(scene) = self.scene.as_mut() else {
            log::trace!("pointer move before mesh load ignored");
            return;
        };
        let Some(ndc) = self.viewport.to_ndc(pointer) else {
            log::trace!("pointer move with degenerate viewport ignored");
            return;
        };
        let hit = resolve_ndc(ndc, &self.camera, &scene.mesh);
        scene.machine.on_pointer(hit, ndc, now);
    }

    #[allow(clippy::cast_precision_loss)]
    fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width as f32, height as f32);
        self.viewport = Viewport::new(width, height);
        self.camera.resize(width, height);
        log::debug!("viewport resized to {width}x{height}");
    }
}
