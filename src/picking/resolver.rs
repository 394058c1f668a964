//! Pointer → mesh hit resolution.

use glam::Vec2;

use super::mesh::{Hit, ReferenceMesh};
use super::ray::Ray;
use crate::camera::Camera;

/// Drawable area size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given pixel size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height, or `None` for a degenerate viewport.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0)
            .then(|| self.width / self.height)
    }

    /// Convert pixel coordinates to NDC (-1 to 1), y flipped for screen
    /// coordinates. `None` for a degenerate viewport.
    pub fn to_ndc(&self, pointer: Vec2) -> Option<Vec2> {
        if self.aspect().is_none() {
            return None;
        }
        Some(Vec2::new(
            pointer.x / self.width * 2.0 - 1.0,
            -(pointer.y / self.height * 2.0 - 1.0),
        ))
    }
}

/// Cast the pointer into the scene and return the nearest mesh hit.
///
/// Pure function of its inputs. Returns `None` when the pointer lies outside
/// the viewport, the viewport is degenerate, the ray misses every triangle,
/// or the nearest hit lies beyond the camera's far plane.
pub fn resolve(
    pointer: Vec2,
    viewport: Viewport,
    camera: &Camera,
    mesh: &ReferenceMesh,
) -> Option<Hit> {
    let ndc = viewport.to_ndc(pointer)?;
    resolve_ndc(ndc, camera, mesh)
}

/// [`resolve`] for a pointer already in NDC.
pub fn resolve_ndc(
    ndc: Vec2,
    camera: &Camera,
    mesh: &ReferenceMesh,
) -> Option<Hit> {
    if !ndc.is_finite() || ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return None;
    }
    let ray = Ray::from_camera(camera, ndc)?;
    let hit = mesh.intersect(&ray)?;

    let depth = (hit.point - camera.eye).dot(camera.forward());
    (depth <= camera.zfar).then_some(hit)
}
