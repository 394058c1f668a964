//! Ray construction and primitive intersection tests.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::Camera;

/// Determinant below which a ray is treated as parallel to a triangle.
const PARALLEL_EPSILON: f32 = 1e-12;

/// Half-line in world (or mesh-local) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction; unit length for camera rays, possibly scaled after
    /// [`transformed`](Self::transformed).
    pub direction: Vec3,
}

impl Ray {
    /// Ray from the camera eye through an NDC point.
    ///
    /// The NDC point is unprojected onto the far plane with the inverse
    /// view-projection; the ray starts at the eye so hit distances are
    /// measured from the camera origin. Returns `None` for a degenerate
    /// camera.
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Option<Self> {
        let inv_view_proj = camera.build_matrix().inverse();
        let world_far = inv_view_proj.project_point3(ndc.extend(1.0));
        let direction = (world_far - camera.eye).try_normalize()?;
        Some(Self {
            origin: camera.eye,
            direction,
        })
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray mapped through an affine transform. The parameter `t` of a point
    /// is preserved, so hits found in the transformed space can be evaluated
    /// on the original ray.
    pub fn transformed(&self, transform: Mat4) -> Self {
        Self {
            origin: transform.transform_point3(self.origin),
            direction: transform.transform_vector3(self.direction),
        }
    }
}

/// Möller–Trumbore ray/triangle test, two-sided.
///
/// Returns the ray parameter of the hit, or `None` if the ray misses, runs
/// parallel to the triangle, or the hit lies behind the origin.
pub fn ray_triangle_intersect(
    ray: &Ray,
    a: Vec3,
    b: Vec3,
    c: Vec3,
) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > 0.0).then_some(t)
}

/// Slab-method ray–AABB intersection, returns Some(t) or None.
///
/// A ray starting inside the box reports its exit distance. An axis the ray
/// runs parallel to only constrains the origin, so rays lying in a face
/// plane of the box still hit.
pub fn ray_aabb_hit_t(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    for axis in 0..3 {
        let (near, far) = slab(
            ray.origin[axis],
            ray.direction[axis],
            min[axis],
            max[axis],
        )?;
        tmin = tmin.max(near);
        tmax = tmax.min(far);
    }

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

/// Entry and exit parameters of one slab, or `None` if a parallel ray lies
/// outside it.
fn slab(origin: f32, direction: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    if direction == 0.0 {
        return (min..=max)
            .contains(&origin)
            .then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let inv = 1.0 / direction;
    let t1 = (min - origin) * inv;
    let t2 = (max - origin) * inv;
    Some((t1.min(t2), t1.max(t2)))
}
