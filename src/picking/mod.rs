//! Pointer hover picking via CPU ray casting.
//!
//! The pointer is normalized to NDC, turned into a camera ray and tested
//! against a [`ReferenceMesh`], the collision copy of the loaded mesh. No
//! shared state is touched; a miss is an ordinary `None`.

mod mesh;
mod ray;
mod resolver;

pub use mesh::{Hit, ReferenceMesh};
pub use ray::{ray_aabb_hit_t, ray_triangle_intersect, Ray};
pub use resolver::{resolve, resolve_ndc, Viewport};
