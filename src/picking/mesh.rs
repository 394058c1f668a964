//! Collision copy of the originally loaded mesh.

use glam::{Mat4, Vec3};

use super::ray::{ray_aabb_hit_t, ray_triangle_intersect, Ray};
use crate::error::GeometryError;
use crate::placement::VertexPositions;

/// Nearest surface hit along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// World-space intersection point.
    pub point: Vec3,
    /// Unit world-space face normal, following the triangle's winding.
    pub normal: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    /// Index of the triangle that was hit.
    pub triangle: usize,
}

/// Triangulated surface kept for hover ray casts, whether or not it is
/// drawn.
#[derive(Debug, Clone)]
pub struct ReferenceMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    bounds: Option<(Vec3, Vec3)>,
    transform: Mat4,
    inverse: Mat4,
}

impl ReferenceMesh {
    /// Mesh from a flat position buffer and a triangle index buffer.
    ///
    /// An empty index buffer means consecutive vertex triples form the
    /// triangles; trailing vertices that do not complete a triangle are
    /// ignored.
    pub fn new(
        positions: &[f32],
        indices: &[u32],
    ) -> Result<Self, GeometryError> {
        let vertices = VertexPositions::new(positions)?;
        if indices.len() % 3 != 0 {
            return Err(GeometryError::IndicesNotTriples {
                len: indices.len(),
            });
        }
        if let Some(&index) =
            indices.iter().find(|&&i| i as usize >= vertices.len())
        {
            return Err(GeometryError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }

        let positions: Vec<Vec3> = vertices.iter().collect();
        let bounds = positions.iter().fold(
            None,
            |acc: Option<(Vec3, Vec3)>, &p| {
                Some(acc.map_or((p, p), |(lo, hi)| (lo.min(p), hi.max(p))))
            },
        );

        Ok(Self {
            positions,
            indices: indices.to_vec(),
            bounds,
            transform: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        })
    }

    /// Place the mesh in the world with `transform`.
    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self.inverse = transform.inverse();
        self
    }

    /// Mesh-to-world transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Mesh-local corners of triangle `index`.
    pub fn triangle(&self, index: usize) -> Option<[Vec3; 3]> {
        let corner = |k: usize| -> Option<Vec3> {
            let slot = index.checked_mul(3)?.checked_add(k)?;
            let vertex = if self.indices.is_empty() {
                slot
            } else {
                *self.indices.get(slot)? as usize
            };
            self.positions.get(vertex).copied()
        };
        Some([corner(0)?, corner(1)?, corner(2)?])
    }

    /// Nearest hit of a world-space ray against the mesh.
    ///
    /// Ties resolve to the lowest triangle index.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let (lo, hi) = self.bounds?;
        let local = ray.transformed(self.inverse);
        let _ = ray_aabb_hit_t(&local, lo, hi)?;

        let mut nearest: Option<(f32, usize, [Vec3; 3])> = None;
        for index in 0..self.triangle_count() {
            let Some([a, b, c]) = self.triangle(index) else {
                continue;
            };
            let Some(t) = ray_triangle_intersect(&local, a, b, c) else {
                continue;
            };
            if nearest.is_none_or(|(best, _, _)| t < best) {
                nearest = Some((t, index, [a, b, c]));
            }
        }

        let (t, triangle, [a, b, c]) = nearest?;
        let local_normal = (b - a).cross(c - a);
        let normal = self
            .inverse
            .transpose()
            .transform_vector3(local_normal)
            .normalize_or_zero();
        Some(Hit {
            point: ray.at(t),
            normal,
            distance: t * ray.direction.length(),
            triangle,
        })
    }
}
