//! Shared box geometry drawn once per instance.

use glam::Vec3;

/// Vertex of the instanced cube.
/// Must match the WGSL vertex input layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
}

/// Indexed triangle list for one cube.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeGeometry {
    /// 24 vertices, 4 per face so every face carries its own normal.
    pub vertices: Vec<CubeVertex>,
    /// 36 indices, counter-clockwise when viewed from outside.
    pub indices: Vec<u16>,
}

/// Face normal plus two in-plane axes with `u × v = normal`.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Axis-aligned cube of edge length `size` centered on the origin.
pub fn cube_geometry(size: f32) -> CubeGeometry {
    let half = size * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (normal + u * su + v * sv) * half;
            vertices.push(CubeVertex {
                position: corner.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }

    CubeGeometry { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_extent() {
        let cube = cube_geometry(0.003);
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.indices.len(), 36);
        for v in &cube.vertices {
            for c in v.position {
                assert!((c.abs() - 0.0015).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn test_triangles_wind_outward() {
        let cube = cube_geometry(2.0);
        for tri in cube.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from_array(cube.vertices[i as usize].position));
            let first = cube.vertices[tri[0] as usize];
            let normal = Vec3::from_array(first.normal);
            assert!((b - a).cross(c - a).dot(normal) > 0.0);
        }
    }
}
