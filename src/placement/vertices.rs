use glam::Vec3;

use crate::error::GeometryError;

/// Typed view over a flat `[x, y, z, x, y, z, ...]` position buffer.
///
/// Keeps stride arithmetic in one place: callers address vertices by index
/// and get a [`Vec3`] back.
#[derive(Debug, Clone, Copy)]
pub struct VertexPositions<'a> {
    flat: &'a [f32],
}

impl<'a> VertexPositions<'a> {
    /// Wrap a flat buffer. Fails if its length is not a multiple of 3.
    pub fn new(flat: &'a [f32]) -> Result<Self, GeometryError> {
        if flat.len() % 3 != 0 {
            return Err(GeometryError::NotTriples { len: flat.len() });
        }
        Ok(Self { flat })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.flat.len() / 3
    }

    /// Whether the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// Position of vertex `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Vec3> {
        let start = index.checked_mul(3)?;
        let xyz = self.flat.get(start..start.checked_add(3)?)?;
        Some(Vec3::from_slice(xyz))
    }

    /// Iterate vertex positions in index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + 'a {
        self.flat.chunks_exact(3).map(Vec3::from_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_access() {
        let flat = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let verts = VertexPositions::new(&flat).unwrap();
        assert_eq!(verts.len(), 2);
        assert_eq!(verts.get(1), Some(Vec3::new(3.0, 4.0, 5.0)));
        assert_eq!(verts.get(2), None);
        assert_eq!(verts.get(usize::MAX), None);
        assert_eq!(verts.iter().count(), 2);
    }

    #[test]
    fn test_rejects_partial_vertex() {
        let flat = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(
            VertexPositions::new(&flat).unwrap_err(),
            GeometryError::NotTriples { len: 4 }
        );
    }

    #[test]
    fn test_empty_buffer() {
        let verts = VertexPositions::new(&[]).unwrap();
        assert!(verts.is_empty());
        assert_eq!(verts.get(0), None);
    }
}
