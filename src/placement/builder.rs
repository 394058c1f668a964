//! Builds the instance table from a mesh's vertex buffer.

use glam::{Mat4, Vec3};
use rand::Rng;

use super::vertices::VertexPositions;
use crate::error::GeometryError;
use crate::options::PlacementOptions;

/// Per-instance values drawn once at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticParams {
    /// Orientation/phase seed, drawn from the phase range.
    pub phase: f32,
    /// Secondary random scalar, drawn from the random range independently
    /// of `phase`.
    pub random: f32,
    /// Size scale, drawn from the size range.
    pub size: f32,
    /// Palette slot the color came from.
    pub color_index: usize,
    /// RGB color.
    pub color: Vec3,
}

/// Placement transforms and static parameters, one entry per instance.
///
/// Built once per mesh load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceTable {
    transforms: Vec<Mat4>,
    params: Vec<StaticParams>,
}

impl InstanceTable {
    /// Number of instances.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the table has no instances.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Translation-only placement matrices in instance order.
    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    /// Transforms as column-major float arrays, ready for upload.
    pub fn transforms_raw(&self) -> &[[f32; 16]] {
        bytemuck::cast_slice(&self.transforms)
    }

    /// Static parameters in instance order.
    pub fn params(&self) -> &[StaticParams] {
        &self.params
    }

    /// Transform and parameters of instance `index`.
    pub fn instance(&self, index: usize) -> Option<(Mat4, StaticParams)> {
        Some((*self.transforms.get(index)?, *self.params.get(index)?))
    }
}

/// Build `count` instances from a flat position buffer.
///
/// Each vertex gets a translation-only transform to its exact position plus
/// a [`StaticParams`] tuple drawn from `rng` within the ranges in `options`.
/// Fails without producing a partial table if the buffer is malformed, if
/// `count` disagrees with the buffer, or if the palette or a range is
/// unusable.
pub fn build_instances<R: Rng + ?Sized>(
    positions: &[f32],
    count: usize,
    options: &PlacementOptions,
    rng: &mut R,
) -> Result<InstanceTable, GeometryError> {
    let vertices = VertexPositions::new(positions)?;
    if count != vertices.len() {
        return Err(GeometryError::CountMismatch {
            expected: count,
            actual: vertices.len(),
        });
    }
    if options.palette.is_empty() {
        return Err(GeometryError::EmptyPalette);
    }
    let [phase_min, phase_max] = checked_range("phase", options.phase_range)?;
    let [random_min, random_max] =
        checked_range("random", options.random_range)?;
    let [size_min, size_max] = checked_range("size", options.size_range)?;

    let mut transforms = Vec::with_capacity(count);
    let mut params = Vec::with_capacity(count);
    for position in vertices.iter() {
        transforms.push(Mat4::from_translation(position));

        let color_index = rng.random_range(0..options.palette.len());
        let color = options
            .palette
            .get(color_index)
            .map_or(Vec3::ONE, |rgb| Vec3::from_array(*rgb));
        params.push(StaticParams {
            phase: rng.random_range(phase_min..=phase_max),
            random: rng.random_range(random_min..=random_max),
            size: rng.random_range(size_min..=size_max),
            color_index,
            color,
        });
    }

    log::debug!(
        "placed {count} instances ({} palette colors)",
        options.palette.len()
    );
    Ok(InstanceTable { transforms, params })
}

fn checked_range(
    param: &'static str,
    [min, max]: [f32; 2],
) -> Result<[f32; 2], GeometryError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok([min, max])
    } else {
        Err(GeometryError::InvalidRange { param, min, max })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5717_ce11)
    }

    #[test]
    fn test_three_vertex_mesh_places_exact_translations() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let options = PlacementOptions::default();
        let table =
            build_instances(&positions, 3, &options, &mut rng()).unwrap();

        assert_eq!(table.len(), 3);
        let expected = [Vec3::ZERO, Vec3::X, Vec3::Y];
        for (transform, point) in table.transforms().iter().zip(expected) {
            assert_eq!(transform.w_axis.truncate(), point);
            assert_eq!(*transform, Mat4::from_translation(point));
        }
    }

    #[test]
    fn test_translations_are_bit_exact() {
        let positions = [0.1, -2.7, 1e-7, 123.456, 0.3, -0.0];
        let options = PlacementOptions::default();
        let table =
            build_instances(&positions, 2, &options, &mut rng()).unwrap();
        let (t1, _) = table.instance(1).unwrap();
        assert_eq!(t1.w_axis.x.to_bits(), 123.456_f32.to_bits());
        assert_eq!(t1.w_axis.y.to_bits(), 0.3_f32.to_bits());
        assert!(table.instance(2).is_none());

        let raw = table.transforms_raw();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[1][12].to_bits(), 123.456_f32.to_bits());
        assert_eq!(raw[1][15], 1.0);
    }

    #[test]
    fn test_params_stay_within_bounds() {
        let n = 2000;
        let positions: Vec<f32> = (0..n * 3).map(|i| i as f32 * 0.01).collect();
        let options = PlacementOptions::default();
        let table =
            build_instances(&positions, n, &options, &mut rng()).unwrap();

        assert_eq!(table.len(), n);
        for p in table.params() {
            assert!((-1.0..=1.0).contains(&p.phase), "phase {}", p.phase);
            assert!((-1.0..=1.0).contains(&p.random), "random {}", p.random);
            assert!((0.3..=3.0).contains(&p.size), "size {}", p.size);
            assert!(p.color_index < 4);
        }
    }

    #[test]
    fn test_colors_come_from_palette_roughly_uniformly() {
        let n = 8000;
        let positions = vec![0.0; n * 3];
        let options = PlacementOptions::default();
        let table =
            build_instances(&positions, n, &options, &mut rng()).unwrap();

        let mut counts = [0usize; 4];
        for p in table.params() {
            let expected = Vec3::from_array(options.palette[p.color_index]);
            assert_eq!(p.color, expected);
            counts[p.color_index] += 1;
        }
        // Expected 2000 per bucket; 3 sigma is about 116.
        for count in counts {
            assert!((1800..=2200).contains(&count), "bucket count {count}");
        }
    }

    #[test]
    fn test_phase_and_random_are_independent_draws() {
        let positions = vec![0.0; 300];
        let options = PlacementOptions::default();
        let table =
            build_instances(&positions, 100, &options, &mut rng()).unwrap();
        assert!(table.params().iter().any(|p| p.phase != p.random));
    }

    #[test]
    fn test_rejects_malformed_buffers() {
        let options = PlacementOptions::default();
        assert_eq!(
            build_instances(&[0.0; 4], 1, &options, &mut rng()).unwrap_err(),
            GeometryError::NotTriples { len: 4 }
        );
        assert_eq!(
            build_instances(&[0.0; 6], 3, &options, &mut rng()).unwrap_err(),
            GeometryError::CountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_rejects_unusable_options() {
        let empty = PlacementOptions {
            palette: Vec::new(),
            ..PlacementOptions::default()
        };
        assert_eq!(
            build_instances(&[0.0; 3], 1, &empty, &mut rng()).unwrap_err(),
            GeometryError::EmptyPalette
        );

        let inverted = PlacementOptions {
            size_range: [3.0, 0.3],
            ..PlacementOptions::default()
        };
        assert!(matches!(
            build_instances(&[0.0; 3], 1, &inverted, &mut rng()),
            Err(GeometryError::InvalidRange { param: "size", .. })
        ));
    }

    #[test]
    fn test_empty_mesh_builds_empty_table() {
        let options = PlacementOptions::default();
        let table = build_instances(&[], 0, &options, &mut rng()).unwrap();
        assert!(table.is_empty());
    }
}
