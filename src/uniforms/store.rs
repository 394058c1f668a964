use glam::Vec3;

use crate::error::IndexError;
use crate::placement::InstanceTable;

/// Per-instance shader uniforms.
/// Must match the WGSL InstanceUniforms struct layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceUniforms {
    /// Shared focus point (identical across instances).
    pub focus_point: [f32; 3],
    /// Shared hover strength in [0, 1] (identical across instances).
    pub hover_strength: f32,
    /// Instance RGB color.
    pub color: [f32; 3],
    /// Instance phase seed.
    pub phase: f32,
    /// Instance secondary random scalar.
    pub random: f32,
    /// Instance size scale.
    pub size: f32,
    /// Padding to a 16-byte multiple.
    pub(crate) _pad: [f32; 2],
}

impl Default for InstanceUniforms {
    fn default() -> Self {
        Self {
            focus_point: [0.0; 3],
            hover_strength: 0.0,
            color: [1.0; 3],
            phase: 0.0,
            random: 0.0,
            size: 1.0,
            _pad: [0.0; 2],
        }
    }
}

/// Value for a channel shared by every instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BroadcastValue {
    /// Animated influence point.
    FocusPoint(Vec3),
    /// Animated hover strength, clamped to [0, 1].
    HoverStrength(f32),
}

/// Value for a channel that differs per instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstanceValue {
    /// Phase seed.
    Phase(f32),
    /// Secondary random scalar.
    Random(f32),
    /// Size scale.
    Size(f32),
    /// RGB color.
    Color(Vec3),
}

impl InstanceValue {
    fn apply(self, record: &mut InstanceUniforms) {
        match self {
            Self::Phase(v) => record.phase = v,
            Self::Random(v) => record.random = v,
            Self::Size(v) => record.size = v,
            Self::Color(c) => record.color = c.to_array(),
        }
    }
}

/// Write-optimized table of per-instance uniforms.
///
/// Every write bumps [`revision`](Self::revision) so uploaders can skip
/// frames where nothing changed.
#[derive(Debug, Clone)]
pub struct UniformStore {
    records: Vec<InstanceUniforms>,
    focus_point: Vec3,
    hover_strength: f32,
    revision: u64,
}

impl UniformStore {
    /// Store for `count` instances with default values.
    pub fn new(count: usize) -> Self {
        Self {
            records: vec![InstanceUniforms::default(); count],
            focus_point: Vec3::ZERO,
            hover_strength: 0.0,
            revision: 0,
        }
    }

    /// Store filled with the static parameters of `table`.
    pub fn from_table(table: &InstanceTable) -> Result<Self, IndexError> {
        let mut store = Self::new(table.len());
        for (index, params) in table.params().iter().enumerate() {
            store.set_one(index, InstanceValue::Phase(params.phase))?;
            store.set_one(index, InstanceValue::Random(params.random))?;
            store.set_one(index, InstanceValue::Size(params.size))?;
            store.set_one(index, InstanceValue::Color(params.color))?;
        }
        Ok(store)
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no instances.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Publish a broadcast value to every instance.
    pub fn set_all(&mut self, value: BroadcastValue) {
        match value {
            BroadcastValue::FocusPoint(point) => {
                self.focus_point = point;
                let point = point.to_array();
                for record in &mut self.records {
                    record.focus_point = point;
                }
            }
            BroadcastValue::HoverStrength(strength) => {
                let strength = strength.clamp(0.0, 1.0);
                self.hover_strength = strength;
                for record in &mut self.records {
                    record.hover_strength = strength;
                }
            }
        }
        self.revision += 1;
    }

    /// Write one instance's value.
    pub fn set_one(
        &mut self,
        index: usize,
        value: InstanceValue,
    ) -> Result<(), IndexError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(IndexError { index, len })?;
        value.apply(record);
        self.revision += 1;
        Ok(())
    }

    /// Committed records, ready to be cast to bytes for upload.
    pub fn read_for_render(&self) -> &[InstanceUniforms] {
        &self.records
    }

    /// Record of instance `index`.
    pub fn get(&self, index: usize) -> Option<&InstanceUniforms> {
        self.records.get(index)
    }

    /// Canonical focus point last published.
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Canonical hover strength last published.
    pub fn hover_strength(&self) -> f32 {
        self.hover_strength
    }

    /// Write counter, incremented on every committed write.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
