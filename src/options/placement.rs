use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default instance palette: violet, coral, magenta, amber.
const DEFAULT_PALETTE: [u32; 4] =
    [0x0096_3CBD, 0x00FF_6F61, 0x00C5_299B, 0x00FE_AE51];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placement", inline)]
#[serde(default)]
/// Instance geometry and static parameter distributions.
pub struct PlacementOptions {
    /// Edge length of the cube drawn at every vertex.
    #[schemars(title = "Cube Size", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub cube_size: f32,
    /// Bounds of the per-instance phase seed.
    #[schemars(skip)]
    pub phase_range: [f32; 2],
    /// Bounds of the per-instance secondary random scalar.
    #[schemars(skip)]
    pub random_range: [f32; 2],
    /// Bounds of the per-instance size scale.
    #[schemars(skip)]
    pub size_range: [f32; 2],
    /// RGB colors instances pick from uniformly.
    #[schemars(skip)]
    pub palette: Vec<[f32; 3]>,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            cube_size: 0.003,
            phase_range: [-1.0, 1.0],
            random_range: [-1.0, 1.0],
            size_range: [0.3, 3.0],
            palette: DEFAULT_PALETTE
                .iter()
                .map(|&hex| rgb_from_hex(hex))
                .collect(),
        }
    }
}

/// `0xRRGGBB` to RGB floats in `[0, 1]`.
#[must_use]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}
