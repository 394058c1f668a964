//! Centralized runtime options with TOML preset support.
//!
//! Camera placement, interaction timings and instance placement parameters
//! are consolidated here. Options serialize to/from TOML so hosts can keep
//! presets next to their mesh assets.

mod camera;
mod interaction;
mod placement;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
pub use placement::{rgb_from_hex, PlacementOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StippleError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and rest placement.
    pub camera: CameraOptions,
    /// Hover ramp timings and camera drift.
    pub interaction: InteractionOptions,
    /// Instance geometry and static parameter distributions.
    pub placement: PlacementOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StippleError> {
        let content = std::fs::read_to_string(path).map_err(StippleError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| StippleError::OptionsParse(e.to_string()))?;
        options.warn_suspicious();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StippleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StippleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StippleError::Io)?;
        }
        std::fs::write(path, content).map_err(StippleError::Io)
    }

    fn warn_suspicious(&self) {
        let timings = [
            ("hover_in_secs", self.interaction.hover_in_secs),
            ("hover_out_secs", self.interaction.hover_out_secs),
            ("focus_secs", self.interaction.focus_secs),
            ("drift_secs", self.interaction.drift_secs),
        ];
        for (name, value) in timings {
            if value.is_nan() || value < 0.0 {
                log::warn!("interaction.{name} = {value} treated as 0");
            }
        }
        if self.camera.znear <= 0.0 || self.camera.zfar <= self.camera.znear {
            log::warn!(
                "camera clip range [{}, {}] is degenerate",
                self.camera.znear,
                self.camera.zfar
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[interaction]
focus_secs = 0.5
camera_drift = false
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.focus_secs, 0.5);
        assert!(!opts.interaction.camera_drift);
        // Everything else should be default
        assert_eq!(opts.interaction.hover_in_secs, 0.25);
        assert_eq!(opts.camera.fovy, 75.0);
        assert_eq!(opts.placement.size_range, [0.3, 3.0]);
    }

    #[test]
    fn easing_parses_from_snake_case() {
        let toml_str = r#"
[interaction]
easing = "sine_in_out"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.interaction.easing,
            crate::util::easing::EasingFunction::SineInOut
        );
    }

    #[test]
    fn load_reports_parse_errors() {
        let path = std::env::temp_dir()
            .join(format!("stipple-options-{}.toml", std::process::id()));
        std::fs::write(&path, "[camera]\nfovy = \"wide\"\n").unwrap();
        let result = Options::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(StippleError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let path = std::env::temp_dir()
            .join(format!("stipple-save-{}", std::process::id()))
            .join("preset.toml");
        let mut opts = Options::default();
        opts.placement.cube_size = 0.01;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
        assert_eq!(loaded, opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("placement"));

        let interaction = &props["interaction"]["properties"];
        assert!(interaction.get("hover_in_secs").is_some());
        assert!(interaction.get("camera_drift").is_some());
        assert!(interaction.get("drift_scale").is_none());
        assert!(interaction.get("easing").is_none());
    }
}
