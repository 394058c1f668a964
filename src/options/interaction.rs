use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Hover ramp timings and camera drift parameters.
pub struct InteractionOptions {
    /// Seconds for hover strength to ramp up to 1 on entering the mesh.
    #[schemars(title = "Hover In", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub hover_in_secs: f32,
    /// Seconds for hover strength to ramp down to 0 on leaving the mesh.
    #[schemars(title = "Hover Out", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub hover_out_secs: f32,
    /// Seconds for the focus point to travel to a new hit.
    #[schemars(title = "Focus Follow", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub focus_secs: f32,
    /// Whether pointer moves nudge the camera eye.
    #[schemars(title = "Camera Drift")]
    pub camera_drift: bool,
    /// Seconds for the camera eye to settle after a pointer move.
    #[schemars(title = "Drift Time", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub drift_secs: f32,
    /// Eye offset per unit of NDC pointer offset, `[x, y]`.
    #[schemars(skip)]
    pub drift_scale: [f32; 2],
    /// Easing applied to every ramp.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            hover_in_secs: 0.25,
            hover_out_secs: 0.25,
            focus_secs: 0.3,
            camera_drift: true,
            drift_secs: 0.5,
            drift_scale: [0.15, 0.1],
            easing: EasingFunction::default(),
        }
    }
}

impl InteractionOptions {
    /// Hover ramp-up duration.
    #[must_use]
    pub fn hover_in(&self) -> Duration {
        secs(self.hover_in_secs)
    }

    /// Hover ramp-down duration.
    #[must_use]
    pub fn hover_out(&self) -> Duration {
        secs(self.hover_out_secs)
    }

    /// Focus point ramp duration.
    #[must_use]
    pub fn focus(&self) -> Duration {
        secs(self.focus_secs)
    }

    /// Camera drift ramp duration.
    #[must_use]
    pub fn drift(&self) -> Duration {
        secs(self.drift_secs)
    }
}

/// Negative or non-finite durations collapse to an instant snap.
fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}
