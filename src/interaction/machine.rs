use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

use crate::animation::{TweenHandle, TweenSlot};
use crate::camera::Camera;
use crate::options::InteractionOptions;
use crate::picking::Hit;
use crate::uniforms::{BroadcastValue, UniformStore};

/// Whether the pointer is currently over the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// Pointer is off the mesh (or has not moved yet).
    #[default]
    Idle,
    /// Pointer is over the mesh.
    Hovering,
}

/// Logical interaction values, as last committed by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Whether the pointer is over the mesh.
    pub hovering: bool,
    /// Animated influence point in world space.
    pub focus_point: Vec3,
    /// Animated hover strength in [0, 1].
    pub hover_strength: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovering: false,
            focus_point: Vec3::ZERO,
            hover_strength: 0.0,
        }
    }
}

/// Idle/Hovering state machine driving the hover, focus and camera drift
/// ramps.
///
/// Pointer events only start or retarget ramps; values reach the uniform
/// store and the camera exclusively through [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct InteractionMachine {
    options: InteractionOptions,
    hover_state: HoverState,
    state: InteractionState,
    hover: TweenSlot<f32>,
    focus: TweenSlot<Vec3>,
    drift: TweenSlot<Vec3>,
    hover_ramp: Option<TweenHandle>,
    focus_ramp: Option<TweenHandle>,
    drift_ramp: Option<TweenHandle>,
    rest_eye: Vec3,
    eye: Vec3,
}

impl InteractionMachine {
    /// Machine in the initial `Idle` state; `rest_eye` is the camera
    /// position drift offsets are measured from.
    pub fn new(options: InteractionOptions, rest_eye: Vec3) -> Self {
        Self {
            options,
            hover_state: HoverState::Idle,
            state: InteractionState::default(),
            hover: TweenSlot::new(),
            focus: TweenSlot::new(),
            drift: TweenSlot::new(),
            hover_ramp: None,
            focus_ramp: None,
            drift_ramp: None,
            rest_eye,
            eye: rest_eye,
        }
    }

    /// Current Idle/Hovering state.
    pub fn hover_state(&self) -> HoverState {
        self.hover_state
    }

    /// Values as of the last [`update`](Self::update).
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether any ramp is still in flight.
    pub fn is_animating(&self) -> bool {
        self.hover_ramp.is_some_and(|ramp| self.hover.is_live(ramp))
            || self.focus_ramp.is_some_and(|ramp| self.focus.is_live(ramp))
            || self.drift_ramp.is_some_and(|ramp| self.drift.is_live(ramp))
    }

    /// Feed one pointer move: the resolver's result and the pointer's NDC
    /// position.
    pub fn on_pointer(&mut self, hit: Option<Hit>, ndc: Vec2, now: Instant) {
        if self.options.camera_drift {
            self.start_drift(ndc, now);
        }

        match (self.hover_state, hit) {
            (HoverState::Idle, Some(hit)) => {
                log::debug!("hover enter at {}", hit.point);
                self.hover_state = HoverState::Hovering;
                self.state.hovering = true;
                self.ramp_hover(1.0, self.options.hover_in(), now);
                self.retarget_focus(hit.point, now);
            }
            (HoverState::Hovering, Some(hit)) => {
                self.retarget_focus(hit.point, now);
            }
            (HoverState::Hovering, None) => {
                log::debug!("hover leave");
                self.hover_state = HoverState::Idle;
                self.state.hovering = false;
                self.ramp_hover(0.0, self.options.hover_out(), now);
            }
            (HoverState::Idle, None) => {}
        }
    }

    /// Tick every in-flight ramp to `now`, publishing broadcast values to
    /// `store` and the drifted eye to `camera`.
    ///
    /// Returns whether any ramp is still in flight afterwards.
    pub fn update(
        &mut self,
        now: Instant,
        store: &mut UniformStore,
        camera: &mut Camera,
    ) -> bool {
        let hover = self.hover_ramp.and_then(|ramp| self.hover.tick(ramp, now));
        if let Some(strength) = hover {
            store.set_all(BroadcastValue::HoverStrength(strength));
            self.state.hover_strength = store.hover_strength();
        }
        let focus = self.focus_ramp.and_then(|ramp| self.focus.tick(ramp, now));
        if let Some(point) = focus {
            store.set_all(BroadcastValue::FocusPoint(point));
            self.state.focus_point = point;
        }
        let drift = self.drift_ramp.and_then(|ramp| self.drift.tick(ramp, now));
        if let Some(eye) = drift {
            self.eye = eye;
            camera.eye = eye;
        }
        self.is_animating()
    }

    fn ramp_hover(&mut self, to: f32, duration: Duration, now: Instant) {
        let from = self.hover.peek(now).unwrap_or(self.state.hover_strength);
        self.hover_ramp = Some(self.hover.start(
            from,
            to,
            now,
            duration,
            self.options.easing,
        ));
    }

    fn retarget_focus(&mut self, point: Vec3, now: Instant) {
        let from = self.focus.peek(now).unwrap_or(self.state.focus_point);
        if self.focus_ramp.is_some_and(|ramp| self.focus.is_live(ramp)) {
            log::trace!("focus retargeted mid-ramp to {point}");
        }
        self.focus_ramp = Some(self.focus.start(
            from,
            point,
            now,
            self.options.focus(),
            self.options.easing,
        ));
    }

    fn start_drift(&mut self, ndc: Vec2, now: Instant) {
        let ndc = ndc.clamp(Vec2::NEG_ONE, Vec2::ONE);
        let [sx, sy] = self.options.drift_scale;
        let target = self.rest_eye + Vec3::new(ndc.x * sx, ndc.y * sy, 0.0);
        let from = self.drift.peek(now).unwrap_or(self.eye);
        self.drift_ramp = Some(self.drift.start(
            from,
            target,
            now,
            self.options.drift(),
            self.options.easing,
        ));
    }
}
