//! Scroll gesture state machine.
//!
//! The engine is driven once per render frame:
//!
//! 1. pointer events of the frame are handled one by one, in arrival order,
//!    moving the engine between [`ScrollState`]s and applying drag deltas;
//! 2. wheel input is applied unless a finger is dragging;
//! 3. a physics step runs regardless of events: inertia decay while flying,
//!    and bounce-back of out-of-range content whenever no drag holds it.
//!
//! Offsets follow content translation: `0.0` aligns the leading edges of
//! content and viewport, and scrolling toward the content end makes the offset
//! negative. The resting range is `[min(0, viewport - content), 0]`.

use crate::config::{ConfigError, ScrollConfig};
use crate::enabled::Enabled;
use crate::fling::{FlingClassifier, ReleaseDecision};
use crate::wheel::WheelAccumulator;
use dashscroll_animation::{overshoot, violated_bound};
use dashscroll_foundation::gesture_constants::MIN_SAMPLE_DT;
use dashscroll_foundation::{
    FrameInput, Orientation, PointerEvent, PointerPhase, VelocityHistory,
};
use dashscroll_graphics::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// Nothing is touching or moving the content.
    Idle,
    /// Pointer is down but has not moved past the drag threshold yet.
    Pressed,
    /// Content follows the pointer.
    Dragging,
    /// Content keeps moving after a fling and slows down.
    Inertia,
}

/// One-dimensional scroll physics for a single scrollable region.
///
/// Create one per region and keep it for the widget's lifetime; the offset
/// persists between frames.
#[derive(Debug)]
pub struct ScrollGestureEngine {
    config: ScrollConfig,
    state: ScrollState,
    offset: f32,
    velocity: f32,
    history: VelocityHistory,
    // Reference frame of the current press; meaningful in Pressed/Dragging.
    drag_start_offset: f32,
    drag_start_position: f32,
    last_position: f32,
    last_time: f64,
    // The current press stopped a fast fling; taps must not click through.
    caught_fling: bool,
    enabled: Enabled,
    wheel: WheelAccumulator,
}

impl Default for ScrollGestureEngine {
    fn default() -> Self {
        Self::new(Orientation::Vertical)
    }
}

impl ScrollGestureEngine {
    /// Engine with the default dashboard tuning.
    pub fn new(orientation: Orientation) -> Self {
        Self::from_valid_config(ScrollConfig::default().with_orientation(orientation))
    }

    /// Engine with custom tuning. Fails if `config` does not validate.
    pub fn try_new(config: ScrollConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected scroll config: {err}");
            return Err(err);
        }
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ScrollConfig) -> Self {
        let history = VelocityHistory::with_limit(config.history_len);
        Self {
            config,
            state: ScrollState::Idle,
            offset: 0.0,
            velocity: 0.0,
            history,
            drag_start_offset: 0.0,
            drag_start_position: 0.0,
            last_position: 0.0,
            last_time: 0.0,
            caught_fling: false,
            enabled: Enabled::default(),
            wheel: WheelAccumulator::new(),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current velocity in px/s. Only meaningful while dragging or flying.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Programmatic scroll, e.g. back to the top when a panel is shown.
    ///
    /// The value is stored as is; out-of-range values bounce back on the
    /// following frames. Non-finite values are ignored.
    pub fn set_offset(&mut self, offset: f32) {
        if !offset.is_finite() {
            log::warn!("ignoring non-finite scroll offset {offset}");
            return;
        }
        self.offset = offset;
    }

    /// Enable or disable input, with a flag or a per-frame predicate.
    ///
    /// Disabling stops any gesture or fling immediately but keeps the offset.
    pub fn set_enabled(&mut self, enabled: impl Into<Enabled>) {
        self.enabled = enabled.into();
        if !self.enabled.resolve() {
            self.reset_to_idle();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.resolve()
    }

    /// Whether a tap on the content should count as a real click rather than
    /// a touch that merely catches moving content.
    pub fn is_interaction_safe(&self) -> bool {
        match self.state {
            ScrollState::Dragging => false,
            ScrollState::Inertia => self.velocity.abs() < self.config.click_block_velocity,
            ScrollState::Pressed => !self.caught_fling,
            ScrollState::Idle => true,
        }
    }

    /// Process one frame of input and physics and return the new offset.
    ///
    /// Call exactly once per render frame, before drawing. `bounds` is the
    /// viewport (also the press hit region) and `content_extent` the content
    /// length along the scroll axis.
    pub fn update<I>(&mut self, input: &I, bounds: Rect, content_extent: f32) -> f32
    where
        I: FrameInput + ?Sized,
    {
        if !self.enabled.resolve() {
            self.reset_to_idle();
            return self.offset;
        }

        let bounds_extent = self.config.orientation.extent(bounds);
        let max_offset = 0.0;
        let min_offset = (bounds_extent - content_extent).min(0.0);

        for event in input.pointer_events().iter().filter(|e| e.is_primary()) {
            self.handle_pointer(event, bounds, min_offset, max_offset);
        }

        self.apply_wheel(input.wheel_delta());

        let dt = self.frame_dt(input.frame_time());
        self.step_physics(dt, min_offset, max_offset);

        log::trace!(
            "scroll state={:?} offset={:.1} velocity={:.1}",
            self.state,
            self.offset,
            self.velocity
        );

        self.offset
    }

    fn handle_pointer(&mut self, event: &PointerEvent, bounds: Rect, min: f32, max: f32) {
        let position = self.config.orientation.coordinate(event.position);

        match event.phase {
            PointerPhase::Pressed => {
                if bounds.contains_point(event.position) {
                    self.begin_press(position, event.timestamp);
                }
            }
            PointerPhase::Held => {
                if matches!(self.state, ScrollState::Pressed | ScrollState::Dragging) {
                    self.track(position, event.timestamp, min, max);
                }
            }
            PointerPhase::Released => {
                if matches!(self.state, ScrollState::Pressed | ScrollState::Dragging) {
                    self.release(min, max);
                }
            }
            PointerPhase::Cancelled => {
                if matches!(self.state, ScrollState::Pressed | ScrollState::Dragging) {
                    self.reset_to_idle();
                }
            }
        }
    }

    fn begin_press(&mut self, position: f32, timestamp: f64) {
        self.caught_fling = self.state == ScrollState::Inertia
            && self.velocity.abs() >= self.config.click_block_velocity;
        self.transition(ScrollState::Pressed);
        self.drag_start_offset = self.offset;
        self.drag_start_position = position;
        self.last_position = position;
        self.last_time = timestamp;
        self.velocity = 0.0;
        self.history.clear();
        self.wheel.reset();
    }

    fn track(&mut self, position: f32, timestamp: f64, min: f32, max: f32) {
        if self.state == ScrollState::Pressed {
            // Travel below the threshold is never applied. The crossing
            // sample itself moves the content by its own step.
            if (position - self.drag_start_position).abs() < self.config.drag_threshold {
                self.last_position = position;
                self.last_time = timestamp;
                return;
            }
            self.transition(ScrollState::Dragging);
        }

        let raw_delta = position - self.last_position;
        let delta = if self.config.handle_out_of_bounds {
            self.config.rubber_band.resist(self.offset, raw_delta, min, max)
        } else {
            raw_delta
        };
        self.offset += delta;

        // A sample without elapsed time carries no speed.
        if timestamp > self.last_time {
            let dt = (timestamp - self.last_time).max(MIN_SAMPLE_DT) as f32;
            self.velocity = self.clamp_velocity(delta / dt);
            self.history.push(self.velocity);
            self.last_time = timestamp;
        }
        self.last_position = position;
    }

    fn release(&mut self, min: f32, max: f32) {
        self.caught_fling = false;
        let decision = FlingClassifier::from_config(&self.config).classify(&self.history);
        self.history.clear();

        let mut velocity = match decision {
            ReleaseDecision::Fling(velocity) => velocity,
            ReleaseDecision::Settle => 0.0,
        };

        // Already past an edge: never fling further out, bounce-back takes over.
        if self.config.handle_out_of_bounds && overshoot(self.offset, min, max) * velocity > 0.0 {
            velocity = 0.0;
        }

        log::debug!(
            "scroll release after {:.1}px drag, velocity={velocity:.1}",
            self.offset - self.drag_start_offset
        );

        self.velocity = velocity;
        if velocity != 0.0 {
            self.transition(ScrollState::Inertia);
        } else {
            self.transition(ScrollState::Idle);
        }
    }

    fn apply_wheel(&mut self, notches: f32) {
        if notches == 0.0 || self.state == ScrollState::Dragging {
            return;
        }
        let applied = self.wheel.feed(notches * self.config.wheel_speed);
        if applied != 0.0 {
            self.offset += applied;
            self.velocity =
                self.clamp_velocity(self.velocity + applied * self.config.target_fps * 0.5);
        }
    }

    fn step_physics(&mut self, dt: f32, min: f32, max: f32) {
        if self.state == ScrollState::Inertia {
            self.velocity = self.config.friction.step(self.velocity, dt);
            self.offset += self.velocity * dt;

            if self.velocity.abs() < self.config.stop_velocity {
                self.velocity = 0.0;
                self.transition(ScrollState::Idle);
            }
        }

        // A dragging finger owns the overshoot; rubber-banding handles it.
        if !self.config.handle_out_of_bounds || self.state == ScrollState::Dragging {
            return;
        }

        if let Some(bound) = violated_bound(self.offset, min, max) {
            let correction = self.config.boundary.step(self.offset, self.velocity, bound, dt);
            self.offset = correction.offset;
            self.velocity = correction.velocity;

            if correction.settled {
                if self.state == ScrollState::Pressed {
                    self.velocity = 0.0;
                } else {
                    self.reset_to_idle();
                }
            }
        }
    }

    fn frame_dt(&self, frame_time: f32) -> f32 {
        if frame_time > 0.0 && frame_time.is_finite() {
            frame_time
        } else {
            self.config.nominal_frame_time()
        }
    }

    fn clamp_velocity(&self, velocity: f32) -> f32 {
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-self.config.max_velocity, self.config.max_velocity)
    }

    fn reset_to_idle(&mut self) {
        self.transition(ScrollState::Idle);
        self.velocity = 0.0;
        self.caught_fling = false;
        self.history.clear();
        self.wheel.reset();
    }

    fn transition(&mut self, next: ScrollState) {
        if self.state != next {
            log::debug!(
                "scroll {:?} -> {:?} offset={:.1} velocity={:.1}",
                self.state,
                next,
                self.offset,
                self.velocity
            );
            self.state = next;
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll_gesture_tests.rs"]
mod tests;
