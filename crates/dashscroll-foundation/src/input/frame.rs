//! Per-frame input handed to scroll engines by the host.

use super::types::PointerEvent;
use smallvec::SmallVec;

/// Everything a scroll engine consumes from the host for one render frame.
///
/// The host's input-polling stage owns the event queue; engines only borrow
/// it for the duration of `update`.
pub trait FrameInput {
    /// Pointer samples for this frame, in arrival order.
    fn pointer_events(&self) -> &[PointerEvent];

    /// Mouse wheel movement in notches. Zero when the wheel did not move.
    fn wheel_delta(&self) -> f32 {
        0.0
    }

    /// Seconds elapsed since the previous frame. May be zero on the very first
    /// frame or after a clock hiccup; engines substitute a nominal frame.
    fn frame_time(&self) -> f32;
}

/// Owned `FrameInput` for hosts that collect events into a buffer each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    events: SmallVec<[PointerEvent; 8]>,
    wheel_delta: f32,
    frame_time: f32,
}

impl FrameSnapshot {
    pub fn new(frame_time: f32) -> Self {
        Self {
            events: SmallVec::new(),
            wheel_delta: 0.0,
            frame_time,
        }
    }

    pub fn with_event(mut self, event: PointerEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = PointerEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn with_wheel(mut self, notches: f32) -> Self {
        self.wheel_delta = notches;
        self
    }

    pub fn push_event(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    pub fn set_wheel_delta(&mut self, notches: f32) {
        self.wheel_delta = notches;
    }

    pub fn set_frame_time(&mut self, seconds: f32) {
        self.frame_time = seconds;
    }

    /// Drops queued events and wheel input, keeping the buffer's storage for
    /// the next frame.
    pub fn clear(&mut self) {
        self.events.clear();
        self.wheel_delta = 0.0;
    }
}

impl FrameInput for FrameSnapshot {
    fn pointer_events(&self) -> &[PointerEvent] {
        &self.events
    }

    fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }
}
