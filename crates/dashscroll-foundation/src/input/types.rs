use dashscroll_graphics::Point;

/// Touch slot reported by the input layer. Mouse input always uses slot 0.
pub type PointerSlot = u8;

/// The only slot a scroll engine listens to.
pub const PRIMARY_SLOT: PointerSlot = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger touched down or the primary button went down this sample.
    Pressed,
    /// Pointer is still down; position may or may not have changed.
    Held,
    /// Finger lifted or the button was released.
    Released,
    /// The input layer lost track of the pointer (e.g. touch controller reset).
    Cancelled,
}

/// A single pointer sample delivered by the input layer.
///
/// Timestamps are monotonic seconds and comparable across frames, so velocity
/// can be estimated between samples that arrive in different frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub slot: PointerSlot,
    pub position: Point,
    pub timestamp: f64,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Point, timestamp: f64) -> Self {
        Self {
            slot: PRIMARY_SLOT,
            position,
            timestamp,
            phase,
        }
    }

    pub fn pressed(position: Point, timestamp: f64) -> Self {
        Self::new(PointerPhase::Pressed, position, timestamp)
    }

    pub fn held(position: Point, timestamp: f64) -> Self {
        Self::new(PointerPhase::Held, position, timestamp)
    }

    pub fn released(position: Point, timestamp: f64) -> Self {
        Self::new(PointerPhase::Released, position, timestamp)
    }

    pub fn cancelled(position: Point, timestamp: f64) -> Self {
        Self::new(PointerPhase::Cancelled, position, timestamp)
    }

    /// Reassign the event to another touch slot.
    pub fn with_slot(mut self, slot: PointerSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.slot == PRIMARY_SLOT
    }
}
