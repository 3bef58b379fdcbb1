//! Foundation elements for dashscroll: pointer input, per-frame input and
//! the small gesture primitives shared by every scrollable region.

pub mod frame_timer;
pub mod gesture_constants;
pub mod input;
pub mod orientation;
pub mod velocity_history;

pub use dashscroll_graphics::{Point, Rect};
pub use frame_timer::FrameTimer;
pub use input::{FrameInput, FrameSnapshot, PointerEvent, PointerPhase, PointerSlot, PRIMARY_SLOT};
pub use orientation::Orientation;
pub use velocity_history::VelocityHistory;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::prelude::*;
    pub use crate::orientation::Orientation;
    pub use crate::velocity_history::VelocityHistory;
}
