pub mod frame;
pub mod types;

pub use frame::{FrameInput, FrameSnapshot};
pub use types::{PointerEvent, PointerPhase, PointerSlot, PRIMARY_SLOT};

pub mod prelude {
    pub use super::frame::{FrameInput, FrameSnapshot};
    pub use super::types::{PointerEvent, PointerPhase, PointerSlot, PRIMARY_SLOT};
}
