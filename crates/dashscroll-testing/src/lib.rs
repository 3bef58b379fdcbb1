//! Testing utilities and gesture robot for dashscroll

pub mod gesture_assertions;
pub mod gesture_robot;

pub use gesture_robot::*;

pub mod prelude {
    pub use crate::gesture_assertions;
    pub use crate::gesture_robot::*;
}
