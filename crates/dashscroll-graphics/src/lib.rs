//! Pure geometry data for dashscroll
//!
//! Points and rectangles in logical pixels. Nothing in here knows about
//! scrolling; the foundation crate decides which axis a widget reads.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect};
}
