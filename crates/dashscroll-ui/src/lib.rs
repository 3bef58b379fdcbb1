//! Touch scroll gesture engine for the dashboard UI toolkit
//!
//! A [`ScrollGestureEngine`] turns the pointer events of each render frame into
//! a one-dimensional scroll offset: it follows drags, flings with inertia,
//! rubber-bands past the content edges and bounces back. One engine belongs to
//! one scrollable region; a 2D area uses two.

mod config;
mod enabled;
mod fling;
mod scroll_gesture;
mod wheel;

pub use config::{ConfigError, DeviceClass, ScrollConfig};
pub use enabled::Enabled;
pub use fling::{release_velocity, FlingClassifier, ReleaseDecision, RELEASE_SMOOTHING_SAMPLES};
pub use scroll_gesture::{ScrollGestureEngine, ScrollState};
pub use wheel::WheelAccumulator;

pub use dashscroll_animation::{BoundaryCorrection, FrictionDecay, RubberBand};
pub use dashscroll_foundation::{
    FrameInput, FrameSnapshot, Orientation, PointerEvent, PointerPhase, VelocityHistory,
};
pub use dashscroll_graphics::{Point, Rect};

pub mod prelude {
    pub use crate::config::{DeviceClass, ScrollConfig};
    pub use crate::enabled::Enabled;
    pub use crate::scroll_gesture::{ScrollGestureEngine, ScrollState};
    pub use dashscroll_foundation::prelude::*;
    pub use dashscroll_graphics::prelude::*;
}
