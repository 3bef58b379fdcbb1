//! Tuning for a scroll engine.

use dashscroll_animation::{BoundaryCorrection, FrictionDecay, RubberBand};
use dashscroll_foundation::gesture_constants::{
    CLICK_BLOCK_VELOCITY, DASHBOARD_HISTORY_LEN, DESKTOP_HISTORY_LEN, DRAG_THRESHOLD,
    MAX_VELOCITY, MIN_FLING_VELOCITY, REJECT_DECELERATION_FACTOR, STOP_VELOCITY, TARGET_FPS,
    VELOCITY_HISTORY_CAPACITY, WHEEL_SPEED,
};
use dashscroll_foundation::Orientation;
use std::fmt;

/// Hardware the UI runs on. Only affects how many velocity samples are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// The in-car display with its high-rate touch controller.
    #[default]
    Dashboard,
    /// Development builds driven by a mouse.
    Desktop,
}

impl DeviceClass {
    pub fn history_len(self) -> usize {
        match self {
            DeviceClass::Dashboard => DASHBOARD_HISTORY_LEN,
            DeviceClass::Desktop => DESKTOP_HISTORY_LEN,
        }
    }
}

/// Rejected `ScrollConfig`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Invalid {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
    HistoryLen {
        len: usize,
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid {
                field,
                value,
                expected,
            } => write!(f, "{field} = {value} is invalid, expected {expected}"),
            ConfigError::HistoryLen { len, max } => {
                write!(f, "history_len = {len} is invalid, expected 1..={max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Every tunable of a [`ScrollGestureEngine`](crate::ScrollGestureEngine).
///
/// Defaults are the dashboard tuning. Override with the `with_*` builders:
///
/// ```
/// use dashscroll_ui::{DeviceClass, Orientation, ScrollConfig};
///
/// let config = ScrollConfig::for_device(DeviceClass::Desktop)
///     .with_orientation(Orientation::Horizontal)
///     .with_drag_threshold(12.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    pub orientation: Orientation,
    /// When false content may rest out of range: no rubber-banding and no
    /// bounce-back.
    pub handle_out_of_bounds: bool,
    pub drag_threshold: f32,
    pub min_fling_velocity: f32,
    pub max_velocity: f32,
    pub click_block_velocity: f32,
    pub stop_velocity: f32,
    pub reject_deceleration_factor: f32,
    pub history_len: usize,
    /// Pixels per wheel notch.
    pub wheel_speed: f32,
    pub target_fps: f32,
    pub friction: FrictionDecay,
    pub rubber_band: RubberBand,
    pub boundary: BoundaryCorrection,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::default())
    }
}

impl ScrollConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        Self {
            orientation: Orientation::Vertical,
            handle_out_of_bounds: true,
            drag_threshold: DRAG_THRESHOLD,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_velocity: MAX_VELOCITY,
            click_block_velocity: CLICK_BLOCK_VELOCITY,
            stop_velocity: STOP_VELOCITY,
            reject_deceleration_factor: REJECT_DECELERATION_FACTOR,
            history_len: device.history_len(),
            wheel_speed: WHEEL_SPEED,
            target_fps: TARGET_FPS,
            friction: FrictionDecay::default(),
            rubber_band: RubberBand::default(),
            boundary: BoundaryCorrection::default(),
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_handle_out_of_bounds(mut self, handle: bool) -> Self {
        self.handle_out_of_bounds = handle;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_min_fling_velocity(mut self, velocity: f32) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    pub fn with_max_velocity(mut self, velocity: f32) -> Self {
        self.max_velocity = velocity;
        self
    }

    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    pub fn with_wheel_speed(mut self, speed: f32) -> Self {
        self.wheel_speed = speed;
        self
    }

    pub fn with_target_fps(mut self, fps: f32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_friction(mut self, friction: FrictionDecay) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_rubber_band(mut self, rubber_band: RubberBand) -> Self {
        self.rubber_band = rubber_band;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryCorrection) -> Self {
        self.boundary = boundary;
        self
    }

    /// Frame duration substituted for zero, negative or non-finite frame times.
    pub fn nominal_frame_time(&self) -> f32 {
        1.0 / self.target_fps
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("drag_threshold", self.drag_threshold)?;
        non_negative("min_fling_velocity", self.min_fling_velocity)?;
        positive("max_velocity", self.max_velocity)?;
        non_negative("click_block_velocity", self.click_block_velocity)?;
        positive("stop_velocity", self.stop_velocity)?;
        at_least_one("reject_deceleration_factor", self.reject_deceleration_factor)?;
        non_negative("wheel_speed", self.wheel_speed)?;
        positive("target_fps", self.target_fps)?;
        positive("friction.time_constant", self.friction.time_constant)?;
        positive("rubber_band.max_overshoot", self.rubber_band.max_overshoot)?;

        let resistance = self.rubber_band.resistance;
        if !(resistance > 0.0 && resistance < 1.0) {
            return Err(ConfigError::Invalid {
                field: "rubber_band.resistance",
                value: resistance,
                expected: "a value in (0, 1)",
            });
        }

        match self.boundary {
            BoundaryCorrection::Spring {
                return_strength,
                velocity_damping,
            } => {
                positive("boundary.return_strength", return_strength)?;
                if !(0.0..=1.0).contains(&velocity_damping) {
                    return Err(ConfigError::Invalid {
                        field: "boundary.velocity_damping",
                        value: velocity_damping,
                        expected: "a value in [0, 1]",
                    });
                }
            }
            BoundaryCorrection::Exponential { return_rate } => {
                positive("boundary.return_rate", return_rate)?;
            }
        }

        if self.history_len == 0 || self.history_len > VELOCITY_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryLen {
                len: self.history_len,
                max: VELOCITY_HISTORY_CAPACITY,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            expected: "a finite value > 0",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            expected: "a finite value >= 0",
        })
    }
}

fn at_least_one(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            expected: "a finite value >= 1",
        })
    }
}
