//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels and seconds. They are the defaults of
//! `ScrollConfig`; a widget that needs different tuning overrides them there
//! instead of editing these.

/// Distance in logical pixels the pointer must travel from the press position
/// before content starts following it.
///
/// Below this the gesture is still a tap candidate and the content must not
/// move at all.
pub const DRAG_THRESHOLD: f32 = 10.0;

/// Smoothed release velocity (px/s) at or above which a drag becomes a fling.
pub const MIN_FLING_VELOCITY: f32 = 60.0;

/// Upper bound for every velocity the engine stores, in px/s.
///
/// Pointer samples that arrive a few microseconds apart would otherwise produce
/// absurd velocities.
pub const MAX_VELOCITY: f32 = 15_000.0;

/// While flying faster than this (px/s) a touch on content stops the fling
/// instead of counting as a click.
pub const CLICK_BLOCK_VELOCITY: f32 = 180.0;

/// Inertia ends once speed decays below this, in px/s.
pub const STOP_VELOCITY: f32 = 15.0;

/// A drag whose last sample is this many times slower than the mean speed of
/// the first half of the drag was deliberately stopped and must not fling.
pub const REJECT_DECELERATION_FACTOR: f32 = 3.0;

/// Pixels scrolled per mouse wheel notch.
pub const WHEEL_SPEED: f32 = 80.0;

/// Frame rate the UI is tuned for. `1 / TARGET_FPS` replaces degenerate frame
/// times.
pub const TARGET_FPS: f32 = 60.0;

/// Shortest time between two pointer samples used for velocity estimation.
pub const MIN_SAMPLE_DT: f64 = 1e-6;

/// Number of slots in the velocity ring buffer.
pub const VELOCITY_HISTORY_CAPACITY: usize = 12;

/// Velocity samples kept on the dashboard hardware. Its touch controller
/// reports at a higher rate, so it needs a deeper history for the same window.
pub const DASHBOARD_HISTORY_LEN: usize = 12;

/// Velocity samples kept on desktop builds driven by a mouse.
pub const DESKTOP_HISTORY_LEN: usize = 8;
