//! Friction decay for inertial scrolling.
//!
//! Velocity falls off exponentially with a fixed time constant, which makes
//! the decay independent of the frame rate: two 8ms steps decay exactly as
//! much as one 16ms step.

/// Exponential velocity decay, `v(t) = v0 * exp(-t / time_constant)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionDecay {
    /// Seconds for the velocity to fall to 1/e of its value.
    pub time_constant: f32,
}

impl Default for FrictionDecay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIME_CONSTANT)
    }
}

impl FrictionDecay {
    /// Tuned on the dashboard panel; shorter feels sticky, longer feels icy.
    pub const DEFAULT_TIME_CONSTANT: f32 = 0.18;

    pub fn new(time_constant: f32) -> Self {
        Self { time_constant }
    }

    /// Velocity after `dt` seconds of friction.
    pub fn step(&self, velocity: f32, dt: f32) -> f32 {
        velocity * (-dt / self.time_constant).exp()
    }
}
