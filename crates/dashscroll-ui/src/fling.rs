//! Deciding whether a released drag keeps flying.

use crate::config::ScrollConfig;
use dashscroll_foundation::VelocityHistory;

/// Number of newest samples averaged into the release velocity.
pub const RELEASE_SMOOTHING_SAMPLES: usize = 3;

/// What happens to content when the finger lifts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseDecision {
    /// Continue under inertia with this velocity (px/s).
    Fling(f32),
    /// Stop where it is.
    Settle,
}

/// Mean of the newest samples; zero for an empty history.
pub fn release_velocity(history: &VelocityHistory) -> f32 {
    history
        .recent_mean(RELEASE_SMOOTHING_SAMPLES)
        .unwrap_or(0.0)
}

/// Classifies releases into flings and deliberate stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingClassifier {
    pub min_fling_velocity: f32,
    pub max_velocity: f32,
    pub reject_deceleration_factor: f32,
}

impl FlingClassifier {
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self {
            min_fling_velocity: config.min_fling_velocity,
            max_velocity: config.max_velocity,
            reject_deceleration_factor: config.reject_deceleration_factor,
        }
    }

    pub fn classify(&self, history: &VelocityHistory) -> ReleaseDecision {
        let velocity = release_velocity(history).clamp(-self.max_velocity, self.max_velocity);
        if velocity.abs() < self.min_fling_velocity {
            return ReleaseDecision::Settle;
        }
        if self.decelerated_before_release(history) {
            return ReleaseDecision::Settle;
        }
        ReleaseDecision::Fling(velocity)
    }

    /// A drag that slowed sharply before lifting was stopped on purpose.
    ///
    /// Judged on the newest sample alone: the smoothed release velocity still
    /// carries the speed from before the stop.
    fn decelerated_before_release(&self, history: &VelocityHistory) -> bool {
        if history.len() < 4 {
            return false;
        }
        match (history.newest(), history.first_half_mean_abs()) {
            (Some(last), Some(earlier)) => last.abs() * self.reject_deceleration_factor < earlier,
            _ => false,
        }
    }
}

impl Default for FlingClassifier {
    fn default() -> Self {
        Self::from_config(&ScrollConfig::default())
    }
}
