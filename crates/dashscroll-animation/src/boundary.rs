//! Bounce-back of content that rests outside its valid range.

/// Remaining overshoot below which correction snaps to the bound.
pub const SETTLE_DISTANCE: f32 = 2.0;

/// Remaining speed (px/s) below which correction snaps to the bound.
pub const SETTLE_VELOCITY: f32 = 30.0;

/// Signed distance of `offset` past the nearer bound of
/// `min_offset..=max_offset`; zero inside the range.
pub fn overshoot(offset: f32, min_offset: f32, max_offset: f32) -> f32 {
    if offset > max_offset {
        offset - max_offset
    } else if offset < min_offset {
        offset - min_offset
    } else {
        0.0
    }
}

/// Bound an out-of-range `offset` returns to, or `None` when in range.
pub fn violated_bound(offset: f32, min_offset: f32, max_offset: f32) -> Option<f32> {
    if offset > max_offset {
        Some(max_offset)
    } else if offset < min_offset {
        Some(min_offset)
    } else {
        None
    }
}

/// How out-of-range content is pulled back once no finger holds it.
///
/// Both policies only ever shrink the overshoot; the pull per step is clamped
/// so a long frame lands on the bound instead of crossing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCorrection {
    /// Pull proportional to the overshoot, with a fixed velocity damping per
    /// frame.
    Spring {
        return_strength: f32,
        velocity_damping: f32,
    },
    /// Exponential easing toward the bound; leftover velocity is damped by the
    /// same fraction the distance shrank.
    Exponential { return_rate: f32 },
}

impl Default for BoundaryCorrection {
    fn default() -> Self {
        Self::spring()
    }
}

/// Result of one correction step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub offset: f32,
    pub velocity: f32,
    /// Content reached the bound; `offset` is pinned to it and velocity is zero.
    pub settled: bool,
}

impl BoundaryCorrection {
    pub const DEFAULT_RETURN_STRENGTH: f32 = 12.0;
    pub const DEFAULT_VELOCITY_DAMPING: f32 = 0.85;
    pub const DEFAULT_RETURN_RATE: f32 = 10.0;

    pub fn spring() -> Self {
        Self::Spring {
            return_strength: Self::DEFAULT_RETURN_STRENGTH,
            velocity_damping: Self::DEFAULT_VELOCITY_DAMPING,
        }
    }

    pub fn exponential() -> Self {
        Self::Exponential {
            return_rate: Self::DEFAULT_RETURN_RATE,
        }
    }

    /// Fraction of the remaining overshoot removed in a step of `dt` seconds.
    pub fn pull_fraction(&self, dt: f32) -> f32 {
        let fraction = match *self {
            Self::Spring {
                return_strength, ..
            } => return_strength * dt,
            Self::Exponential { return_rate } => 1.0 - (-return_rate * dt).exp(),
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Move `offset` toward `bound` for one frame.
    pub fn step(&self, offset: f32, velocity: f32, bound: f32, dt: f32) -> Correction {
        let fraction = self.pull_fraction(dt);
        let next = offset + (bound - offset) * fraction;
        let damped = match *self {
            Self::Spring {
                velocity_damping, ..
            } => velocity * velocity_damping,
            Self::Exponential { .. } => velocity * (1.0 - fraction),
        };

        if (next - bound).abs() < SETTLE_DISTANCE && damped.abs() < SETTLE_VELOCITY {
            return Correction {
                offset: bound,
                velocity: 0.0,
                settled: true,
            };
        }

        Correction {
            offset: next,
            velocity: damped,
            settled: false,
        }
    }
}

#[cfg(test)]
#[path = "tests/boundary_tests.rs"]
mod tests;
