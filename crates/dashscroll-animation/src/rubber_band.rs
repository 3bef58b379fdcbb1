//! Drag resistance past the content edges.

use crate::boundary::overshoot;

/// Rubber-band resistance applied to pointer deltas while content is dragged
/// out of range.
///
/// The resistance factor is `1 - resistance * min(1, |overshoot| / max_overshoot)`,
/// so motion still tracks the finger but compresses the further it goes. The
/// overshoot never passes `max_overshoot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    /// Damping strength in `(0, 1)`.
    pub resistance: f32,
    /// Largest distance content may be dragged past a bound.
    pub max_overshoot: f32,
}

impl Default for RubberBand {
    fn default() -> Self {
        Self {
            resistance: Self::DEFAULT_RESISTANCE,
            max_overshoot: Self::DEFAULT_MAX_OVERSHOOT,
        }
    }
}

impl RubberBand {
    pub const DEFAULT_RESISTANCE: f32 = 0.4;
    pub const DEFAULT_MAX_OVERSHOOT: f32 = 200.0;

    pub fn new(resistance: f32, max_overshoot: f32) -> Self {
        Self {
            resistance,
            max_overshoot,
        }
    }

    /// Multiplier for a pointer delta that would leave content `overshoot`
    /// units out of range.
    pub fn factor(&self, overshoot: f32) -> f32 {
        if overshoot == 0.0 || self.max_overshoot <= 0.0 {
            return 1.0;
        }
        let stretch = (overshoot.abs() / self.max_overshoot).min(1.0);
        1.0 - self.resistance * stretch
    }

    /// Resisted delta to add to `offset` for a raw pointer delta.
    ///
    /// `min_offset..=max_offset` is the resting range. Deltas that keep the
    /// candidate offset in range pass through untouched.
    pub fn resist(&self, offset: f32, raw_delta: f32, min_offset: f32, max_offset: f32) -> f32 {
        let candidate = offset + raw_delta;
        let over = overshoot(candidate, min_offset, max_offset);
        if over == 0.0 {
            return raw_delta;
        }

        let mut next = offset + raw_delta * self.factor(over);

        // Outward motion stops at the ceiling; content already past it (set
        // programmatically) is never pulled further out nor snapped in here.
        let upper = (max_offset + self.max_overshoot).max(offset);
        let lower = (min_offset - self.max_overshoot).min(offset);
        next = next.clamp(lower, upper);

        next - offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_delta_passes_through() {
        let band = RubberBand::default();
        assert_eq!(band.resist(-100.0, 30.0, -500.0, 0.0), 30.0);
        assert_eq!(band.resist(-100.0, -30.0, -500.0, 0.0), -30.0);
    }

    #[test]
    fn factor_compresses_with_distance() {
        let band = RubberBand::default();
        assert_eq!(band.factor(0.0), 1.0);
        assert!((band.factor(100.0) - 0.8).abs() < 1e-6);
        assert!((band.factor(-200.0) - 0.6).abs() < 1e-6);
        assert!((band.factor(1_000.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn overshoot_never_exceeds_ceiling() {
        let band = RubberBand::default();
        let mut offset = 0.0;
        for _ in 0..10_000 {
            offset += band.resist(offset, 25.0, -500.0, 0.0);
        }
        assert!(offset <= band.max_overshoot + 1e-3, "offset {offset}");
        assert!(offset > band.max_overshoot - 1.0);
    }

    #[test]
    fn lower_edge_is_symmetric() {
        let band = RubberBand::default();
        let mut offset = -500.0;
        for _ in 0..10_000 {
            offset += band.resist(offset, -25.0, -500.0, 0.0);
        }
        assert!(offset >= -500.0 - band.max_overshoot - 1e-3);
    }

    #[test]
    fn content_past_ceiling_is_not_snapped() {
        let band = RubberBand::default();
        let delta = band.resist(400.0, -10.0, -500.0, 0.0);
        assert!(delta < 0.0 && delta > -10.0);
        assert_eq!(band.resist(400.0, 10.0, -500.0, 0.0), 0.0);
    }
}
