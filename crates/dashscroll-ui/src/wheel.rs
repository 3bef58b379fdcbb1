/// Accumulates fractional wheel movement so only whole pixels reach the
/// offset.
///
/// High-resolution wheels and touchpads report fractions of a notch; applying
/// them directly leaves the content at sub-pixel offsets that blur text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelAccumulator {
    pending: f32,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` pixels and return the whole-pixel part ready to apply.
    pub fn feed(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() {
            return 0.0;
        }
        self.pending += delta;
        let whole = self.pending.trunc();
        self.pending -= whole;
        whole
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}
