//! Bounded history of per-sample drag velocities.
//!
//! Only used to smooth the release velocity of a drag, so it stores plain
//! px/s values rather than timestamped positions.

use crate::gesture_constants::VELOCITY_HISTORY_CAPACITY;

/// Fixed-capacity ring buffer of recent velocities.
///
/// Storage is an inline array; pushing never allocates. `limit` caps how many
/// of the slots are in use so different devices can keep different depths
/// with one type.
#[derive(Clone, Debug)]
pub struct VelocityHistory {
    samples: [f32; VELOCITY_HISTORY_CAPACITY],
    /// Slot holding the oldest sample.
    head: usize,
    len: usize,
    limit: usize,
}

impl Default for VelocityHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityHistory {
    /// History using every slot.
    pub fn new() -> Self {
        Self::with_limit(VELOCITY_HISTORY_CAPACITY)
    }

    /// History keeping at most `limit` samples. `limit` is clamped to
    /// `1..=VELOCITY_HISTORY_CAPACITY`.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            samples: [0.0; VELOCITY_HISTORY_CAPACITY],
            head: 0,
            len: 0,
            limit: limit.clamp(1, VELOCITY_HISTORY_CAPACITY),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(&mut self, velocity: f32) {
        if self.len < self.limit {
            let slot = (self.head + self.len) % self.limit;
            self.samples[slot] = velocity;
            self.len += 1;
        } else {
            self.samples[self.head] = velocity;
            self.head = (self.head + 1) % self.limit;
        }
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len).map(move |i| self.samples[(self.head + i) % self.limit])
    }

    /// Most recent sample.
    pub fn newest(&self) -> Option<f32> {
        if self.len == 0 {
            return None;
        }
        Some(self.samples[(self.head + self.len - 1) % self.limit])
    }

    /// Mean of the newest `count` samples, or of all of them when fewer are
    /// stored. `None` when empty.
    pub fn recent_mean(&self, count: usize) -> Option<f32> {
        let take = count.min(self.len);
        if take == 0 {
            return None;
        }
        let sum: f32 = self.iter().skip(self.len - take).sum();
        Some(sum / take as f32)
    }

    /// Mean speed (absolute velocity) of the older half of the history.
    /// `None` with fewer than two samples.
    pub fn first_half_mean_abs(&self) -> Option<f32> {
        let half = self.len / 2;
        if half == 0 {
            return None;
        }
        let sum: f32 = self.iter().take(half).map(f32::abs).sum();
        Some(sum / half as f32)
    }
}
