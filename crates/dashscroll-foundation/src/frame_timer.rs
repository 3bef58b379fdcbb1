//! Monotonic frame timing for hosts driving scroll engines.

use web_time::Instant;

/// Measures the time between frames and stamps pointer events.
///
/// Both values come from the same monotonic origin, so event timestamps and
/// frame deltas are directly comparable.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    origin: Instant,
    last_frame: Option<Instant>,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last_frame: None,
        }
    }

    /// Seconds since the previous call. The first call returns 0.0, which
    /// engines replace with a nominal frame.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        dt
    }

    /// Seconds since the timer was created, for stamping pointer events.
    pub fn timestamp(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
