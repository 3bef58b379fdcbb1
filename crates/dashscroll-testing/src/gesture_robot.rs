//! Robot-style driver for scroll gesture engines.
//!
//! A [`GestureRobot`] owns one engine plus the viewport and content it scrolls,
//! and runs it frame by frame with a simulated clock. Every interaction is one
//! frame carrying at most one pointer event, so pointer samples arrive at the
//! frame rate the way a touch screen delivers them.
//!
//! # Example
//!
//! ```
//! use dashscroll_testing::GestureRobot;
//! use dashscroll_ui::ScrollState;
//!
//! let mut robot = GestureRobot::vertical(300.0, 1000.0);
//! robot.set_offset(-200.0);
//!
//! // Quick upward flick.
//! robot.fling_by(-120.0, 6);
//! assert_eq!(robot.state(), ScrollState::Inertia);
//!
//! robot.run_until_idle(600).expect("fling settles");
//! assert!(robot.offset() < -400.0);
//! ```

use dashscroll_foundation::{FrameInput, FrameSnapshot, Orientation, PointerEvent, PointerPhase};
use dashscroll_graphics::{Point, Rect};
use dashscroll_ui::{ScrollGestureEngine, ScrollState};

/// Frame duration of a 60 Hz display.
pub const DEFAULT_FRAME_TIME: f32 = 1.0 / 60.0;

/// Width (or height, for horizontal engines) of the viewport built by the
/// shorthand constructors.
pub const CROSS_AXIS_EXTENT: f32 = 400.0;

pub struct GestureRobot {
    engine: ScrollGestureEngine,
    viewport: Rect,
    content_extent: f32,
    frame_time: f32,
    clock: f64,
    pointer: Option<Point>,
    offsets: Vec<f32>,
}

impl GestureRobot {
    /// Drive `engine` over a viewport of `viewport` showing `content_extent`
    /// pixels of content along the engine's axis.
    pub fn new(engine: ScrollGestureEngine, viewport: Rect, content_extent: f32) -> Self {
        Self {
            engine,
            viewport,
            content_extent,
            frame_time: DEFAULT_FRAME_TIME,
            clock: 0.0,
            pointer: None,
            offsets: Vec::new(),
        }
    }

    /// Vertical list with default tuning.
    pub fn vertical(viewport_height: f32, content_extent: f32) -> Self {
        Self::new(
            ScrollGestureEngine::new(Orientation::Vertical),
            Rect::new(0.0, 0.0, CROSS_AXIS_EXTENT, viewport_height),
            content_extent,
        )
    }

    /// Horizontal carousel with default tuning.
    pub fn horizontal(viewport_width: f32, content_extent: f32) -> Self {
        Self::new(
            ScrollGestureEngine::new(Orientation::Horizontal),
            Rect::new(0.0, 0.0, viewport_width, CROSS_AXIS_EXTENT),
            content_extent,
        )
    }

    /// Use a different frame duration for the frames that follow.
    ///
    /// Zero, negative or non-finite values are passed to the engine as is.
    pub fn with_frame_time(mut self, seconds: f32) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn engine(&self) -> &ScrollGestureEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ScrollGestureEngine {
        &mut self.engine
    }

    pub fn offset(&self) -> f32 {
        self.engine.offset()
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.engine.set_offset(offset);
    }

    pub fn state(&self) -> ScrollState {
        self.engine.state()
    }

    pub fn velocity(&self) -> f32 {
        self.engine.velocity()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Content grew or shrank, e.g. a list received more rows.
    pub fn set_content_extent(&mut self, content_extent: f32) {
        self.content_extent = content_extent;
    }

    /// Resting offset range `(min, max)` for the current viewport and content.
    pub fn offset_range(&self) -> (f32, f32) {
        let extent = self.orientation().extent(self.viewport);
        ((extent - self.content_extent).min(0.0), 0.0)
    }

    /// Simulated time in seconds since the robot started.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Offsets returned by every frame run so far.
    pub fn frame_offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn clear_trace(&mut self) {
        self.offsets.clear();
    }

    /// Point in the middle of the cross axis at `coordinate` along the
    /// scroll axis.
    pub fn point_on_axis(&self, coordinate: f32) -> Point {
        let center = self.viewport.center();
        match self.orientation() {
            Orientation::Vertical => Point::new(center.x, coordinate),
            Orientation::Horizontal => Point::new(coordinate, center.y),
        }
    }

    pub fn press(&mut self, at: Point) -> f32 {
        self.pointer = Some(at);
        self.pointer_frame(PointerPhase::Pressed, at)
    }

    /// Move a held pointer. Without a pointer down the frame still runs, the
    /// event is just a stray `Held` sample.
    pub fn move_to(&mut self, at: Point) -> f32 {
        self.pointer = Some(at);
        self.pointer_frame(PointerPhase::Held, at)
    }

    /// Move the pointer by `delta` along the scroll axis.
    pub fn move_by(&mut self, delta: f32) -> f32 {
        let from = self.pointer_position();
        let at = self.offset_point(from, delta);
        self.move_to(at)
    }

    /// Keep the pointer down without moving it for `frames` frames.
    pub fn hold(&mut self, frames: usize) -> f32 {
        let at = self.pointer_position();
        for _ in 0..frames {
            self.move_to(at);
        }
        self.offset()
    }

    pub fn release(&mut self) -> f32 {
        let at = self.pointer_position();
        self.pointer = None;
        self.pointer_frame(PointerPhase::Released, at)
    }

    pub fn cancel(&mut self) -> f32 {
        let at = self.pointer_position();
        self.pointer = None;
        self.pointer_frame(PointerPhase::Cancelled, at)
    }

    /// Press at `from` and move to `to` in `steps` equal frames. The pointer
    /// stays down.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) -> f32 {
        self.press(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let at = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.move_to(at);
        }
        self.offset()
    }

    /// Drag by `distance` along the scroll axis starting from the viewport
    /// center.
    pub fn drag_by(&mut self, distance: f32, steps: usize) -> f32 {
        let from = self.viewport.center();
        let to = self.offset_point(from, distance);
        self.drag(from, to, steps)
    }

    pub fn fling_by(&mut self, distance: f32, steps: usize) -> f32 {
        self.drag_by(distance, steps);
        self.release()
    }

    pub fn scroll_wheel(&mut self, notches: f32) -> f32 {
        let snapshot = FrameSnapshot::new(self.frame_time).with_wheel(notches);
        self.run_frame(snapshot)
    }

    /// One frame without input.
    pub fn idle(&mut self) -> f32 {
        self.run_frame(FrameSnapshot::new(self.frame_time))
    }

    pub fn idle_frames(&mut self, frames: usize) -> f32 {
        for _ in 0..frames {
            self.idle();
        }
        self.offset()
    }

    /// Run empty frames until the engine is idle with its offset in range.
    ///
    /// Returns the number of frames it took, or `None` if it was still moving
    /// after `max_frames`.
    pub fn run_until_idle(&mut self, max_frames: usize) -> Option<usize> {
        for frame in 0..=max_frames {
            if self.is_at_rest() {
                return Some(frame);
            }
            if frame < max_frames {
                self.idle();
            }
        }
        log::debug!(
            "robot gave up after {max_frames} frames: state={:?} offset={}",
            self.state(),
            self.offset()
        );
        None
    }

    /// Idle and either within range or allowed to rest outside it.
    pub fn is_at_rest(&self) -> bool {
        if self.state() != ScrollState::Idle {
            return false;
        }
        let (min, max) = self.offset_range();
        let offset = self.offset();
        !self.engine.config().handle_out_of_bounds || (min..=max).contains(&offset)
    }

    /// Run an arbitrary frame. The clock advances by the snapshot's frame time
    /// when it is positive.
    pub fn submit(&mut self, snapshot: FrameSnapshot) -> f32 {
        self.run_frame(snapshot)
    }

    fn orientation(&self) -> Orientation {
        self.engine.config().orientation
    }

    fn pointer_position(&self) -> Point {
        self.pointer.unwrap_or_else(|| self.viewport.center())
    }

    fn offset_point(&self, from: Point, delta: f32) -> Point {
        match self.orientation() {
            Orientation::Vertical => Point::new(from.x, from.y + delta),
            Orientation::Horizontal => Point::new(from.x + delta, from.y),
        }
    }

    fn pointer_frame(&mut self, phase: PointerPhase, at: Point) -> f32 {
        let timestamp = self.clock + self.clock_step(self.frame_time);
        let event = PointerEvent::new(phase, at, timestamp);
        self.run_frame(FrameSnapshot::new(self.frame_time).with_event(event))
    }

    fn run_frame(&mut self, snapshot: FrameSnapshot) -> f32 {
        self.clock += self.clock_step(snapshot.frame_time());
        let offset = self
            .engine
            .update(&snapshot, self.viewport, self.content_extent);
        self.offsets.push(offset);
        offset
    }

    fn clock_step(&self, frame_time: f32) -> f64 {
        if frame_time > 0.0 && frame_time.is_finite() {
            frame_time as f64
        } else {
            self.engine.config().nominal_frame_time() as f64
        }
    }
}
