//! Scripted gestures replayed by the demo.

use dashscroll_ui::{FrameSnapshot, Point, PointerEvent, ScrollGestureEngine};

pub struct Scenario {
    pub name: &'static str,
    pub start_offset: f32,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Finger down at `y`, centered horizontally.
    Press { y: f32 },
    /// Move the finger by `delta` spread evenly over `frames` frames.
    Move { delta: f32, frames: usize },
    Release,
    Wheel { notches: f32 },
    Idle { frames: usize },
    SetEnabled(bool),
}

impl Step {
    pub fn frames(&self) -> usize {
        match *self {
            Step::Move { frames, .. } | Step::Idle { frames } => frames.max(1),
            _ => 1,
        }
    }

    /// Fill one frame of input for this step.
    pub fn apply(
        &self,
        engine: &mut ScrollGestureEngine,
        input: &mut FrameSnapshot,
        pointer: &mut Point,
        timestamp: f64,
    ) {
        match *self {
            Step::Press { y } => {
                pointer.y = y;
                input.push_event(PointerEvent::pressed(*pointer, timestamp));
            }
            Step::Move { delta, frames } => {
                pointer.y += delta / frames.max(1) as f32;
                input.push_event(PointerEvent::held(*pointer, timestamp));
            }
            Step::Release => input.push_event(PointerEvent::released(*pointer, timestamp)),
            Step::Wheel { notches } => input.set_wheel_delta(notches),
            Step::Idle { .. } => {}
            Step::SetEnabled(enabled) => {
                log::info!("set_enabled({enabled})");
                engine.set_enabled(enabled);
            }
        }
    }
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "fling",
            start_offset: -400.0,
            steps: vec![
                Step::Press { y: 400.0 },
                Step::Move { delta: -240.0, frames: 8 },
                Step::Release,
                Step::Idle { frames: 90 },
            ],
        },
        Scenario {
            name: "catch",
            start_offset: -400.0,
            steps: vec![
                Step::Press { y: 400.0 },
                Step::Move { delta: -300.0, frames: 6 },
                Step::Release,
                Step::Idle { frames: 10 },
                Step::Press { y: 300.0 },
                Step::Idle { frames: 20 },
                Step::Release,
                Step::Idle { frames: 10 },
            ],
        },
        Scenario {
            name: "rubber band",
            start_offset: 0.0,
            steps: vec![
                Step::Press { y: 100.0 },
                Step::Move { delta: 400.0, frames: 30 },
                Step::Idle { frames: 10 },
                Step::Release,
                Step::Idle { frames: 60 },
            ],
        },
        Scenario {
            name: "stop before release",
            start_offset: -1000.0,
            steps: vec![
                Step::Press { y: 400.0 },
                Step::Move { delta: -200.0, frames: 12 },
                Step::Move { delta: 0.0, frames: 10 },
                Step::Release,
                Step::Idle { frames: 20 },
            ],
        },
        Scenario {
            name: "wheel",
            start_offset: -200.0,
            steps: vec![
                Step::Wheel { notches: -1.0 },
                Step::Idle { frames: 5 },
                Step::Wheel { notches: 0.25 },
                Step::Idle { frames: 5 },
                Step::Wheel { notches: 4.0 },
                Step::Idle { frames: 60 },
            ],
        },
        Scenario {
            name: "disabled",
            start_offset: -500.0,
            steps: vec![
                Step::SetEnabled(false),
                Step::Press { y: 300.0 },
                Step::Move { delta: -200.0, frames: 10 },
                Step::Release,
                Step::SetEnabled(true),
                Step::Idle { frames: 5 },
            ],
        },
    ]
}
