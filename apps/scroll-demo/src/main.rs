mod script;

use dashscroll_foundation::FrameTimer;
use dashscroll_ui::{FrameSnapshot, Orientation, Rect, ScrollGestureEngine};
use script::{scenarios, Step};
use std::time::Duration;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1080.0, 600.0);
const CONTENT_EXTENT: f32 = 4000.0;
const FRAME_BUDGET: Duration = Duration::from_millis(16);
const LOG_EVERY: usize = 10;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== dashscroll demo ===");
    println!("Replays scripted touch gestures against one scroll engine.");
    println!("Run with RUST_LOG=debug to see state transitions.");
    println!();

    for scenario in scenarios() {
        let mut engine = ScrollGestureEngine::new(Orientation::Vertical);
        engine.set_offset(scenario.start_offset);
        log::info!("scenario '{}' from offset {}", scenario.name, engine.offset());

        let frames = run(&mut engine, &scenario.steps);
        log::info!(
            "scenario '{}' finished after {frames} frames: offset={:.1} state={:?}",
            scenario.name,
            engine.offset(),
            engine.state()
        );
    }
}

/// Play `steps` in real time, one frame per 16ms, the way a render loop would.
fn run(engine: &mut ScrollGestureEngine, steps: &[Step]) -> usize {
    let mut timer = FrameTimer::new();
    let mut pointer = VIEWPORT.center();
    let mut input = FrameSnapshot::new(0.0);
    let mut frames = 0;

    for step in steps {
        for _ in 0..step.frames() {
            input.clear();
            input.set_frame_time(timer.tick());
            step.apply(engine, &mut input, &mut pointer, timer.timestamp());

            let offset = engine.update(&input, VIEWPORT, CONTENT_EXTENT);
            frames += 1;
            if frames % LOG_EVERY == 0 {
                log::info!(
                    "frame {frames}: offset={offset:.1} velocity={:.1} safe={}",
                    engine.velocity(),
                    engine.is_interaction_safe()
                );
            }
            std::thread::sleep(FRAME_BUDGET);
        }
    }
    frames
}
