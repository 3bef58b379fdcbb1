//! Behavioral guarantees of the scroll gesture engine, driven through the
//! gesture robot the way a touch screen would drive it.

use dashscroll_testing::gesture_assertions::{assert_monotonic_toward, max_overshoot};
use dashscroll_testing::GestureRobot;
use dashscroll_ui::{
    BoundaryCorrection, FrameSnapshot, FrictionDecay, PointerEvent, ScrollConfig,
    ScrollGestureEngine, ScrollState,
};

fn list() -> GestureRobot {
    GestureRobot::vertical(300.0, 1000.0)
}

#[test]
fn test_small_movements_are_taps() {
    let jitters: [&[f32]; 4] = [
        &[],
        &[4.0, -9.0, 8.0],
        &[9.9],
        &[-3.0, -3.0, -3.0, 5.0, 3.0],
    ];

    for jitter in jitters {
        let mut robot = list();
        robot.set_offset(-250.0);
        robot.press(robot.point_on_axis(150.0));
        for &delta in jitter {
            robot.move_by(delta);
            assert_eq!(robot.state(), ScrollState::Pressed);
        }
        assert!(robot.engine().is_interaction_safe());
        robot.release();

        assert_eq!(robot.offset(), -250.0, "jitter {jitter:?}");
        assert_eq!(robot.state(), ScrollState::Idle);
    }
}

#[test]
fn test_drag_start_skips_travel_below_threshold() {
    let mut robot = list();
    robot.set_offset(-300.0);

    robot.press(robot.point_on_axis(100.0));
    robot.move_to(robot.point_on_axis(109.0));
    assert_eq!(robot.state(), ScrollState::Pressed);
    assert_eq!(robot.offset(), -300.0);

    // The crossing sample moves by its own step, 109 -> 125.
    robot.move_to(robot.point_on_axis(125.0));
    assert_eq!(robot.state(), ScrollState::Dragging);
    assert_eq!(robot.offset(), -284.0);

    robot.move_to(robot.point_on_axis(135.0));
    assert_eq!(robot.offset(), -274.0);
}

#[test]
fn test_steady_release_flings_at_release_speed() {
    let mut robot = list().with_frame_time(0.01);
    robot.set_offset(-300.0);

    robot.press(robot.point_on_axis(100.0));
    robot.move_by(12.0);
    for _ in 0..5 {
        robot.move_by(5.0);
    }
    robot.release();

    assert_eq!(robot.state(), ScrollState::Inertia);
    // The release frame already ran one decay step.
    let expected = FrictionDecay::default().step(500.0, 0.01);
    assert!(
        (robot.velocity() - expected).abs() < 1.0,
        "velocity {} expected {expected}",
        robot.velocity()
    );
}

#[test]
fn test_slow_release_does_not_fling() {
    let mut robot = list().with_frame_time(0.01);
    robot.set_offset(-300.0);

    robot.press(robot.point_on_axis(100.0));
    robot.move_by(12.0);
    for _ in 0..5 {
        // 50 px/s
        robot.move_by(0.5);
    }
    robot.release();

    assert_eq!(robot.state(), ScrollState::Idle);
    assert_eq!(robot.velocity(), 0.0);
}

#[test]
fn test_sharp_stop_before_release_rejects_fling() {
    let mut robot = list().with_frame_time(0.01);
    robot.set_offset(-300.0);

    robot.press(robot.point_on_axis(100.0));
    robot.move_to(robot.point_on_axis(108.0));
    // Samples of 800, 750, 700, 50 and 10 px/s.
    for y in [116.0, 123.5, 130.5, 131.0, 131.1] {
        robot.move_to(robot.point_on_axis(y));
    }
    robot.release();

    assert_eq!(robot.state(), ScrollState::Idle);
    assert_eq!(robot.velocity(), 0.0);
}

#[test]
fn test_abrupt_stop_after_long_drag_rejects_fling() {
    let mut robot = list().with_frame_time(0.01);
    robot.set_offset(-300.0);

    robot.press(robot.point_on_axis(100.0));
    // Six samples of 800 px/s past the threshold, then 50 and 0.
    for _ in 0..7 {
        robot.move_by(8.0);
    }
    robot.move_by(0.5);
    robot.move_by(0.0);
    robot.release();

    assert_eq!(robot.state(), ScrollState::Idle);
    assert_eq!(robot.velocity(), 0.0);
}

#[test]
fn test_resting_finger_before_release_rejects_fling() {
    for rest_frames in [1, 2] {
        let mut robot = list();
        robot.set_offset(-300.0);

        robot.drag_by(-150.0, 6);
        assert_eq!(robot.state(), ScrollState::Dragging);
        let held_at = robot.hold(rest_frames);
        robot.release();

        assert_eq!(robot.state(), ScrollState::Idle, "rested {rest_frames} frames");
        assert_eq!(robot.offset(), held_at);
    }
}

#[test]
fn test_repeated_timestamp_moves_without_velocity_spike() {
    let mut robot = list();
    robot.set_offset(-300.0);

    robot.press(robot.point_on_axis(100.0));
    robot.move_to(robot.point_on_axis(110.0));
    robot.move_to(robot.point_on_axis(115.0));
    assert_eq!(robot.offset(), -285.0);

    // Two samples in one frame sharing a timestamp.
    let t = robot.clock() + 1.0 / 60.0;
    robot.submit(FrameSnapshot::new(1.0 / 60.0).with_events([
        PointerEvent::held(robot.point_on_axis(120.0), t),
        PointerEvent::held(robot.point_on_axis(125.0), t),
    ]));

    assert_eq!(robot.offset(), -275.0);
    assert!((robot.velocity() - 300.0).abs() < 1.0, "velocity {}", robot.velocity());
}

#[test]
fn test_rubber_band_overshoot_is_bounded() {
    let mut robot = list();
    let max_overshoot_allowed = robot.engine().config().rubber_band.max_overshoot;

    robot.press(robot.point_on_axis(50.0));
    robot.move_by(12.0);
    for _ in 0..2_000 {
        robot.move_by(25.0);
    }

    let (min, max) = robot.offset_range();
    let worst = max_overshoot(robot.frame_offsets(), min, max);
    assert!(worst <= max_overshoot_allowed + 1e-3, "overshoot {worst}");
    assert!(robot.offset() > max_overshoot_allowed - 1.0);
    assert_eq!(robot.state(), ScrollState::Dragging);
}

#[test]
fn test_rubber_band_is_bounded_at_content_end() {
    let mut robot = list();
    robot.set_offset(-700.0);

    robot.press(robot.point_on_axis(250.0));
    robot.move_by(-12.0);
    for _ in 0..2_000 {
        robot.move_by(-25.0);
    }

    let limit = -700.0 - robot.engine().config().rubber_band.max_overshoot;
    assert!(robot.offset() >= limit - 1e-3, "offset {}", robot.offset());
    assert!(robot.offset() < -700.0);
}

#[test]
fn test_overshoot_converges_to_bound() {
    for (start, bound) in [(50.0, 0.0), (-750.0, -700.0)] {
        let mut robot = list();
        robot.set_offset(start);

        let frames = robot.run_until_idle(60);
        assert!(frames.is_some(), "{start} did not settle");

        assert_eq!(robot.offset(), bound);
        assert_eq!(robot.velocity(), 0.0);
        assert_eq!(robot.state(), ScrollState::Idle);
        assert_monotonic_toward(robot.frame_offsets(), bound);
    }
}

#[test]
fn test_exponential_policy_converges() {
    let config = ScrollConfig::default().with_boundary(BoundaryCorrection::exponential());
    let engine = ScrollGestureEngine::try_new(config).expect("valid config");
    let mut robot = GestureRobot::new(engine, list().viewport(), 1000.0);
    robot.set_offset(50.0);

    assert!(robot.run_until_idle(60).is_some());
    assert_eq!(robot.offset(), 0.0);
    assert_monotonic_toward(robot.frame_offsets(), 0.0);
}

#[test]
fn test_long_frames_never_cross_the_bound() {
    let mut robot = list().with_frame_time(0.5);
    robot.set_offset(150.0);

    assert!(robot.run_until_idle(10).is_some());
    assert_eq!(robot.offset(), 0.0);
    assert_monotonic_toward(robot.frame_offsets(), 0.0);
}

#[test]
fn test_disable_twice_matches_disable_once() {
    let mut once = list();
    let mut twice = list();
    for robot in [&mut once, &mut twice] {
        robot.set_offset(-300.0);
        robot.drag_by(-80.0, 4);
        assert_eq!(robot.state(), ScrollState::Dragging);
    }
    let offset = once.offset();

    once.engine_mut().set_enabled(false);
    twice.engine_mut().set_enabled(false);
    twice.engine_mut().set_enabled(false);

    for robot in [&once, &twice] {
        assert_eq!(robot.state(), ScrollState::Idle);
        assert_eq!(robot.velocity(), 0.0);
        assert_eq!(robot.offset(), offset);
    }
}

#[test]
fn test_disabled_engine_ignores_gestures() {
    let mut robot = list();
    robot.set_offset(-300.0);
    robot.engine_mut().set_enabled(false);

    robot.fling_by(-200.0, 5);
    robot.scroll_wheel(3.0);
    robot.idle_frames(10);
    assert_eq!(robot.offset(), -300.0);
    assert_eq!(robot.state(), ScrollState::Idle);

    robot.engine_mut().set_enabled(true);
    robot.drag_by(-60.0, 3);
    assert_eq!(robot.state(), ScrollState::Dragging);
}

#[test]
fn test_set_offset_reads_back_exactly() {
    let mut robot = list();
    for value in [0.0, -0.1, -699.99, 12.5, -1234.5678] {
        robot.set_offset(value);
        assert_eq!(robot.state(), ScrollState::Idle);
        assert_eq!(robot.offset(), value);
    }
}
