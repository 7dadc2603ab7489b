use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use subsim::SchedulerConfig;

use crate::common::{assert_pose_finite, lone_submarine_world, TestSimBuilder};

const STEP_US: i64 = 33_333;

#[test]
fn test_tenth_of_a_second_runs_three_steps() {
    let mut app = TestSimBuilder::new().build();

    let steps = app.run_frame(100_000);

    assert_eq!(steps, 3);
    assert_eq!(app.accumulator_us(), 1);
}

#[test]
fn test_two_second_stall_is_capped() {
    let mut app = TestSimBuilder::new().build();

    let steps = app.run_frame(2_000_000);

    assert_eq!(steps, 30);
    // The excess second is dropped, not queued for later.
    assert_eq!(app.accumulator_us(), 0);
    assert_eq!(app.run_frame(0), 0);
}

#[test]
fn test_step_count_matches_elapsed_time() {
    for elapsed_us in [0, 1, 33_332, 33_333, 250_000, 999_990] {
        let mut app = TestSimBuilder::new().build();
        let steps = app.run_frame(elapsed_us) as i64;
        assert_eq!(steps, elapsed_us / STEP_US, "elapsed {}us", elapsed_us);
        assert_eq!(app.accumulator_us(), elapsed_us % STEP_US);
    }
}

#[test]
fn test_custom_cap() {
    let mut app = TestSimBuilder::new()
        .with_scheduler(SchedulerConfig {
            step_rate_hz: 100.0,
            max_catchup_steps: 5,
        })
        .build();

    assert_eq!(app.run_frame(1_000_000), 5);
    assert_eq!(app.run_frame(25_000), 2);
    assert_eq!(app.accumulator_us(), 5_000);
}

#[test]
fn test_submarine_moves_by_whole_steps() {
    let mut app = TestSimBuilder::new()
        .with_world(lone_submarine_world())
        .build();
    assert!(app.sim.set_forward_speed(2.0));
    let dt = STEP_US as f64 / 1e6;

    let mut previous_x = app.sub_pose().position.x;
    for frame_us in [10_000, 50_000, 7_000, 120_000, 33_333, 0, 66_667] {
        let steps = app.run_frame(frame_us);
        let pose = app.sub_pose();
        assert_pose_finite(&pose);
        // Displacement only ever comes in multiples of the fixed step.
        assert_relative_eq!(
            pose.position.x - previous_x,
            2.0 * dt * steps as f64,
            epsilon = 1e-9
        );
        previous_x = pose.position.x;
    }
}

#[test]
fn test_backward_clock_does_not_stall() {
    let mut app = TestSimBuilder::new().build();
    app.run_frame(20_000);

    // Clock jumps back half a second.
    assert_eq!(app.run_frame(-500_000), 0);
    assert!(app.accumulator_us() >= 0);

    // Stepping resumes as soon as time moves forward again.
    assert_eq!(app.run_frame(STEP_US), 1);
}

#[test]
fn test_stats_track_steps() {
    let mut app = TestSimBuilder::new().build();
    // One frame to open the stats window, then a second's worth.
    let steps = app.run_frames(61, 16_667);
    assert_eq!(steps, 30);
    assert_eq!(app.sim.stats().total_steps(), steps as u64);
    assert_eq!(app.sim.stats().total_frames(), 61);
    assert_eq!(app.sim.stats().frames_per_second(), 60);
    assert_eq!(app.sim.stats().steps_per_second(), 30);
}
