use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use subsim::interfaces::{
    CompassInterface, DepthSensorInterface, PoseInterface, SonarCommand, SonarInterface,
};
use subsim::SensorReading;

use crate::common::{harbour_world, nautilus_world, RecordingInterface, TestSimBuilder};

#[test]
fn test_no_publish_without_steps() {
    let recorder = RecordingInterface::new();
    let mut app = TestSimBuilder::new()
        .with_interface(recorder.clone())
        .build();

    app.run_frames(5, 0);
    app.run_frame(20_000);

    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_one_publish_per_update_at_most() {
    let recorder = RecordingInterface::new();
    let mut app = TestSimBuilder::new()
        .with_interface(recorder.clone())
        .build();

    // A full catch-up burst of 30 steps.
    assert_eq!(app.run_frame(2_000_000), 30);

    assert_eq!(recorder.count(), 1);
    assert_relative_eq!(recorder.times()[0], 30.0 * 0.033333, epsilon = 1e-9);
}

#[test]
fn test_publish_cadence_slower_than_steps() {
    let recorder = RecordingInterface::new();
    let mut app = TestSimBuilder::new()
        .with_publish_rate(10.0)
        .with_interface(recorder.clone())
        .build();

    // Three simulated seconds, one step per update.
    app.run_frames(90, 33_333);

    let times = recorder.times();
    assert!(times.len() >= 20, "only {} publishes", times.len());
    for pair in times.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= 0.1 - 1e-9, "published {}s apart", gap);
        assert!(gap < 0.1 + 0.033333 + 1e-9, "starved for {}s", gap);
    }
}

#[test]
fn test_publish_every_step_at_step_rate() {
    let recorder = RecordingInterface::new();
    let mut app = TestSimBuilder::new()
        .with_interface(recorder.clone())
        .build();

    app.run_frames(30, 33_333);

    assert_eq!(recorder.count(), 30);
}

#[test]
fn test_sensor_publishers() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut app = TestSimBuilder::new()
        .with_world(harbour_world())
        .with_interface(CompassInterface::new(tx.clone()))
        .with_interface(DepthSensorInterface::new(tx.clone()))
        .with_interface(PoseInterface::new(["Sub", "CircularPool1"], tx))
        .build();
    app.sim.set_depth_speed(-0.3);

    app.run_frame(33_333);

    let readings: Vec<SensorReading> = rx.try_iter().collect();
    assert_eq!(readings.len(), 4);
    for reading in &readings {
        assert_relative_eq!(reading.time(), 0.033333, epsilon = 1e-12);
    }
    match &readings[0] {
        SensorReading::Compass { heading, .. } => {
            // Yaw of 90 degrees reads as a heading of 270.
            assert_relative_eq!(heading.to_degrees(), 270.0, epsilon = 1e-9)
        }
        other => panic!("expected compass reading, got {:?}", other),
    }
    match &readings[1] {
        SensorReading::Depth { depth, .. } => {
            assert_relative_eq!(*depth, -2.0 - 0.3 * 0.033333, epsilon = 1e-9)
        }
        other => panic!("expected depth reading, got {:?}", other),
    }
}

#[test]
fn test_sensors_follow_named_submarine() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut app = TestSimBuilder::new()
        .with_world(nautilus_world())
        .with_interface(CompassInterface::new(tx.clone()))
        .with_interface(DepthSensorInterface::new(tx))
        .build();
    assert_eq!(app.sim.submarine().map(|e| e.name()), Some("Nautilus"));

    app.run_frame(33_333);

    let readings: Vec<SensorReading> = rx.try_iter().collect();
    assert_eq!(readings.len(), 2);
    match &readings[0] {
        SensorReading::Compass { heading, .. } => {
            assert_relative_eq!(heading.to_degrees(), 180.0, epsilon = 1e-9)
        }
        other => panic!("expected compass reading, got {:?}", other),
    }
    match &readings[1] {
        SensorReading::Depth { depth, .. } => assert_relative_eq!(*depth, -3.0),
        other => panic!("expected depth reading, got {:?}", other),
    }
}

#[test]
fn test_interfaces_released_on_deinit() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut app = TestSimBuilder::new()
        .with_interface(DepthSensorInterface::new(tx))
        .build();
    app.run_frame(33_333);
    app.sim.deinit();

    // All senders are gone once the interfaces are dropped.
    let drained: Vec<SensorReading> = rx.iter().collect();
    assert_eq!(drained.len(), 1);
}

#[test]
fn test_sonar_scan_completes_in_sim_time() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let sonar = SonarInterface::new(tx);
    let commands = sonar.command_sender();
    let mut app = TestSimBuilder::new().with_interface(sonar).build();

    commands
        .send(SonarCommand::Scan {
            start_angle: 0.0,
            end_angle: std::f64::consts::PI,
        })
        .unwrap();

    // Picked up on the first refresh; five simulated seconds is 150 steps.
    app.run_frames(151, 33_333);
    assert_eq!(rx.try_iter().count(), 0);

    // A stalled wall clock must not finish the scan early.
    app.run_frames(10, 0);
    assert_eq!(rx.try_iter().count(), 0);

    app.run_frame(33_333);
    let readings: Vec<SensorReading> = rx.try_iter().collect();
    assert_eq!(readings.len(), 1);
    match &readings[0] {
        SensorReading::SonarScan(scan) => {
            assert_relative_eq!(scan.time, 152.0 * 0.033333, epsilon = 1e-9);
            assert_eq!((scan.width, scan.height), (10, 10));
            assert_eq!(scan.image.len(), 100);
        }
        other => panic!("expected sonar scan, got {:?}", other),
    }

    app.run_frames(60, 33_333);
    assert_eq!(rx.try_iter().count(), 0);
}
