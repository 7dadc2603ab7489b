use pretty_assertions::assert_eq;
use std::path::PathBuf;
use subsim::{RunState, SimError, WorldSource};

use crate::common::{world_without_submarine, TrackingHost, TestSimBuilder};

#[test]
fn test_init_and_run() {
    let host = TrackingHost::default();
    let mut app = TestSimBuilder::new().with_host(host.clone()).build();

    assert!(app.sim.is_running());
    assert_eq!(host.opens(), 1);

    app.run_frames(3, 33_333);
    assert_eq!(host.renders(), 3);
    assert_eq!(app.sim.stats().total_steps(), 3);
}

#[test]
fn test_deinit_twice() {
    let host = TrackingHost::default();
    let mut app = TestSimBuilder::new().with_host(host.clone()).build();

    app.sim.deinit();
    app.sim.deinit();

    assert!(!app.sim.is_running());
    assert_eq!(app.sim.state(), RunState::Stopped);
    assert_eq!(host.closes(), 1);
    assert!(app.sim.registry().is_empty());
}

#[test]
fn test_deinit_before_init() {
    let (mut sim, _source, _clock) = TestSimBuilder::new().build_uninit();
    sim.deinit();
    sim.deinit();
    assert!(!sim.is_running());
}

#[test]
fn test_update_after_stop_is_inert() {
    let mut app = TestSimBuilder::new().build();
    app.sim.deinit();
    assert_eq!(app.run_frame(1_000_000), 0);
    assert_eq!(app.sim.stats().total_frames(), 0);
}

#[test]
fn test_missing_submarine_fails_init() {
    let host = TrackingHost::default();
    let (mut sim, source, _clock) = TestSimBuilder::new()
        .with_host(host.clone())
        .with_world(world_without_submarine())
        .build_uninit();

    let result = sim.init(source);

    assert!(matches!(result, Err(SimError::MissingSubmarine)));
    assert!(!sim.is_running());
    assert!(sim.registry().is_empty());
    // The host was opened and then released again.
    assert_eq!(host.opens(), 1);
    assert_eq!(host.closes(), 1);
}

#[test]
fn test_host_failure_fails_init() {
    let (mut sim, source, _clock) = TestSimBuilder::new()
        .with_host(TrackingHost::failing())
        .build_uninit();

    let result = sim.init(source);

    assert!(matches!(result, Err(SimError::HostError(_))));
    assert!(!sim.is_running());
    assert!(sim.registry().is_empty());
}

#[test]
fn test_host_failure_keeps_host_for_retry() {
    let host = TrackingHost::failing();
    let (mut sim, source, _clock) = TestSimBuilder::new()
        .with_host(host.clone())
        .build_uninit();

    for _ in 0..2 {
        match sim.init(source.clone()) {
            Err(SimError::HostError(message)) => assert_eq!(message, "display unavailable"),
            other => panic!("expected the host's own error, got {:?}", other.err()),
        }
    }
    assert_eq!(host.open_attempts(), 2);
    assert_eq!(host.closes(), 0);

    host.set_failing(false);
    sim.init(source).expect("retry after the host recovers");
    assert!(sim.is_running());
    assert_eq!(host.opens(), 1);
}

#[test]
fn test_unreadable_world_fails_init() {
    let host = TrackingHost::default();
    let (mut sim, _source, _clock) = TestSimBuilder::new()
        .with_host(host.clone())
        .build_uninit();

    let result = sim.init(WorldSource::File(PathBuf::from("no/such/world.yaml")));

    assert!(matches!(result, Err(SimError::Io(_))));
    assert!(!sim.is_running());
    assert_eq!(host.closes(), 1);
}

#[test]
fn test_drop_closes_host() {
    let host = TrackingHost::default();
    {
        let _app = TestSimBuilder::new().with_host(host.clone()).build();
    }
    assert_eq!(host.closes(), 1);
}

#[test]
fn test_init_twice_is_rejected() {
    let mut app = TestSimBuilder::new().build();
    assert!(matches!(
        app.sim.init(WorldSource::Default),
        Err(SimError::InvalidState(_))
    ));
    assert!(app.sim.is_running());
}
