use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use std::io::Write;
use subsim::{EntityType, SimError, WorldDescription, WorldSource};
use tempfile::Builder;

use crate::common::{harbour_world, write_world_file, TestSimBuilder};

#[test]
fn test_init_from_yaml_file() {
    let file = write_world_file(&harbour_world(), ".yaml");
    let app = TestSimBuilder::new()
        .with_world_source(WorldSource::File(file.path().to_path_buf()))
        .build();

    let registry = app.sim.registry();
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.find_by_type(EntityType::SurveyWall).count(), 1);
    assert_relative_eq!(
        app.sub_pose().rotation.z,
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
}

#[test]
fn test_init_from_json_file() {
    let file = write_world_file(&harbour_world(), ".json");
    let app = TestSimBuilder::new()
        .with_world_source(WorldSource::File(file.path().to_path_buf()))
        .build();
    assert_eq!(app.sim.registry().len(), 4);
}

#[test]
fn test_hand_written_world() {
    let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
    write!(
        file,
        r#"
entities:
  - type: Submarine
    position: [-4, 0, 0]
    yaw: 45
  - type: buoy
    position: [0, 5, -1]
    radius: 0.3
  - type: Sonar
    position: [0, 0, 0]
"#
    )
    .unwrap();

    let app = TestSimBuilder::new()
        .with_world_source(WorldSource::File(file.path().to_path_buf()))
        .build();

    // The unknown type is skipped.
    assert_eq!(app.sim.registry().len(), 2);
    assert!(app.sim.entity_pose("Buoy1").is_some());
}

#[test]
fn test_two_submarines_rejected() {
    let mut world = harbour_world();
    world.entities.extend(WorldDescription::default_scene().entities);
    let (mut sim, source, _clock) = TestSimBuilder::new().with_world(world).build_uninit();

    assert!(matches!(
        sim.init(source),
        Err(SimError::MultipleSubmarines(2))
    ));
}

#[test]
fn test_invalid_descriptor_rejected() {
    let mut world = harbour_world();
    world.entities[2].radius = Some(0.0);
    let (mut sim, source, _clock) = TestSimBuilder::new().with_world(world).build_uninit();

    match sim.init(source) {
        Err(SimError::InvalidEntity { index, .. }) => assert_eq!(index, 2),
        other => panic!("expected InvalidEntity, got {:?}", other),
    }
    assert!(sim.registry().is_empty());
}
