use approx::assert_relative_eq;
use nalgebra::Vector3;
use subsim::Pose;

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

#[track_caller]
pub fn assert_pose_eq(actual: &Pose, expected: &Pose, epsilon: f64) {
    assert_vector_eq(&actual.position, &expected.position, epsilon);
    assert_vector_eq(&actual.rotation, &expected.rotation, epsilon);
}

/// Assert every component of a pose is finite
#[track_caller]
pub fn assert_pose_finite(pose: &Pose) {
    assert!(
        pose.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        pose.position
    );
    assert!(
        pose.rotation.iter().all(|v| v.is_finite()),
        "Rotation is not finite: {:?}",
        pose.rotation
    );
}
