use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Translation and rotation of an entity, in simulator coordinates.
///
/// Rotations are Euler angles in radians: x is pitch, y is roll, z is yaw
/// (about the vertical axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub rotation: Vector3<f64>,
}

impl Pose {
    pub fn new(position: Vector3<f64>, rotation: Vector3<f64>) -> Self {
        Self { position, rotation }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn yaw(&self) -> f64 {
        self.rotation.z
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.rotation.x
    }

    #[inline]
    pub fn roll(&self) -> f64 {
        self.rotation.y
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Vector3::zeros(),
        }
    }
}
