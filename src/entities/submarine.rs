use serde::{Deserialize, Serialize};

use super::entity::Kinematics;
use crate::utils::Pose;

/// Velocity demands accepted by the submarine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SubmarineCommand {
    /// Forward speed along the current heading (m/s).
    ForwardSpeed(f64),
    /// Rate of change of yaw (rad/s).
    YawSpeed(f64),
    /// Vertical speed, positive up (m/s).
    DepthSpeed(f64),
    /// Rate of change of pitch (rad/s).
    PitchSpeed(f64),
}

/// Velocity state of the submarine, consumed by its per-step update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Submarine {
    pub forward_speed: f64,
    pub yaw_speed: f64,
    pub depth_speed: f64,
    pub pitch_speed: f64,
}

impl Submarine {
    pub fn apply(&mut self, command: SubmarineCommand) {
        match command {
            SubmarineCommand::ForwardSpeed(v) => self.forward_speed = v,
            SubmarineCommand::YawSpeed(v) => self.yaw_speed = v,
            SubmarineCommand::DepthSpeed(v) => self.depth_speed = v,
            SubmarineCommand::PitchSpeed(v) => self.pitch_speed = v,
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.forward_speed == 0.0
            && self.yaw_speed == 0.0
            && self.depth_speed == 0.0
            && self.pitch_speed == 0.0
    }
}

impl Kinematics for Submarine {
    fn update(&mut self, transform: &mut Pose, dt: f64) {
        let mut next = *transform;

        // Heading first, then translate along the new heading.
        next.rotation.z += self.yaw_speed * dt;
        next.rotation.x += self.pitch_speed * dt;

        let yaw = next.rotation.z;
        next.position.x += self.forward_speed * yaw.cos() * dt;
        next.position.y += self.forward_speed * yaw.sin() * dt;
        next.position.z += self.depth_speed * dt;

        *transform = next;
    }
}
