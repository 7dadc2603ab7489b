use crossbeam_channel::Sender;

use super::{InterfaceContext, SensorReading, SimInterface};
use crate::utils::yaw_to_compass_heading;

/// Publishes the submarine's heading, roll and pitch.
pub struct CompassInterface {
    target: Option<String>,
    sender: Sender<SensorReading>,
}

impl CompassInterface {
    /// Follows whichever submarine the simulator is driving.
    pub fn new(sender: Sender<SensorReading>) -> Self {
        Self {
            target: None,
            sender,
        }
    }

    pub fn for_entity(target: impl Into<String>, sender: Sender<SensorReading>) -> Self {
        Self {
            target: Some(target.into()),
            sender,
        }
    }
}

impl SimInterface for CompassInterface {
    fn name(&self) -> &str {
        "compass"
    }

    fn update(&mut self, ctx: &InterfaceContext) {
        let Some(pose) = ctx.target_pose(self.target.as_deref()) else {
            return;
        };
        let _ = self.sender.send(SensorReading::Compass {
            time: ctx.sim_time,
            heading: yaw_to_compass_heading(pose.yaw()),
            roll: pose.roll(),
            pitch: pose.pitch(),
        });
    }
}
