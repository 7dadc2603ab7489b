use crossbeam_channel::Sender;

use super::{InterfaceContext, SensorReading, SimInterface};

/// Publishes the submarine's depth, taken as its z coordinate.
pub struct DepthSensorInterface {
    target: Option<String>,
    sender: Sender<SensorReading>,
}

impl DepthSensorInterface {
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

impl SimInterface for DepthSensorInterface {
    fn name(&self) -> &str {
        "depth_sensor"
    }

    fn update(&mut self, ctx: &InterfaceContext) {
        if let Some(pose) = ctx.target_pose(self.target.as_deref()) {
            let _ = self.sender.send(SensorReading::Depth {
                time: ctx.sim_time,
                depth: pose.position.z,
            });
        }
    }
}
