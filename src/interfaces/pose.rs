use crossbeam_channel::Sender;

use super::{InterfaceContext, SensorReading, SimInterface};

/// Publishes the pose of a fixed set of named entities.
///
/// Names that do not resolve are skipped on every refresh; they may appear
/// later or never.
pub struct PoseInterface {
    watched: Vec<String>,
    sender: Sender<SensorReading>,
}

impl PoseInterface {
    pub fn new<I, S>(watched: I, sender: Sender<SensorReading>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            watched: watched.into_iter().map(Into::into).collect(),
            sender,
        }
    }

    pub fn watched(&self) -> &[String] {
        &self.watched
    }
}

impl SimInterface for PoseInterface {
    fn name(&self) -> &str {
        "pose"
    }

    fn update(&mut self, ctx: &InterfaceContext) {
        for name in &self.watched {
            if let Some(pose) = ctx.entity_pose(name) {
                let _ = self.sender.send(SensorReading::Pose {
                    time: ctx.sim_time,
                    name: name.clone(),
                    pose,
                });
            }
        }
    }
}
