//! Seam between the simulator and whatever consumes its sensor data.
//!
//! Interfaces are refreshed by the simulator through its sync gate, never
//! once per simulation step. Each publisher pushes [`SensorReading`]s into a
//! channel; the consumer decides how to frame them.

mod compass;
mod depth;
mod pose;
mod sonar;

use serde::{Deserialize, Serialize};

use crate::entities::{Entity, EntityId, EntityRegistry, EntityType};
use crate::utils::Pose;

pub use compass::CompassInterface;
pub use depth::DepthSensorInterface;
pub use pose::PoseInterface;
pub use sonar::{SonarCommand, SonarConfig, SonarInterface, SonarScan};

/// Read-only view of the simulation handed to interfaces on each refresh.
pub struct InterfaceContext<'a> {
    pub registry: &'a EntityRegistry,
    /// Seconds of simulated time since init.
    pub sim_time: f64,
    submarine: Option<EntityId>,
}

impl<'a> InterfaceContext<'a> {
    pub fn new(registry: &'a EntityRegistry, sim_time: f64) -> Self {
        Self {
            registry,
            sim_time,
            submarine: None,
        }
    }

    /// Pin the submarine the simulator is driving.
    pub fn with_submarine(mut self, id: Option<EntityId>) -> Self {
        self.submarine = id;
        self
    }

    /// The tracked submarine, else the first submarine in the registry.
    pub fn submarine(&self) -> Option<&'a Entity> {
        let registry = self.registry;
        self.submarine
            .and_then(|id| registry.get(id))
            .or_else(|| registry.find_by_type(EntityType::Submarine).next())
    }

    pub fn submarine_pose(&self) -> Option<Pose> {
        self.submarine().map(Entity::pose)
    }

    /// Pose of `target` when named, otherwise of the submarine.
    pub fn target_pose(&self, target: Option<&str>) -> Option<Pose> {
        match target {
            Some(name) => self.entity_pose(name),
            None => self.submarine_pose(),
        }
    }

    /// Pose of the named entity. Absence is normal, not an error.
    pub fn entity_pose(&self, name: &str) -> Option<Pose> {
        self.registry.find(name).map(|e| e.pose())
    }
}

pub trait SimInterface: Send {
    fn name(&self) -> &str;

    fn update(&mut self, ctx: &InterfaceContext);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SensorReading {
    Compass {
        time: f64,
        /// Clockwise from north, in [0, 2π).
        heading: f64,
        roll: f64,
        pitch: f64,
    },
    Depth {
        time: f64,
        depth: f64,
    },
    Pose {
        time: f64,
        name: String,
        pose: Pose,
    },
    SonarScan(SonarScan),
    /// Reply to a sonar configuration request.
    SonarConfig {
        time: f64,
        config: SonarConfig,
    },
}

impl SensorReading {
    pub fn time(&self) -> f64 {
        match self {
            SensorReading::Compass { time, .. }
            | SensorReading::Depth { time, .. }
            | SensorReading::Pose { time, .. }
            | SensorReading::SonarConfig { time, .. } => *time,
            SensorReading::SonarScan(scan) => scan.time,
        }
    }
}
