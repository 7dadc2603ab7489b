pub mod cli;
pub mod config;
pub mod entities;
pub mod host;
pub mod interfaces;
pub mod scheduler;
pub mod simulator;
pub mod time;
pub mod utils;
pub mod world;

pub use config::SimulatorConfig;
pub use entities::{Entity, EntityId, EntityKind, EntityRegistry, EntityType, SubmarineCommand};
pub use host::{HeadlessHost, HostEngine};
pub use interfaces::{SensorReading, SimInterface};
pub use scheduler::{FixedStepScheduler, SchedulerConfig};
pub use simulator::{RunState, Simulator};
pub use time::{ManualClock, MonotonicClock, SimClock, TimeSource};
pub use utils::{Pose, Result, SimError};
pub use world::{EntityDescriptor, WorldDescription, WorldSource};
