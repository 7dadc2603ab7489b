//! Simulated objects, the factory that names them, and the registry that
//! steps them.

mod entity;
mod factory;
mod registry;
mod scenery;
mod submarine;

pub use entity::{Entity, EntityId, EntityKind, EntityType, Kinematics};
pub use factory::EntityFactory;
pub use registry::EntityRegistry;
pub use scenery::{
    Buoy, CircularPool, CoordinateAxes, FloorTarget, Gate, HarbourFloor, Pipe, Pool, SurveyWall,
};
pub use submarine::{Submarine, SubmarineCommand};
