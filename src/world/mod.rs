//! Declarative world population: what to spawn, and where.

mod descriptor;
mod description;

pub use description::{WorldDescription, WorldSource};
pub use descriptor::EntityDescriptor;
