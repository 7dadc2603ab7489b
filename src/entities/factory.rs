use nalgebra::Vector3;
use std::collections::HashMap;
use tracing::warn;

use super::entity::{Entity, EntityId, EntityKind, EntityType};
use super::scenery::{
    Buoy, CircularPool, CoordinateAxes, FloorTarget, Gate, HarbourFloor, Pipe, Pool, SurveyWall,
};
use super::submarine::Submarine;
use crate::utils::{deg_to_rad, Pose, Result, SimError, SUBMARINE_DEFAULT_NAME};
use crate::world::EntityDescriptor;

/// Builds entities and hands out default names.
///
/// Each entity type has its own counter, so unnamed entities come out as
/// `Gate1`, `Gate2`, `Buoy1`, ... The first unnamed submarine is called
/// `Sub`.
#[derive(Debug, Default)]
pub struct EntityFactory {
    counters: HashMap<EntityType, u32>,
}

impl EntityFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities of `entity_type` built so far.
    pub fn count(&self, entity_type: EntityType) -> u32 {
        self.counters.get(&entity_type).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.counters.clear();
    }

    fn next_name(&mut self, entity_type: EntityType) -> String {
        let counter = self.counters.entry(entity_type).or_insert(0);
        *counter += 1;
        match (entity_type, *counter) {
            (EntityType::Submarine, 1) => SUBMARINE_DEFAULT_NAME.to_string(),
            (ty, n) => format!("{}{}", ty.as_str(), n),
        }
    }

    /// Create an entity at the origin. The id is a placeholder until the
    /// entity is registered.
    pub fn create(&mut self, kind: EntityKind, name: Option<String>) -> Entity {
        let entity_type = kind.entity_type();
        let name = match name {
            Some(name) => {
                *self.counters.entry(entity_type).or_insert(0) += 1;
                name
            }
            None => self.next_name(entity_type),
        };
        Entity::new(EntityId::new(0), name, kind)
    }

    /// Build an entity from a world-file entry.
    ///
    /// Returns `Ok(None)` for unrecognised types, which are skipped with a
    /// warning. `index` is the position of the entry in the file and is
    /// only used for error reporting.
    pub fn from_descriptor(
        &mut self,
        index: usize,
        descriptor: &EntityDescriptor,
    ) -> Result<Option<Entity>> {
        let Some(entity_type) = descriptor.resolve_type() else {
            warn!(
                "Skipping entity {}: unrecognised type '{}'",
                index, descriptor.entity_type
            );
            return Ok(None);
        };

        let position = descriptor.position();
        if !position.iter().all(|v| v.is_finite()) {
            return Err(invalid(index, "position must be finite"));
        }

        let mut rotation = match descriptor.rotation {
            Some(r) => Vector3::new(deg_to_rad(r[0]), deg_to_rad(r[1]), deg_to_rad(r[2])),
            None => Vector3::zeros(),
        };
        if let Some(yaw) = descriptor.yaw {
            rotation.z = deg_to_rad(yaw);
        }
        if !rotation.iter().all(|v| v.is_finite()) {
            return Err(invalid(index, "rotation must be finite"));
        }

        let kind = match entity_type {
            EntityType::Submarine => EntityKind::Submarine(Submarine::default()),
            EntityType::Buoy => {
                let mut buoy = Buoy::default();
                if let Some(radius) = descriptor.radius {
                    buoy.radius = positive(index, "radius", radius)?;
                }
                EntityKind::Buoy(buoy)
            }
            EntityType::Gate => {
                let mut gate = Gate::default();
                if let Some(width) = descriptor.width {
                    gate.width = positive(index, "width", width)?;
                }
                if let Some(height) = descriptor.height {
                    gate.height = positive(index, "height", height)?;
                }
                EntityKind::Gate(gate)
            }
            EntityType::CircularPool => {
                let mut pool = CircularPool::default();
                if let Some(radius) = descriptor.radius {
                    pool.radius = positive(index, "radius", radius)?;
                }
                EntityKind::CircularPool(pool)
            }
            EntityType::Pool => EntityKind::Pool(Pool),
            EntityType::FloorTarget => EntityKind::FloorTarget(FloorTarget),
            EntityType::CoordinateAxes => EntityKind::CoordinateAxes(CoordinateAxes),
            EntityType::Pipe => EntityKind::Pipe(Pipe),
            EntityType::SurveyWall => EntityKind::SurveyWall(SurveyWall),
            EntityType::HarbourFloor => EntityKind::HarbourFloor(HarbourFloor),
        };

        let mut entity = self.create(kind, descriptor.name.clone());
        entity.set_pose(Pose::new(position, rotation));
        Ok(Some(entity))
    }
}

fn invalid(index: usize, reason: &str) -> SimError {
    SimError::InvalidEntity {
        index,
        reason: reason.to_string(),
    }
}

fn positive(index: usize, field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(
            index,
            &format!("{} must be positive, got {}", field, value),
        ))
    }
}
