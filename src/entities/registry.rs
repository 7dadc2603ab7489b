use super::entity::{Entity, EntityId, EntityType};

/// Owns every active entity in registration order.
///
/// Registration order is update order. Ids are indices into the arena and
/// stay valid until [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Duplicate names are not checked.
    pub fn register(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId::new(self.entities.len() as u32);
        entity.set_id(id);
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// First entity whose name matches, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    pub fn find_by_type(&self, entity_type: EntityType) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |e| e.entity_type() == entity_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Step every entity once, in registration order.
    pub fn update_all(&mut self, dt: f64) {
        for entity in &mut self.entities {
            entity.update(dt);
        }
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
