use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::descriptor::EntityDescriptor;
use crate::entities::{EntityFactory, EntityRegistry, EntityType};
use crate::utils::{Result, SimError};

/// Ordered list of entities making up a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldDescription {
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorldFormat {
    Yaml,
    Json,
}

impl WorldFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(WorldFormat::Yaml),
            Some("json") => Ok(WorldFormat::Json),
            _ => Err(SimError::UnsupportedWorldFormat(path.to_path_buf())),
        }
    }
}

impl WorldDescription {
    pub fn new(entities: Vec<EntityDescriptor>) -> Self {
        Self { entities }
    }

    /// The scene used when no world file is given: the submarine facing
    /// north-east near the origin, with a gate ahead, a buoy and a pool.
    pub fn default_scene() -> Self {
        Self::new(vec![
            EntityDescriptor::new(EntityType::Submarine, Vector3::new(-4.0, 0.0, 0.0))
                .with_yaw_deg(45.0),
            EntityDescriptor::new(EntityType::CoordinateAxes, Vector3::zeros()),
            EntityDescriptor::new(EntityType::Gate, Vector3::new(0.0, 15.0, 0.0)),
            EntityDescriptor::new(EntityType::Buoy, Vector3::new(0.0, 5.0, 0.0)),
            EntityDescriptor::new(EntityType::Pool, Vector3::new(0.0, -15.0, 0.0)),
        ])
    }

    /// Load a world from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = WorldFormat::from_path(path)?;
        let file = File::open(path)?;
        let world = match format {
            WorldFormat::Yaml => serde_yaml::from_reader(file)?,
            WorldFormat::Json => serde_json::from_reader(file)?,
        };
        Ok(world)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = WorldFormat::from_path(path)?;
        let file = File::create(path)?;
        match format {
            WorldFormat::Yaml => serde_yaml::to_writer(file, self)?,
            WorldFormat::Json => serde_json::to_writer_pretty(file, self)?,
        }
        Ok(())
    }

    pub fn submarine_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|d| d.resolve_type() == Some(EntityType::Submarine))
            .count()
    }

    /// A world must contain exactly one submarine.
    pub fn validate(&self) -> Result<()> {
        match self.submarine_count() {
            0 => Err(SimError::MissingSubmarine),
            1 => Ok(()),
            n => Err(SimError::MultipleSubmarines(n)),
        }
    }

    /// Build every recognised entry and register it, in file order.
    ///
    /// On error the registry may hold the entities built before the failing
    /// entry; the caller is expected to clear it.
    pub fn populate(
        &self,
        factory: &mut EntityFactory,
        registry: &mut EntityRegistry,
    ) -> Result<usize> {
        self.validate()?;
        let mut added = 0;
        for (index, descriptor) in self.entities.iter().enumerate() {
            if let Some(entity) = factory.from_descriptor(index, descriptor)? {
                debug!(
                    "Registering {} '{}' at {:?}",
                    entity.entity_type(),
                    entity.name(),
                    descriptor.position
                );
                registry.register(entity);
                added += 1;
            }
        }
        info!("Populated world with {} entities", added);
        Ok(added)
    }
}

/// Where the simulator gets its scene from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorldSource {
    #[default]
    Default,
    File(PathBuf),
    Description(WorldDescription),
}

impl WorldSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => WorldSource::File(path),
            None => WorldSource::Default,
        }
    }

    pub fn resolve(&self) -> Result<WorldDescription> {
        match self {
            WorldSource::Default => Ok(WorldDescription::default_scene()),
            WorldSource::File(path) => {
                info!("Loading world from {}", path.display());
                WorldDescription::load(path)
            }
            WorldSource::Description(world) => Ok(world.clone()),
        }
    }
}
