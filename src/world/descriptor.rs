use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::entities::EntityType;

/// One entry of a world file.
///
/// The type is kept as a string so that files naming entity types this build
/// does not know about still load; such entries are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: [f64; 3],
    /// Euler angles in degrees (pitch, roll, yaw).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 3]>,
    /// Heading in degrees. Overrides `rotation[2]` when both are given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl EntityDescriptor {
    pub fn new(entity_type: EntityType, position: Vector3<f64>) -> Self {
        Self {
            entity_type: entity_type.as_str().to_string(),
            name: None,
            position: [position.x, position.y, position.z],
            rotation: None,
            yaw: None,
            radius: None,
            width: None,
            height: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rotation_deg(mut self, rotation: Vector3<f64>) -> Self {
        self.rotation = Some([rotation.x, rotation.y, rotation.z]);
        self
    }

    pub fn with_yaw_deg(mut self, yaw: f64) -> Self {
        self.yaw = Some(yaw);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Resolved entity type, or `None` if the name is not recognised.
    pub fn resolve_type(&self) -> Option<EntityType> {
        EntityType::from_name(&self.entity_type)
    }

    pub fn position(&self) -> Vector3<f64> {
        Vector3::from(self.position)
    }
}
