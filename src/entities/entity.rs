use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::scenery::{
    Buoy, CircularPool, CoordinateAxes, FloorTarget, Gate, HarbourFloor, Pipe, Pool, SurveyWall,
};
use super::submarine::Submarine;
use crate::utils::Pose;

/// Index handle into an [`EntityRegistry`](super::EntityRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Submarine,
    Buoy,
    Gate,
    Pool,
    CircularPool,
    FloorTarget,
    CoordinateAxes,
    Pipe,
    SurveyWall,
    HarbourFloor,
}

impl EntityType {
    pub const ALL: [EntityType; 10] = [
        EntityType::Submarine,
        EntityType::Buoy,
        EntityType::Gate,
        EntityType::Pool,
        EntityType::CircularPool,
        EntityType::FloorTarget,
        EntityType::CoordinateAxes,
        EntityType::Pipe,
        EntityType::SurveyWall,
        EntityType::HarbourFloor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Submarine => "Submarine",
            EntityType::Buoy => "Buoy",
            EntityType::Gate => "Gate",
            EntityType::Pool => "Pool",
            EntityType::CircularPool => "CircularPool",
            EntityType::FloorTarget => "FloorTarget",
            EntityType::CoordinateAxes => "CoordinateAxes",
            EntityType::Pipe => "Pipe",
            EntityType::SurveyWall => "SurveyWall",
            EntityType::HarbourFloor => "HarbourFloor",
        }
    }

    /// Case-insensitive lookup. Accepts the short and long spellings world
    /// files have used over time ("Sub", "CoordinateSystemAxes", ...).
    pub fn from_name(name: &str) -> Option<EntityType> {
        let name = name.trim();
        let name = name.strip_prefix('!').unwrap_or(name);
        if name.eq_ignore_ascii_case("sub") {
            return Some(EntityType::Submarine);
        }
        if name.eq_ignore_ascii_case("coordinatesystemaxes") || name.eq_ignore_ascii_case("axes")
        {
            return Some(EntityType::CoordinateAxes);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-step behaviour shared by every entity variant.
///
/// `transform` is the entity's pose; implementations must write it back in
/// one assignment so translation and rotation never disagree.
pub trait Kinematics {
    fn update(&mut self, _transform: &mut Pose, _dt: f64) {}
}

/// Closed set of entity variants and their type-specific state.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Submarine(Submarine),
    Buoy(Buoy),
    Gate(Gate),
    Pool(Pool),
    CircularPool(CircularPool),
    FloorTarget(FloorTarget),
    CoordinateAxes(CoordinateAxes),
    Pipe(Pipe),
    SurveyWall(SurveyWall),
    HarbourFloor(HarbourFloor),
}

impl EntityKind {
    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityKind::Submarine(_) => EntityType::Submarine,
            EntityKind::Buoy(_) => EntityType::Buoy,
            EntityKind::Gate(_) => EntityType::Gate,
            EntityKind::Pool(_) => EntityType::Pool,
            EntityKind::CircularPool(_) => EntityType::CircularPool,
            EntityKind::FloorTarget(_) => EntityType::FloorTarget,
            EntityKind::CoordinateAxes(_) => EntityType::CoordinateAxes,
            EntityKind::Pipe(_) => EntityType::Pipe,
            EntityKind::SurveyWall(_) => EntityType::SurveyWall,
            EntityKind::HarbourFloor(_) => EntityType::HarbourFloor,
        }
    }

    fn as_kinematics(&mut self) -> &mut dyn Kinematics {
        match self {
            EntityKind::Submarine(k) => k,
            EntityKind::Buoy(k) => k,
            EntityKind::Gate(k) => k,
            EntityKind::Pool(k) => k,
            EntityKind::CircularPool(k) => k,
            EntityKind::FloorTarget(k) => k,
            EntityKind::CoordinateAxes(k) => k,
            EntityKind::Pipe(k) => k,
            EntityKind::SurveyWall(k) => k,
            EntityKind::HarbourFloor(k) => k,
        }
    }
}

/// A simulated object: identity, pose and variant state.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    name: String,
    transform: Pose,
    kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id,
            name: name.into(),
            transform: Pose::default(),
            kind,
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_type(&self) -> EntityType {
        self.kind.entity_type()
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn pose(&self) -> Pose {
        self.transform
    }

    pub fn position(&self) -> Vector3<f64> {
        self.transform.position
    }

    pub fn rotation(&self) -> Vector3<f64> {
        self.transform.rotation
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.transform = pose;
    }

    pub fn set_position(&mut self, position: Vector3<f64>) {
        self.transform.position = position;
    }

    /// Rotations are given in radians.
    pub fn set_rotation(&mut self, rotation: Vector3<f64>) {
        self.transform.rotation = rotation;
    }

    /// Rotation about the vertical axis, in radians.
    pub fn set_yaw(&mut self, yaw: f64) {
        self.transform.rotation.z = yaw;
    }

    pub fn yaw(&self) -> f64 {
        self.transform.rotation.z
    }

    pub fn as_submarine(&self) -> Option<&Submarine> {
        match &self.kind {
            EntityKind::Submarine(sub) => Some(sub),
            _ => None,
        }
    }

    pub fn as_submarine_mut(&mut self) -> Option<&mut Submarine> {
        match &mut self.kind {
            EntityKind::Submarine(sub) => Some(sub),
            _ => None,
        }
    }

    /// Advance the entity by one step of `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.kind.as_kinematics().update(&mut self.transform, dt);
    }
}
