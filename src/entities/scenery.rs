//! Static scene objects. None of these move on their own; their pose only
//! changes when set from outside.

use serde::{Deserialize, Serialize};

use super::entity::Kinematics;

pub const BUOY_DEFAULT_RADIUS: f64 = 0.1;
pub const GATE_DEFAULT_WIDTH: f64 = 3.0;
pub const GATE_DEFAULT_HEIGHT: f64 = 2.5;
pub const CIRCULAR_POOL_DEFAULT_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buoy {
    pub radius: f64,
}

impl Default for Buoy {
    fn default() -> Self {
        Self {
            radius: BUOY_DEFAULT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub width: f64,
    pub height: f64,
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            width: GATE_DEFAULT_WIDTH,
            height: GATE_DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularPool {
    pub radius: f64,
}

impl Default for CircularPool {
    fn default() -> Self {
        Self {
            radius: CIRCULAR_POOL_DEFAULT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorTarget;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateAxes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyWall;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HarbourFloor;

impl Kinematics for Buoy {}
impl Kinematics for Gate {}
impl Kinematics for CircularPool {}
impl Kinematics for Pool {}
impl Kinematics for FloorTarget {}
impl Kinematics for CoordinateAxes {}
impl Kinematics for Pipe {}
impl Kinematics for SurveyWall {}
impl Kinematics for HarbourFloor {}
