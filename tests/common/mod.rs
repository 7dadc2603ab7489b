#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_pose_eq, assert_pose_finite, assert_vector_eq};
pub use fixtures::*;
pub use helpers::*;
pub use test_sim::{TestSim, TestSimBuilder};
