//! Fixed-step stepping, interface cadence and frame diagnostics.

mod fixed_step;
mod stats;
mod sync_gate;

pub use fixed_step::{FixedStepScheduler, SchedulerConfig};
pub use stats::FrameStats;
pub use sync_gate::SyncGate;
