//! Time sampling and timestamp arithmetic.

mod clock;
mod source;

pub use clock::SimClock;
pub use source::{ManualClock, MonotonicClock, TimeSource};
