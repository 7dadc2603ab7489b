use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::SimClock;

/// Anything that can hand out the current time.
///
/// Sampling never fails; a time source that cannot answer is a fatal
/// condition for the process, not something callers recover from.
pub trait TimeSource: Send {
    fn now(&self) -> SimClock;
}

/// Monotonic wall clock measured from the moment it was created.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now(&self) -> SimClock {
        SimClock::from_duration(self.origin.elapsed())
    }
}

/// Hand-driven clock for deterministic runs and tests.
///
/// Clones share the same underlying time, so a test can keep one handle
/// and give another to the simulator. Unlike a real clock it may be
/// moved backwards.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(time: SimClock) -> Self {
        let clock = Self::new();
        clock.set(time);
        clock
    }

    pub fn set(&self, time: SimClock) {
        let total = time.seconds() * 1_000_000_000 + time.subsec_nanos() as i64;
        self.nanos.store(total, Ordering::SeqCst);
    }

    /// Move the clock by `delta` microseconds; negative values rewind it.
    pub fn advance_micros(&self, delta: i64) {
        self.nanos.fetch_add(delta * 1_000, Ordering::SeqCst);
    }

    pub fn advance_secs_f64(&self, delta: f64) {
        self.nanos
            .fetch_add((delta * 1e9).round() as i64, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> SimClock {
        SimClock::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}
