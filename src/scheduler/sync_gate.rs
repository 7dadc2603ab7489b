use crate::time::SimClock;
use crate::utils::MICROS_PER_SECOND;

/// Limits how often external interfaces are refreshed.
///
/// Measured in simulated time, so a tick that runs no steps never opens the
/// gate and a burst of catch-up steps opens it at most once.
#[derive(Debug, Clone)]
pub struct SyncGate {
    interval_us: i64,
    last_publish_us: i64,
    publishes: u64,
}

impl SyncGate {
    pub fn new(rate_hz: f64) -> Self {
        let interval_us = (MICROS_PER_SECOND as f64 / rate_hz).round().max(1.0) as i64;
        Self {
            interval_us,
            last_publish_us: 0,
            publishes: 0,
        }
    }

    pub fn interval(&self) -> SimClock {
        SimClock::from_micros(self.interval_us)
    }

    pub fn last_publish(&self) -> SimClock {
        SimClock::from_micros(self.last_publish_us)
    }

    pub fn publishes(&self) -> u64 {
        self.publishes
    }

    /// Returns true, and records `sim_now` as the last publish, when a full
    /// interval has passed since the previous publish.
    pub fn poll(&mut self, sim_now: SimClock) -> bool {
        let now_us = sim_now.to_micros();
        if now_us - self.last_publish_us >= self.interval_us {
            self.last_publish_us = now_us;
            self.publishes += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, sim_now: SimClock) {
        self.last_publish_us = sim_now.to_micros();
        self.publishes = 0;
    }
}
