use serde::{Deserialize, Serialize};

use crate::entities::EntityRegistry;
use crate::time::SimClock;
use crate::utils::{
    Result, SimError, DEFAULT_MAX_CATCHUP_STEPS, DEFAULT_STEP_RATE_HZ, MAX_STEP_DURATION_US,
    MICROS_PER_SECOND,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Simulation steps per second of simulated time.
    pub step_rate_hz: f64,
    /// Most steps a single tick may run after a stall.
    pub max_catchup_steps: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            step_rate_hz: DEFAULT_STEP_RATE_HZ,
            max_catchup_steps: DEFAULT_MAX_CATCHUP_STEPS,
        }
    }
}

impl SchedulerConfig {
    /// Fixed step length, rounded to whole microseconds.
    pub fn step_duration_us(&self) -> i64 {
        (MICROS_PER_SECOND as f64 / self.step_rate_hz).round() as i64
    }

    pub fn validate(&self) -> Result<()> {
        if !self.step_rate_hz.is_finite() || self.step_rate_hz <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "step_rate_hz must be positive, got {}",
                self.step_rate_hz
            )));
        }
        let step_us = self.step_duration_us();
        if step_us < 1 {
            return Err(SimError::InvalidConfig(format!(
                "step_rate_hz {} gives a step shorter than 1us",
                self.step_rate_hz
            )));
        }
        if step_us > MAX_STEP_DURATION_US {
            return Err(SimError::InvalidConfig(format!(
                "step_rate_hz {} gives a step longer than {}s",
                self.step_rate_hz,
                MAX_STEP_DURATION_US / MICROS_PER_SECOND
            )));
        }
        if self.max_catchup_steps == 0 {
            return Err(SimError::InvalidConfig(
                "max_catchup_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Turns wall-clock progress into whole fixed-size simulation steps.
///
/// Elapsed time is banked in an integer microsecond accumulator. Each tick
/// spends it in `step_duration_us` chunks, calling every entity with the same
/// constant `dt`. The accumulator never drops below zero and never holds
/// more than `max_catchup_steps` steps; anything beyond that is discarded.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    last_tick: SimClock,
    accumulator_us: i64,
    step_duration_us: i64,
    max_catchup_steps: u32,
    total_steps: u64,
}

impl FixedStepScheduler {
    pub fn new(config: &SchedulerConfig, now: SimClock) -> Self {
        Self {
            last_tick: now,
            accumulator_us: 0,
            step_duration_us: config.step_duration_us().max(1),
            max_catchup_steps: config.max_catchup_steps,
            total_steps: 0,
        }
    }

    /// Run as many fixed steps as the time since the last tick allows.
    ///
    /// Returns the number of steps executed.
    pub fn tick(&mut self, now: SimClock, registry: &mut EntityRegistry) -> u32 {
        // A clock that runs backwards contributes nothing.
        let elapsed_us = SimClock::diff(now, self.last_tick).to_micros().max(0);

        let ceiling = (self.max_catchup_steps as i64).saturating_mul(self.step_duration_us);
        self.accumulator_us = self.accumulator_us.saturating_add(elapsed_us).min(ceiling);

        let dt = self.step_seconds();
        let mut steps = 0;
        while self.accumulator_us >= self.step_duration_us {
            registry.update_all(dt);
            self.accumulator_us -= self.step_duration_us;
            steps += 1;
        }

        self.total_steps += steps as u64;
        self.last_tick = now;
        steps
    }

    /// Constant `dt` handed to every entity update, in seconds.
    pub fn step_seconds(&self) -> f64 {
        self.step_duration_us as f64 / MICROS_PER_SECOND as f64
    }

    pub fn step_duration_us(&self) -> i64 {
        self.step_duration_us
    }

    pub fn max_catchup_steps(&self) -> u32 {
        self.max_catchup_steps
    }

    pub fn accumulator_us(&self) -> i64 {
        self.accumulator_us
    }

    pub fn last_tick(&self) -> SimClock {
        self.last_tick
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Simulated time actually stepped through since creation.
    pub fn stepped_time(&self) -> SimClock {
        let micros = (self.total_steps as i64).saturating_mul(self.step_duration_us);
        SimClock::from_micros(micros)
    }
}
