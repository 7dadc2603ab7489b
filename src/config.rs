use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scheduler::SchedulerConfig;
use crate::utils::{Result, SimError, DEFAULT_PUBLISH_RATE_HZ, DEFAULT_STATS_INTERVAL};

/// Everything the simulator needs to know before `init`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub scheduler: SchedulerConfig,
    /// How often interfaces are refreshed, in simulated-time Hz.
    pub publish_rate_hz: f64,
    /// Window over which frame statistics are averaged (s).
    pub stats_interval_s: f64,
    /// World file to load. `None` uses the built-in scene.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            publish_rate_hz: DEFAULT_PUBLISH_RATE_HZ,
            stats_interval_s: DEFAULT_STATS_INTERVAL,
            world: None,
        }
    }
}

impl SimulatorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.scheduler.validate()?;
        if !self.publish_rate_hz.is_finite() || self.publish_rate_hz <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "publish_rate_hz must be positive, got {}",
                self.publish_rate_hz
            )));
        }
        if !self.stats_interval_s.is_finite() || self.stats_interval_s <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "stats_interval_s must be positive, got {}",
                self.stats_interval_s
            )));
        }
        Ok(())
    }
}
