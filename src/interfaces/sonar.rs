use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{InterfaceContext, SensorReading, SimInterface};
use crate::utils::{
    SONAR_DEFAULT_GAIN, SONAR_DEFAULT_NUM_BINS, SONAR_DEFAULT_RANGE, SONAR_MAX_RANGE,
    SONAR_SCAN_DURATION,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SonarConfig {
    /// Metres. The scan image is `2 * range` pixels square.
    pub range: u32,
    pub num_bins: u32,
    pub gain: f64,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            range: SONAR_DEFAULT_RANGE,
            num_bins: SONAR_DEFAULT_NUM_BINS,
            gain: SONAR_DEFAULT_GAIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SonarCommand {
    /// Sweep between two bearings, in radians. Restarts any scan in progress.
    Scan { start_angle: f64, end_angle: f64 },
    /// Replace the configuration. Answered with the configuration now in force.
    SetConfig(SonarConfig),
    GetConfig,
}

/// A finished scan: an 8-bit greyscale image centred on the sonar head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonarScan {
    pub time: f64,
    pub range: u32,
    pub num_bins: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub centre_x: u32,
    pub centre_y: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u8,
    /// Row-major, `width * height` bytes.
    pub image: Vec<u8>,
}

impl SonarScan {
    fn synthesise(time: f64, config: &SonarConfig, start_angle: f64, end_angle: f64) -> Self {
        let dim = config.range * 2;
        let image = (0..dim)
            .flat_map(|y| (0..dim).map(move |x| ((x + y) % 256) as u8))
            .collect();
        Self {
            time,
            range: config.range,
            num_bins: config.num_bins,
            start_angle,
            end_angle,
            centre_x: dim / 2,
            centre_y: dim / 2,
            width: dim,
            height: dim,
            bits_per_pixel: 8,
            image,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveScan {
    started: f64,
    start_angle: f64,
    end_angle: f64,
}

/// Scanning sonar with a synthetic image.
///
/// Commands are drained on each refresh. A scan completes once more than
/// [`SONAR_SCAN_DURATION`] seconds of simulated time have passed since the
/// refresh that received it, and is published exactly once.
pub struct SonarInterface {
    config: SonarConfig,
    active: Option<ActiveScan>,
    sender: Sender<SensorReading>,
    command_tx: Sender<SonarCommand>,
    command_rx: Receiver<SonarCommand>,
}

impl SonarInterface {
    pub fn new(sender: Sender<SensorReading>) -> Self {
        let (command_tx, command_rx) = crossbeam_channel::unbounded();
        Self {
            config: SonarConfig::default(),
            active: None,
            sender,
            command_tx,
            command_rx,
        }
    }

    pub fn command_sender(&self) -> Sender<SonarCommand> {
        self.command_tx.clone()
    }

    pub fn config(&self) -> SonarConfig {
        self.config
    }

    pub fn is_scanning(&self) -> bool {
        self.active.is_some()
    }

    fn apply(&mut self, command: SonarCommand, now: f64) {
        match command {
            SonarCommand::Scan {
                start_angle,
                end_angle,
            } => {
                debug!(start_angle, end_angle, "Sonar scan started");
                self.active = Some(ActiveScan {
                    started: now,
                    start_angle,
                    end_angle,
                });
            }
            SonarCommand::SetConfig(config) => {
                if config.range > SONAR_MAX_RANGE {
                    warn!(
                        "Ignoring sonar range {}, limit is {}",
                        config.range, SONAR_MAX_RANGE
                    );
                } else {
                    self.config = config;
                }
                self.publish_config(now);
            }
            SonarCommand::GetConfig => self.publish_config(now),
        }
    }

    fn publish_config(&self, time: f64) {
        let _ = self.sender.send(SensorReading::SonarConfig {
            time,
            config: self.config,
        });
    }
}

impl SimInterface for SonarInterface {
    fn name(&self) -> &str {
        "sonar"
    }

    fn update(&mut self, ctx: &InterfaceContext) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.apply(command, ctx.sim_time);
        }

        let Some(scan) = self.active else {
            return;
        };
        if ctx.sim_time - scan.started > SONAR_SCAN_DURATION {
            self.active = None;
            let result =
                SonarScan::synthesise(ctx.sim_time, &self.config, scan.start_angle, scan.end_angle);
            let _ = self.sender.send(SensorReading::SonarScan(result));
        }
    }
}
