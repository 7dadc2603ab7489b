use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, trace};

use super::HostEngine;
use crate::entities::EntityRegistry;
use crate::utils::{Result, SimError};

/// A host with no window. Useful for servers, CI and tests.
///
/// It stops when the frame limit is reached or when the stop handle is
/// tripped, and can optionally pace frames to a target rate.
#[derive(Debug)]
pub struct HeadlessHost {
    frame_limit: Option<u64>,
    frame_period: Option<Duration>,
    frames: u64,
    last_frame: Option<Instant>,
    stop: Arc<AtomicBool>,
    opened: bool,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            frame_limit: None,
            frame_period: None,
            frames: 0,
            last_frame: None,
            stop: Arc::new(AtomicBool::new(false)),
            opened: false,
        }
    }

    /// Close after `frames` pumps.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Sleep in `pump` so frames are at least `1 / rate_hz` apart.
    pub fn with_frame_rate(mut self, rate_hz: f64) -> Self {
        if rate_hz.is_finite() && rate_hz > 0.0 {
            self.frame_period = Some(Duration::from_secs_f64(1.0 / rate_hz));
        }
        self
    }

    /// Handle another thread can use to ask the host to close.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn pace(&mut self) {
        if let (Some(period), Some(last)) = (self.frame_period, self.last_frame) {
            let since = last.elapsed();
            if since < period {
                thread::sleep(period - since);
            }
        }
        self.last_frame = Some(Instant::now());
    }
}

impl HostEngine for HeadlessHost {
    fn open(&mut self) -> Result<()> {
        if self.opened {
            return Err(SimError::HostError("headless host already open".into()));
        }
        info!("Opening headless host");
        self.opened = true;
        self.frames = 0;
        Ok(())
    }

    fn pump(&mut self) -> bool {
        if !self.opened || self.stop.load(Ordering::Relaxed) {
            return false;
        }
        if let Some(limit) = self.frame_limit {
            if self.frames >= limit {
                info!("Headless host reached its frame limit ({})", limit);
                return false;
            }
        }
        self.pace();
        self.frames += 1;
        true
    }

    fn render(&mut self, registry: &EntityRegistry) {
        trace!("frame {}: {} entities", self.frames, registry.len());
    }

    fn close(&mut self) {
        self.opened = false;
    }
}
