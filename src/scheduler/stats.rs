use tracing::debug;

use crate::time::SimClock;
use crate::utils::DEFAULT_STATS_INTERVAL;

/// Frame and step rate counters, sampled over a fixed wall-clock window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window_us: i64,
    window_start: Option<SimClock>,
    frames_in_window: u32,
    steps_in_window: u32,
    frames_per_second: u32,
    steps_per_second: u32,
    total_frames: u64,
    total_steps: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_INTERVAL)
    }
}

impl FrameStats {
    pub fn new(window_seconds: f64) -> Self {
        Self {
            window_us: ((window_seconds * 1e6).round() as i64).max(1),
            window_start: None,
            frames_in_window: 0,
            steps_in_window: 0,
            frames_per_second: 0,
            steps_per_second: 0,
            total_frames: 0,
            total_steps: 0,
        }
    }

    /// Count one frame that ran `steps` simulation steps.
    pub fn record(&mut self, now: SimClock, steps: u32) {
        self.total_frames += 1;
        self.total_steps += steps as u64;

        // The first frame only opens the window.
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return;
        };
        self.frames_in_window += 1;
        self.steps_in_window += steps;

        let elapsed_us = SimClock::diff(now, start).to_micros();
        if elapsed_us < self.window_us {
            return;
        }

        let seconds = elapsed_us as f64 / 1e6;
        let fps = (self.frames_in_window as f64 / seconds).round() as u32;
        let sps = (self.steps_in_window as f64 / seconds).round() as u32;
        if fps != self.frames_per_second {
            debug!("FPS: {} (steps/s: {})", fps, sps);
        }
        self.frames_per_second = fps;
        self.steps_per_second = sps;
        self.frames_in_window = 0;
        self.steps_in_window = 0;
        self.window_start = Some(now);
    }

    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    pub fn steps_per_second(&self) -> u32 {
        self.steps_per_second
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
