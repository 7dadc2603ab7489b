use std::sync::{Arc, Mutex};
use subsim::entities::EntityRegistry;
use subsim::interfaces::{InterfaceContext, SimInterface};
use subsim::{HostEngine, Result, SimError};

/// Interface that records the simulated time of every refresh
#[derive(Clone, Default)]
pub struct RecordingInterface {
    pub refreshes: Arc<Mutex<Vec<f64>>>,
}

impl RecordingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn times(&self) -> Vec<f64> {
        self.refreshes.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.refreshes.lock().unwrap().len()
    }
}

impl SimInterface for RecordingInterface {
    fn name(&self) -> &str {
        "recorder"
    }

    fn update(&mut self, ctx: &InterfaceContext) {
        self.refreshes.lock().unwrap().push(ctx.sim_time);
    }
}

/// Host whose lifecycle calls can be observed after it has been moved into a simulator
#[derive(Clone, Default)]
pub struct TrackingHost {
    pub fail_open: Arc<Mutex<bool>>,
    pub open_attempts: Arc<Mutex<u32>>,
    pub opens: Arc<Mutex<u32>>,
    pub closes: Arc<Mutex<u32>>,
    pub renders: Arc<Mutex<u32>>,
}

impl TrackingHost {
    pub fn failing() -> Self {
        let host = Self::default();
        host.set_failing(true);
        host
    }

    pub fn set_failing(&self, failing: bool) {
        *self.fail_open.lock().unwrap() = failing;
    }

    pub fn open_attempts(&self) -> u32 {
        *self.open_attempts.lock().unwrap()
    }

    pub fn opens(&self) -> u32 {
        *self.opens.lock().unwrap()
    }

    pub fn closes(&self) -> u32 {
        *self.closes.lock().unwrap()
    }

    pub fn renders(&self) -> u32 {
        *self.renders.lock().unwrap()
    }
}

impl HostEngine for TrackingHost {
    fn open(&mut self) -> Result<()> {
        *self.open_attempts.lock().unwrap() += 1;
        if *self.fail_open.lock().unwrap() {
            return Err(SimError::HostError("display unavailable".to_string()));
        }
        *self.opens.lock().unwrap() += 1;
        Ok(())
    }

    fn pump(&mut self) -> bool {
        true
    }

    fn render(&mut self, _registry: &EntityRegistry) {
        *self.renders.lock().unwrap() += 1;
    }

    fn close(&mut self) {
        *self.closes.lock().unwrap() += 1;
    }
}
