//! The engine that owns the window, event loop and renderer.
//!
//! The simulator only needs four things from it, captured by [`HostEngine`].
//! [`HostGuard`] makes sure an opened host is closed on every exit path.

mod headless;

pub use headless::HeadlessHost;

use tracing::debug;

use crate::entities::EntityRegistry;
use crate::utils::{Result, SimError};

pub trait HostEngine: Send {
    /// Acquire the window/context. Called once, before anything else.
    fn open(&mut self) -> Result<()>;

    /// Process pending host events. Returns `false` once the host has been
    /// closed and the simulation should stop.
    fn pump(&mut self) -> bool;

    fn render(&mut self, registry: &EntityRegistry);

    /// Release everything acquired by `open`.
    fn close(&mut self);
}

/// Owns an opened host and closes it when dropped.
pub struct HostGuard {
    host: Option<Box<dyn HostEngine>>,
}

impl HostGuard {
    /// Open the host held in `slot` and take ownership of it.
    ///
    /// If opening fails the host stays in `slot`, unclosed, so a later
    /// attempt can try again.
    pub fn open(slot: &mut Option<Box<dyn HostEngine>>) -> Result<Self> {
        let host = slot
            .as_mut()
            .ok_or_else(|| SimError::HostError("no host engine available".to_string()))?;
        host.open()?;
        Ok(Self { host: slot.take() })
    }

    pub fn pump(&mut self) -> bool {
        match self.host.as_mut() {
            Some(host) => host.pump(),
            None => false,
        }
    }

    pub fn render(&mut self, registry: &EntityRegistry) {
        if let Some(host) = self.host.as_mut() {
            host.render(registry);
        }
    }

    /// Close the host now. Later calls do nothing.
    pub fn close(&mut self) {
        if let Some(mut host) = self.host.take() {
            debug!("Closing host engine");
            host.close();
        }
    }

    /// Close the host and hand it back so it can be opened again.
    pub fn release(mut self) -> Option<Box<dyn HostEngine>> {
        let mut host = self.host.take()?;
        host.close();
        Some(host)
    }

    pub fn is_open(&self) -> bool {
        self.host.is_some()
    }
}

impl Drop for HostGuard {
    fn drop(&mut self) {
        self.close();
    }
}
