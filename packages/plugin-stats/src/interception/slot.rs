// packages/plugin-stats/src/interception/slot.rs
//! Host-owned manager slot and reversible interception
//!
//! The host keeps its active plugin manager in a [`ManagerSlot`]; every
//! caller goes through the slot. [`Interception`] swaps a logging decorator
//! into the slot on install and puts the captured original back on remove.

use crate::interception::logging_manager::LoggingPluginManager;
use crate::interception::manager::{PluginManager, SharedManager};
use crate::recording::event_log::EventLog;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Swappable holder for the host's active plugin manager
pub struct ManagerSlot<O, E> {
    current: RwLock<SharedManager<O, E>>,
}

impl<O, E> ManagerSlot<O, E>
where
    O: Send + 'static,
    E: Send + 'static,
{
    /// Create a slot around an already shared manager
    pub fn new(manager: SharedManager<O, E>) -> Self {
        Self {
            current: RwLock::new(manager),
        }
    }

    /// The manager currently installed
    pub fn current(&self) -> SharedManager<O, E> {
        Arc::clone(&*self.current.read())
    }

    /// Install `manager`, returning the one it replaced
    pub fn replace(&self, manager: SharedManager<O, E>) -> SharedManager<O, E> {
        std::mem::replace(&mut *self.current.write(), manager)
    }

    /// Replace the current manager with `wrap(current)`, returning the
    /// manager that was wrapped
    ///
    /// Read and swap happen under a single write lock, so a concurrent
    /// `replace` cannot slip in between and be lost.
    pub fn wrap<F>(&self, wrap: F) -> SharedManager<O, E>
    where
        F: FnOnce(SharedManager<O, E>) -> SharedManager<O, E>,
    {
        let mut current = self.current.write();
        let original = Arc::clone(&*current);
        *current = wrap(Arc::clone(&original));
        original
    }

    /// Whether `manager` is the one currently installed
    pub fn holds(&self, manager: &SharedManager<O, E>) -> bool {
        Arc::ptr_eq(&*self.current.read(), manager)
    }
}

// The read guard is released before awaiting, so a concurrent
// install/remove never blocks on an in-flight call.
#[async_trait]
impl<O, E> PluginManager for ManagerSlot<O, E>
where
    O: Send + 'static,
    E: Send + 'static,
{
    type Output = O;
    type Error = E;

    async fn enable_plugin(&self, id: &str) -> Result<O, E> {
        let manager = self.current();
        manager.enable_plugin(id).await
    }

    async fn disable_plugin(&self, id: &str) -> Result<O, E> {
        let manager = self.current();
        manager.disable_plugin(id).await
    }
}

/// Install/remove bookkeeping for the logging decorator
///
/// Holds the manager that was active before installation. `None` means
/// interception is not active.
pub struct Interception<O, E> {
    log: Arc<EventLog>,
    log_failures: bool,
    original: Option<SharedManager<O, E>>,
}

impl<O, E> Interception<O, E>
where
    O: Send + 'static,
    E: Send + 'static,
{
    pub fn new(log: Arc<EventLog>) -> Self {
        Self {
            log,
            log_failures: false,
            original: None,
        }
    }

    /// Record rejected calls as `Error ...` entries (off by default)
    pub fn with_failure_logging(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }

    pub fn is_installed(&self) -> bool {
        self.original.is_some()
    }

    /// Wrap the manager held by `target` with the logging decorator
    ///
    /// Returns `true` if the decorator was installed by this call. A missing
    /// target or an interception that is already active is a no-op.
    pub fn install(&mut self, target: Option<&ManagerSlot<O, E>>) -> bool {
        let Some(slot) = target else {
            warn!("Plugin manager unavailable, event interception not installed");
            return false;
        };

        if self.original.is_some() {
            debug!("Event interception already installed");
            return false;
        }

        let log = Arc::clone(&self.log);
        let log_failures = self.log_failures;
        let original = slot.wrap(|inner| {
            Arc::new(LoggingPluginManager::new(inner, log).with_failure_logging(log_failures))
        });
        self.original = Some(original);

        info!("Event interception installed");
        true
    }

    /// Put the captured original back into `target`
    ///
    /// Returns `true` if a manager was restored. Calling this without a
    /// prior install, or twice in a row, leaves the slot untouched.
    pub fn remove(&mut self, target: Option<&ManagerSlot<O, E>>) -> bool {
        let Some(slot) = target else {
            return false;
        };

        let Some(original) = self.original.take() else {
            debug!("Event interception not installed, nothing to restore");
            return false;
        };

        slot.replace(original);
        info!("Event interception removed");
        true
    }
}
