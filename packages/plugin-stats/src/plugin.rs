// packages/plugin-stats/src/plugin.rs
//! Plugin lifecycle
//!
//! Owns the event log for the whole plugin lifetime:
//! - `load` installs interception on the host's manager slot
//! - `unload` restores the slot exactly as it was found

use crate::interception::slot::{Interception, ManagerSlot};
use crate::recording::event_log::{EventLog, LogEntry};
use crate::registry::manifest::PluginRegistry;
use crate::registry::summary::StatsReport;
use crate::utils::config::PluginStatsConfig;
use std::sync::Arc;
use tracing::info;

/// The plugin stats extension
pub struct PluginStats<O, E> {
    config: PluginStatsConfig,
    log: Arc<EventLog>,
    interception: Interception<O, E>,
}

impl<O, E> PluginStats<O, E>
where
    O: Send + 'static,
    E: Send + 'static,
{
    pub fn new(config: PluginStatsConfig) -> Self {
        let log = Arc::new(EventLog::new(config.log.capacity));
        let interception =
            Interception::new(Arc::clone(&log)).with_failure_logging(config.log.log_failures);

        Self {
            config,
            log,
            interception,
        }
    }

    /// Start observing the host's manager, if one is available
    pub fn load(&mut self, host: Option<&ManagerSlot<O, E>>) {
        info!("Loading plugin stats v{}", crate::VERSION);
        self.interception.install(host);
    }

    /// Stop observing and hand the host its original manager back
    pub fn unload(&mut self, host: Option<&ManagerSlot<O, E>>) {
        self.interception.remove(host);
        info!("Plugin stats unloaded");
    }

    pub fn is_intercepting(&self) -> bool {
        self.interception.is_installed()
    }

    /// Append a message to the event log
    pub fn record(&self, message: impl Into<String>) {
        self.log.record(message);
    }

    /// Entries the stats panel shows (`log.recent`, oldest first)
    pub fn recent_events(&self) -> Vec<LogEntry> {
        self.log.recent(self.config.log.recent)
    }

    pub fn event_log(&self) -> &Arc<EventLog> {
        &self.log
    }

    pub fn config(&self) -> &PluginStatsConfig {
        &self.config
    }

    /// Counts, plugin status lines and recent events
    pub fn report(&self, registry: &PluginRegistry) -> StatsReport {
        StatsReport::build(registry, self.recent_events())
    }
}
