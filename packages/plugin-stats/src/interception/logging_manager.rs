// packages/plugin-stats/src/interception/logging_manager.rs
//! Decorator that records every enable/disable call in the event log
//!
//! The wrapped call is awaited first; the log entry is written only after
//! it settles, and the wrapped result is returned unchanged.

use crate::interception::manager::{PluginAction, PluginManager};
use crate::recording::event_log::EventLog;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Plugin manager decorator feeding an [`EventLog`]
pub struct LoggingPluginManager<M> {
    inner: M,
    log: Arc<EventLog>,
    log_failures: bool,
}

impl<M: PluginManager> LoggingPluginManager<M> {
    /// Wrap `inner`, recording into `log`
    pub fn new(inner: M, log: Arc<EventLog>) -> Self {
        Self {
            inner,
            log,
            log_failures: false,
        }
    }

    /// Record an `Error ...` entry when the wrapped call is rejected (off by default)
    pub fn with_failure_logging(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }

    fn observe<T, E>(&self, action: PluginAction, id: &str, result: &Result<T, E>) {
        match result {
            Ok(_) => {
                debug!("Plugin {} succeeded: {}", action, id);
                self.log.record(action.success_message(id));
            }
            Err(_) => {
                warn!("Plugin {} failed: {}", action, id);
                metrics::counter!("plugin_stats_host_failures_total").increment(1);
                if self.log_failures {
                    self.log.record(action.failure_message(id));
                }
            }
        }
    }
}

#[async_trait]
impl<M: PluginManager> PluginManager for LoggingPluginManager<M> {
    type Output = M::Output;
    type Error = M::Error;

    async fn enable_plugin(&self, id: &str) -> Result<Self::Output, Self::Error> {
        let result = self.inner.enable_plugin(id).await;
        self.observe(PluginAction::Enable, id, &result);
        result
    }

    async fn disable_plugin(&self, id: &str) -> Result<Self::Output, Self::Error> {
        let result = self.inner.disable_plugin(id).await;
        self.observe(PluginAction::Disable, id, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interception::stub::{SentinelError, StubManager, SENTINEL};

    fn messages(log: &EventLog) -> Vec<String> {
        log.entries().into_iter().map(|e| e.message).collect()
    }

    #[tokio::test]
    async fn test_enable_returns_original_result() {
        let log = Arc::new(EventLog::new(50));
        let stub = Arc::new(StubManager::new());
        let manager = LoggingPluginManager::new(Arc::clone(&stub), Arc::clone(&log));

        let result = manager.enable_plugin("calendar").await;
        assert_eq!(result, Ok(SENTINEL));
        assert_eq!(messages(&log), vec!["Activado: calendar"]);
        assert_eq!(stub.enable_count(), 1);
    }

    #[tokio::test]
    async fn test_disable_records_entry() {
        let log = Arc::new(EventLog::new(50));
        let stub = Arc::new(StubManager::new());
        let manager = LoggingPluginManager::new(Arc::clone(&stub), Arc::clone(&log));

        manager.disable_plugin("calendar").await.unwrap();
        assert_eq!(messages(&log), vec!["Desactivado: calendar"]);
        assert_eq!(stub.disable_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_propagates_without_entry() {
        let log = Arc::new(EventLog::new(50));
        let stub = Arc::new(StubManager::failing_disable("disk unavailable"));
        let manager = LoggingPluginManager::new(Arc::clone(&stub), Arc::clone(&log));

        let result = manager.disable_plugin("sample-plugin").await;
        assert_eq!(result, Err(SentinelError("disk unavailable")));
        assert!(log.is_empty());
        assert_eq!(stub.disable_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_logged_when_enabled() {
        let log = Arc::new(EventLog::new(50));
        let manager = LoggingPluginManager::new(
            StubManager::failing_disable("disk unavailable"),
            Arc::clone(&log),
        )
        .with_failure_logging(true);

        let result = manager.disable_plugin("sample-plugin").await;
        assert_eq!(result, Err(SentinelError("disk unavailable")));
        assert_eq!(messages(&log), vec!["Error desactivando: sample-plugin"]);
    }

    #[tokio::test]
    async fn test_enable_failure_message() {
        let log = Arc::new(EventLog::new(50));
        let manager =
            LoggingPluginManager::new(StubManager::failing_enable("bad manifest"), Arc::clone(&log))
                .with_failure_logging(true);

        assert!(manager.enable_plugin("kanban").await.is_err());
        assert_eq!(messages(&log), vec!["Error activando: kanban"]);
    }

    #[tokio::test]
    async fn test_concurrent_calls_each_recorded() {
        let log = Arc::new(EventLog::new(50));
        let manager = LoggingPluginManager::new(StubManager::new(), Arc::clone(&log));

        let ids: Vec<String> = (0..20).map(|i| format!("plugin-{}", i)).collect();
        let calls = ids.iter().map(|id| manager.enable_plugin(id));
        let results = futures::future::join_all(calls).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(log.len(), 20);
        for id in &ids {
            assert!(messages(&log).contains(&format!("Activado: {}", id)));
        }
    }
}
