// packages/plugin-stats/src/lib.rs
//! Plugin Stats Library
//!
//! Observes a note-taking host's plugin manager and keeps a rolling log of
//! plugin enable/disable events, alongside installed/enabled counts for the
//! stats panel.
//!
//! # Architecture
//!
//! The crate is structured into several key modules:
//!
//! - **interception**: `PluginManager` seam, logging decorator, swappable slot
//! - **recording**: bounded event log and exporters
//! - **registry**: plugin manifests, enabled set, summaries
//! - **plugin**: load/unload lifecycle tying the pieces together
//! - **observability**: tracing and metrics setup
//! - **utils**: configuration and errors

// Public module exports
pub mod interception;
pub mod observability;
pub mod plugin;
pub mod recording;
pub mod registry;
pub mod utils;

// Re-export commonly used types
pub use interception::{Interception, LoggingPluginManager, ManagerSlot, PluginManager};
pub use plugin::PluginStats;
pub use recording::{EventLog, LogEntry};
pub use registry::{PluginManifest, PluginRegistry, StatsReport, StatsSummary};
pub use utils::config::PluginStatsConfig;
pub use utils::errors::{PluginStatsError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Build information
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_hash: GIT_HASH,
            build_timestamp: env!("BUILD_TIMESTAMP"),
            rustc_version: env!("RUSTC_VERSION"),
        }
    }
}
