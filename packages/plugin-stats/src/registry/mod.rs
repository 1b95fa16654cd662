// packages/plugin-stats/src/registry/mod.rs
//! Installed plugin registry and summaries
//!
//! - **Manifest**: plugin metadata and the in-memory registry
//! - **Summary**: enabled/disabled counts and the stats report

pub mod manifest;
pub mod summary;

// Re-export commonly used types
pub use manifest::{PluginManifest, PluginRegistry};
pub use summary::{status_line, StatsReport, StatsSummary};
