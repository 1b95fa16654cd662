// packages/plugin-stats/src/utils/mod.rs
//! Common utilities: configuration loading and the crate error type

pub mod config;
pub mod errors;

pub use self::config::{LogSettings, ObservabilitySettings, PluginStatsConfig};
pub use errors::{PluginStatsError, Result};
