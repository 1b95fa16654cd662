// packages/plugin-stats/src/utils/errors.rs
//! Error types for the plugin stats crate

use thiserror::Error;

/// Errors raised by the plugin stats components
#[derive(Debug, Error)]
pub enum PluginStatsError {
    /// The id is not present in the manifest registry
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Log export failed
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// Observability setup failed
    #[error("Observability error: {0}")]
    Observability(String),
}

impl From<config::ConfigError> for PluginStatsError {
    fn from(err: config::ConfigError) -> Self {
        PluginStatsError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PluginStatsError {
    fn from(err: serde_json::Error) -> Self {
        PluginStatsError::ExportFailed(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PluginStatsError>;
