// packages/plugin-stats/src/utils/config.rs
//! Layered configuration
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. Optional config file (`plugin-stats.toml` unless a path is given)
//! 3. `PLUGIN_STATS__*` environment variables (e.g. `PLUGIN_STATS__LOG__CAPACITY=100`)

use crate::recording::event_log::{DEFAULT_CAPACITY, DEFAULT_RECENT};
use crate::utils::errors::{PluginStatsError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "plugin-stats";

/// Environment prefix for overrides
pub const ENV_PREFIX: &str = "PLUGIN_STATS";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginStatsConfig {
    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub observability: ObservabilitySettings,
}

/// Event log settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Maximum number of retained entries
    pub capacity: usize,

    /// Number of entries shown by the display layer
    pub recent: usize,

    /// Also record an entry when the host rejects enable/disable
    pub log_failures: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            recent: DEFAULT_RECENT,
            log_failures: false,
        }
    }
}

/// Tracing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilitySettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl PluginStatsConfig {
    /// Load from the default file name (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::build(File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load from an explicit file path, which must exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: PluginStatsConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the event log cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.log.capacity == 0 {
            return Err(PluginStatsError::Config(
                "log.capacity must be greater than zero".to_string(),
            ));
        }
        if self.log.recent == 0 {
            return Err(PluginStatsError::Config(
                "log.recent must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
