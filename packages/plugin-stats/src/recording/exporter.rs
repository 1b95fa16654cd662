// packages/plugin-stats/src/recording/exporter.rs
//! Export log entries for display or analysis
//!
//! Supports:
//! - Text (one `time: message` line per entry, as the stats panel shows them)
//! - JSON (pretty-printed array of entries)

use crate::recording::event_log::LogEntry;
use crate::utils::errors::{PluginStatsError, Result};
use tracing::debug;

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain display lines
    Text,

    /// JSON format
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = PluginStatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => Err(PluginStatsError::ExportFailed(format!(
                "Unsupported export format: {}",
                other
            ))),
        }
    }
}

/// Exporter for log entries
pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Export entries to string
    pub fn export(&self, entries: &[LogEntry]) -> Result<String> {
        debug!("Exporting {} entries to {:?} format", entries.len(), self.format);

        match self.format {
            ExportFormat::Text => Ok(Self::export_text(entries)),
            ExportFormat::Json => Self::export_json(entries),
        }
    }

    /// Render a single entry as a display line
    pub fn display_line(entry: &LogEntry) -> String {
        format!("{}: {}", entry.timestamp, entry.message)
    }

    fn export_text(entries: &[LogEntry]) -> String {
        entries
            .iter()
            .map(Self::display_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn export_json(entries: &[LogEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}
