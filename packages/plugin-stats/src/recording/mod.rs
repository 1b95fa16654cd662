// packages/plugin-stats/src/recording/mod.rs
//! Event recording
//!
//! This module keeps the rolling history of plugin enable/disable events:
//!
//! - **Bounded**: fixed-capacity FIFO ring
//! - **Event Log**: thread-safe log of timestamped entries (default 50)
//! - **Exporter**: display lines and JSON output
//!
//! # Architecture
//!
//! ```text
//! LoggingPluginManager → EventLog::record() → BoundedLog (evicts oldest)
//!                                                   ↓
//!                                   recent(10) → Exporter → stats panel
//! ```

pub mod bounded;
pub mod event_log;
pub mod exporter;

// Re-export commonly used types
pub use bounded::BoundedLog;
pub use event_log::{Clock, EventLog, LogEntry, LogStats, DEFAULT_CAPACITY, DEFAULT_RECENT};
pub use exporter::{ExportFormat, Exporter};
