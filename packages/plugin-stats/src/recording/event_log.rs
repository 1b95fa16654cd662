// packages/plugin-stats/src/recording/event_log.rs
//! Bounded log of plugin enable/disable events
//!
//! Entries are kept in insertion order. Once the log holds `capacity`
//! entries, every new entry evicts the oldest one.

use crate::recording::bounded::BoundedLog;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Maximum number of entries kept by default
pub const DEFAULT_CAPACITY: usize = 50;

/// Number of entries the stats panel shows
pub const DEFAULT_RECENT: usize = 10;

/// Timestamp layout used for entries (day/month/year, 24h clock)
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// A single recorded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local creation time, already formatted for display
    pub timestamp: String,

    /// Human-readable description
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the given time
    pub fn at(time: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            message: message.into(),
        }
    }
}

/// Source of entry timestamps
pub type Clock = fn() -> DateTime<Local>;

/// Thread-safe bounded event log
#[derive(Debug)]
pub struct EventLog {
    entries: Mutex<BoundedLog<LogEntry>>,

    /// Read while the entries lock is held, so insertion order and
    /// timestamp order agree
    clock: Clock,

    /// Total entries recorded
    recorded_count: AtomicU64,

    /// Entries evicted to respect capacity
    evicted_count: AtomicU64,
}

impl EventLog {
    /// Create a log holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, Local::now)
    }

    /// Create a log stamping entries with `clock`
    pub fn with_clock(capacity: usize, clock: Clock) -> Self {
        Self {
            entries: Mutex::new(BoundedLog::new(capacity)),
            clock,
            recorded_count: AtomicU64::new(0),
            evicted_count: AtomicU64::new(0),
        }
    }

    /// Append a message stamped with the current time
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        trace!("Recording event: {}", message);

        let evicted = {
            let mut entries = self.entries.lock();
            entries.push(LogEntry::at((self.clock)(), message))
        };

        self.recorded_count.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("plugin_stats_events_recorded_total").increment(1);

        if let Some(oldest) = evicted {
            self.evicted_count.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("plugin_stats_events_evicted_total").increment(1);
            trace!("Evicted oldest event: {}", oldest.message);
        }
    }

    /// The most recent `n` entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        self.entries.lock().last(n).cloned().collect()
    }

    /// Snapshot of every retained entry, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().capacity()
    }

    /// Drop every retained entry; counters are kept
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Get log statistics
    pub fn stats(&self) -> LogStats {
        let entries = self.entries.lock();
        LogStats {
            recorded_count: self.recorded_count.load(Ordering::Relaxed),
            evicted_count: self.evicted_count.load(Ordering::Relaxed),
            current_size: entries.len(),
            capacity: entries.capacity(),
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Log statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStats {
    /// Total entries recorded
    pub recorded_count: u64,

    /// Total entries evicted
    pub evicted_count: u64,

    /// Entries currently retained
    pub current_size: usize,

    /// Log capacity
    pub capacity: usize,
}

impl LogStats {
    /// Calculate fill percentage
    pub fn fill_percentage(&self) -> f64 {
        (self.current_size as f64 / self.capacity as f64) * 100.0
    }
}
