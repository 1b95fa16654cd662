// packages/plugin-stats/src/interception/mod.rs
//! Plugin manager interception layer
//!
//! Observes every enable/disable call made through the host's plugin
//! manager, whoever the caller is:
//!
//! - **Manager**: the async `PluginManager` trait the host implements
//! - **Logging Manager**: decorator that records each call in the event log
//! - **Slot**: host-owned swappable manager plus reversible install/remove
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     │
//!     └─ enable_plugin(id) → ManagerSlot → LoggingPluginManager → host manager
//!                                                │
//!                                                └─ EventLog ("Activado: <id>")
//! ```

pub mod logging_manager;
pub mod manager;
pub mod slot;

#[cfg(test)]
pub(crate) mod stub;

// Re-export commonly used types
pub use logging_manager::LoggingPluginManager;
pub use manager::{PluginAction, PluginManager, SharedManager};
pub use slot::{Interception, ManagerSlot};
