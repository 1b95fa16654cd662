// packages/plugin-stats/src/interception/manager.rs
//! The host's plugin manager seam
//!
//! Everything that enables or disables plugins goes through
//! [`PluginManager`], so observers can be layered on as decorators instead
//! of rebinding methods on a shared host object.

use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous enable/disable operations exposed by the host
///
/// The output and error types are whatever the host produces; decorators
/// must hand both back untouched.
#[async_trait]
pub trait PluginManager: Send + Sync {
    /// Value produced by a successful operation
    type Output: Send;

    /// Error produced by a failed operation
    type Error: Send;

    /// Enable the plugin with the given id
    async fn enable_plugin(&self, id: &str) -> Result<Self::Output, Self::Error>;

    /// Disable the plugin with the given id
    async fn disable_plugin(&self, id: &str) -> Result<Self::Output, Self::Error>;
}

#[async_trait]
impl<M> PluginManager for Arc<M>
where
    M: PluginManager + ?Sized,
{
    type Output = M::Output;
    type Error = M::Error;

    async fn enable_plugin(&self, id: &str) -> Result<Self::Output, Self::Error> {
        (**self).enable_plugin(id).await
    }

    async fn disable_plugin(&self, id: &str) -> Result<Self::Output, Self::Error> {
        (**self).disable_plugin(id).await
    }
}

/// Shared, type-erased plugin manager
pub type SharedManager<O, E> = Arc<dyn PluginManager<Output = O, Error = E>>;

/// Which operation was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginAction {
    Enable,
    Disable,
}

impl PluginAction {
    /// Log message for a completed operation
    pub fn success_message(self, id: &str) -> String {
        match self {
            PluginAction::Enable => format!("Activado: {}", id),
            PluginAction::Disable => format!("Desactivado: {}", id),
        }
    }

    /// Log message for an operation the host rejected
    pub fn failure_message(self, id: &str) -> String {
        match self {
            PluginAction::Enable => format!("Error activando: {}", id),
            PluginAction::Disable => format!("Error desactivando: {}", id),
        }
    }
}

impl std::fmt::Display for PluginAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginAction::Enable => write!(f, "enable"),
            PluginAction::Disable => write!(f, "disable"),
        }
    }
}
