// packages/plugin-stats/src/registry/manifest.rs
//! Installed plugin manifests and the enabled set
//!
//! [`PluginRegistry`] is an in-memory stand-in for the host's plugin
//! manager: it knows which plugins are installed and which are enabled,
//! and it implements [`PluginManager`] so it can sit behind a
//! [`ManagerSlot`](crate::interception::ManagerSlot).

use crate::interception::manager::PluginManager;
use crate::registry::summary::StatsSummary;
use crate::utils::errors::{PluginStatsError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Metadata describing an installed plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl PluginManifest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

/// In-memory plugin registry
#[derive(Debug, Default)]
pub struct PluginRegistry {
    manifests: RwLock<BTreeMap<String, PluginManifest>>,
    enabled: RwLock<BTreeSet<String>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry with the given manifests, all disabled
    pub fn with_manifests(manifests: impl IntoIterator<Item = PluginManifest>) -> Self {
        let registry = Self::new();
        for manifest in manifests {
            registry.install(manifest);
        }
        registry
    }

    /// Add or replace a manifest
    pub fn install(&self, manifest: PluginManifest) {
        debug!("Registering plugin {} ({})", manifest.id, manifest.version);
        self.manifests.write().insert(manifest.id.clone(), manifest);
    }

    /// Remove a manifest, disabling it first
    pub fn uninstall(&self, id: &str) -> Option<PluginManifest> {
        self.enabled.write().remove(id);
        self.manifests.write().remove(id)
    }

    /// All manifests, ordered by id
    pub fn manifests(&self) -> Vec<PluginManifest> {
        self.manifests.read().values().cloned().collect()
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.read().contains(id)
    }

    /// Installed/enabled/disabled counts
    pub fn summary(&self) -> StatsSummary {
        let manifests = self.manifests.read();
        let enabled = self.enabled.read();
        StatsSummary::from_parts(manifests.keys(), &enabled)
    }

    fn ensure_installed(&self, id: &str) -> Result<()> {
        if self.manifests.read().contains_key(id) {
            Ok(())
        } else {
            Err(PluginStatsError::UnknownPlugin(id.to_string()))
        }
    }
}

/// `Ok(true)` when the call changed the plugin's state
#[async_trait]
impl PluginManager for PluginRegistry {
    type Output = bool;
    type Error = PluginStatsError;

    async fn enable_plugin(&self, id: &str) -> Result<bool> {
        self.ensure_installed(id)?;
        // Stand-in for the host loading plugin code
        tokio::task::yield_now().await;
        Ok(self.enabled.write().insert(id.to_string()))
    }

    async fn disable_plugin(&self, id: &str) -> Result<bool> {
        self.ensure_installed(id)?;
        tokio::task::yield_now().await;
        Ok(self.enabled.write().remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> PluginRegistry {
        PluginRegistry::with_manifests(vec![
            PluginManifest::new("dataview", "Dataview", "0.5.64"),
            PluginManifest::new("calendar", "Calendar", "1.5.10"),
            PluginManifest::new("kanban", "Kanban", "1.5.3"),
        ])
    }

    #[test]
    fn test_manifests_sorted_by_id() {
        let registry = sample_registry();
        let ids: Vec<String> = registry.manifests().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["calendar", "dataview", "kanban"]);
    }

    #[tokio::test]
    async fn test_enable_disable() {
        let registry = sample_registry();

        assert!(registry.enable_plugin("dataview").await.unwrap());
        assert!(!registry.enable_plugin("dataview").await.unwrap());
        assert!(registry.is_enabled("dataview"));

        assert!(registry.disable_plugin("dataview").await.unwrap());
        assert!(!registry.disable_plugin("dataview").await.unwrap());
        assert!(!registry.is_enabled("dataview"));
    }

    #[tokio::test]
    async fn test_unknown_plugin_rejected() {
        let registry = sample_registry();
        let result = registry.enable_plugin("missing").await;
        assert!(matches!(result, Err(PluginStatsError::UnknownPlugin(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_uninstall_clears_enabled() {
        let registry = sample_registry();
        registry.enable_plugin("kanban").await.unwrap();

        let removed = registry.uninstall("kanban");
        assert_eq!(removed.map(|m| m.name), Some("Kanban".to_string()));
        assert!(!registry.is_enabled("kanban"));
        assert_eq!(registry.summary().installed, 2);
    }
}
