// packages/plugin-stats/src/registry/summary.rs
//! Enabled/disabled counts and the plain-text stats report

use crate::recording::event_log::LogEntry;
use crate::recording::exporter::Exporter;
use crate::registry::manifest::{PluginManifest, PluginRegistry};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Plugin counts shown by the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSummary {
    pub installed: usize,
    pub enabled: usize,
    pub disabled: usize,
}

impl StatsSummary {
    /// Count installed ids against the enabled set
    ///
    /// Enabled ids without a manifest are ignored, so
    /// `enabled + disabled == installed` always holds.
    pub fn from_parts<'a>(
        installed: impl IntoIterator<Item = &'a String>,
        enabled: &BTreeSet<String>,
    ) -> Self {
        let mut summary = StatsSummary::default();
        for id in installed {
            summary.installed += 1;
            if enabled.contains(id) {
                summary.enabled += 1;
            }
        }
        summary.disabled = summary.installed - summary.enabled;
        summary
    }

    /// Share of installed plugins that are enabled, in `[0, 1]`
    ///
    /// An empty registry yields 0.
    pub fn enabled_ratio(&self) -> f64 {
        if self.installed == 0 {
            0.0
        } else {
            self.enabled as f64 / self.installed as f64
        }
    }
}

/// `"<name> (<version>) - Activo|Inactivo"`
pub fn status_line(manifest: &PluginManifest, active: bool) -> String {
    format!(
        "{} ({}) - {}",
        manifest.name,
        manifest.version,
        if active { "Activo" } else { "Inactivo" }
    )
}

/// Everything the stats panel displays, as data
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub summary: StatsSummary,
    pub plugins: Vec<String>,
    pub recent_events: Vec<LogEntry>,
}

impl StatsReport {
    /// Snapshot the registry together with recent log entries
    pub fn build(registry: &PluginRegistry, recent_events: Vec<LogEntry>) -> Self {
        let plugins = registry
            .manifests()
            .iter()
            .map(|m| status_line(m, registry.is_enabled(&m.id)))
            .collect();

        Self {
            summary: registry.summary(),
            plugins,
            recent_events,
        }
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estadísticas de Plugins")?;
        writeln!(f, "Plugins instalados: {}", self.summary.installed)?;
        writeln!(f, "Plugins activos: {}", self.summary.enabled)?;
        for line in &self.plugins {
            writeln!(f, "  - {}", line)?;
        }
        writeln!(f, "Registro de eventos")?;
        for entry in &self.recent_events {
            writeln!(f, "  - {}", Exporter::display_line(entry))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interception::manager::PluginManager;

    #[test]
    fn test_summary_counts() {
        let installed: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let enabled: BTreeSet<String> = ["a".to_string(), "ghost".to_string()].into();

        let summary = StatsSummary::from_parts(&installed, &enabled);
        assert_eq!(
            summary,
            StatsSummary {
                installed: 3,
                enabled: 1,
                disabled: 2
            }
        );
        assert!((summary.enabled_ratio() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_ratio() {
        assert_eq!(StatsSummary::default().enabled_ratio(), 0.0);
    }

    #[test]
    fn test_status_line() {
        let manifest = PluginManifest::new("dataview", "Dataview", "0.5.64");
        assert_eq!(status_line(&manifest, true), "Dataview (0.5.64) - Activo");
        assert_eq!(status_line(&manifest, false), "Dataview (0.5.64) - Inactivo");
    }

    #[tokio::test]
    async fn test_report() {
        let registry = PluginRegistry::with_manifests(vec![
            PluginManifest::new("dataview", "Dataview", "0.5.64"),
            PluginManifest::new("calendar", "Calendar", "1.5.10"),
        ]);
        registry.enable_plugin("calendar").await.unwrap();

        let events = vec![LogEntry {
            timestamp: "01/02/2024, 10:00:00".to_string(),
            message: "Activado: calendar".to_string(),
        }];
        let report = StatsReport::build(&registry, events);

        assert_eq!(report.summary.enabled, 1);
        assert_eq!(
            report.plugins,
            vec!["Calendar (1.5.10) - Activo", "Dataview (0.5.64) - Inactivo"]
        );

        let text = report.to_string();
        assert!(text.contains("Plugins instalados: 2"));
        assert!(text.contains("Plugins activos: 1"));
        assert!(text.contains("01/02/2024, 10:00:00: Activado: calendar"));
    }
}
