// packages/plugin-stats/src/main.rs
//! Plugin Stats demo host
//!
//! Runs an in-memory host with a few installed plugins, loads the stats
//! extension, toggles plugins through the host's manager and prints the
//! stats report.
//!
//! Usage: `plugin-stats [config-file] [text|json]`

use anyhow::Result;
use plugin_stats::observability::{init_metrics, init_tracing};
use plugin_stats::recording::{ExportFormat, Exporter};
use plugin_stats::{
    BuildInfo, ManagerSlot, PluginManager, PluginManifest, PluginRegistry, PluginStats,
    PluginStatsConfig, PluginStatsError,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    // Load configuration
    let config = match args.next() {
        Some(path) => PluginStatsConfig::load_from(path)?,
        None => PluginStatsConfig::load()?,
    };
    let format: ExportFormat = match args.next() {
        Some(format) => format.parse()?,
        None => ExportFormat::Text,
    };

    init_tracing(&config.observability)?;
    let metrics = init_metrics()?;

    let build = BuildInfo::current();
    info!(
        "Starting Plugin Stats v{} ({}, built {} with {})",
        build.version, build.git_hash, build.build_timestamp, build.rustc_version
    );
    debug!("Configuration loaded: {:?}", config);

    let registry = Arc::new(PluginRegistry::with_manifests(vec![
        PluginManifest::new("dataview", "Dataview", "0.5.64"),
        PluginManifest::new("calendar", "Calendar", "1.5.10"),
        PluginManifest::new("obsidian-kanban", "Kanban", "1.5.3"),
        PluginManifest::new("templater-obsidian", "Templater", "2.1.1"),
    ]));
    let host: ManagerSlot<bool, PluginStatsError> = ManagerSlot::new(registry.clone());

    let mut plugin = PluginStats::new(config);
    plugin.load(Some(&host));

    // Callers only know the host's slot; interception is invisible to them
    let toggles = ["dataview", "calendar", "templater-obsidian"];
    let results = futures::future::join_all(toggles.iter().map(|id| host.enable_plugin(id))).await;
    for (id, result) in toggles.iter().zip(results) {
        if let Err(e) = result {
            warn!("Failed to enable {}: {}", id, e);
        }
    }

    host.disable_plugin("calendar").await?;
    if let Err(e) = host.enable_plugin("missing-plugin").await {
        warn!("Failed to enable missing-plugin: {}", e);
    }

    let report = plugin.report(&registry);
    match format {
        ExportFormat::Text => println!("{}", report),
        ExportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    debug!(
        "Full event log:\n{}",
        Exporter::new(ExportFormat::Text).export(&plugin.event_log().entries())?
    );
    debug!("Metrics:\n{}", metrics.render());

    plugin.unload(Some(&host));
    info!("Plugin Stats stopped");

    Ok(())
}
