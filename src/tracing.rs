//! Logging infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=forest=debug` - only forest state diffs
//! - `RUST_LOG=sourcefilter::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/sourcefilter/logs/sourcefilter.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, SourceId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with rendered frames.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sourcefilter.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of store/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestSnapshot {
    pub root_count: usize,
    pub node_count: usize,
    pub max_sources: u32,
    pub selected: Option<SourceId>,
    pub editing: Option<SourceId>,
}

impl ForestSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            root_count: model.forest().root_count(),
            node_count: model.forest().node_count(),
            max_sources: model.store.max_sources(),
            selected: model.selected.clone(),
            editing: model.outline.editing.as_ref().map(|edit| edit.id.clone()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ForestSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.root_count != other.root_count || self.node_count != other.node_count {
            changes.push(format!(
                "nodes: {}/{} → {}/{}",
                self.root_count, self.node_count, other.root_count, other.node_count
            ));
        }
        if self.max_sources != other.max_sources {
            changes.push(format!(
                "max sources: {} → {}",
                self.max_sources, other.max_sources
            ));
        }
        if self.selected != other.selected {
            changes.push(format!(
                "selected: {} → {}",
                describe(&self.selected),
                describe(&other.selected)
            ));
        }
        if self.editing != other.editing {
            changes.push(format!(
                "editing: {} → {}",
                describe(&self.editing),
                describe(&other.editing)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(id: &Option<SourceId>) -> String {
    id.as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceConfig;

    #[test]
    fn test_snapshot_diff_reports_node_changes() {
        let mut model = AppModel::new(SourceConfig::demo());
        let before = ForestSnapshot::from_model(&model);
        model.store.delete_source(&"source-3".into()).unwrap();
        let after = ForestSnapshot::from_model(&model);
        assert_eq!(before.diff(&after).as_deref(), Some("nodes: 3/9 → 2/8"));
        assert_eq!(after.diff(&after), None);
    }
}
