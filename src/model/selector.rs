//! Source selector dropdown state
//!
//! Tracks whether the panel is open and which rows are expanded. The
//! current selection itself lives on the app model.

use std::collections::HashSet;

use super::source::{Forest, SourceId};

/// Trigger label when nothing (or an unknown id) is selected
pub const NO_SELECTION_LABEL: &str = "Source";

/// Label of the synthetic first entry that clears the selection
pub const ALL_SOURCES_LABEL: &str = "All Sources";

#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    /// Whether the dropdown panel is open (closed by default)
    pub open: bool,
    /// Ids whose children are shown; everything else is collapsed
    pub expanded: HashSet<SourceId>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_expanded(&self, id: &SourceId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &SourceId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    /// Drop expansion entries for ids that no longer exist
    pub fn retain_existing(&mut self, forest: &Forest) {
        self.expanded.retain(|id| forest.contains(id));
    }
}

/// Text shown on the dropdown trigger for the given selection
pub fn trigger_label<'a>(forest: &'a Forest, selected: Option<&SourceId>) -> &'a str {
    selected
        .and_then(|id| forest.find(id))
        .map(|node| node.name.as_str())
        .unwrap_or(NO_SELECTION_LABEL)
}
