//! Application model - the complete state of the source filter UI
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod outline;
pub mod selector;
pub mod shell;
pub mod source;
pub mod store;

pub use outline::{OutlineState, RenameDraft};
pub use selector::{trigger_label, SelectorState, ALL_SOURCES_LABEL, NO_SELECTION_LABEL};
pub use shell::{NavItem, ShellState};
pub use source::{
    Forest, Level, SourceConfig, SourceId, SourceNode, DEFAULT_MAX_SOURCES, MAX_SOURCES_LIMIT,
};
pub use store::{IdAllocator, SourceStore};

/// The complete application model
#[derive(Debug, Default)]
pub struct AppModel {
    /// The single source of truth for the forest and the root cap
    pub store: SourceStore,
    /// Dropdown selector state
    pub selector: SelectorState,
    /// Editable outline state
    pub outline: OutlineState,
    /// Currently selected source; `None` means "All Sources"
    pub selected: Option<SourceId>,
    /// Sidebar / dashboard state
    pub shell: ShellState,
}

impl AppModel {
    /// Create a model around an initial configuration
    pub fn new(config: SourceConfig) -> Self {
        Self {
            store: SourceStore::new(config),
            ..Self::default()
        }
    }

    pub fn forest(&self) -> &Forest {
        self.store.forest()
    }

    /// Label currently shown on the selector trigger
    pub fn trigger_label(&self) -> &str {
        trigger_label(self.store.forest(), self.selected.as_ref())
    }

    pub(crate) fn prune_component_state(&mut self) {
        let forest = self.store.forest();
        self.selector.retain_existing(forest);
        self.outline.retain_existing(forest);
    }
}
