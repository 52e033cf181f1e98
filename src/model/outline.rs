//! Source editor (outline) state - expansion and inline rename

use std::collections::HashSet;

use super::source::{Forest, SourceId};

/// An in-progress inline rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDraft {
    pub id: SourceId,
    pub draft: String,
}

#[derive(Debug, Clone, Default)]
pub struct OutlineState {
    pub expanded: HashSet<SourceId>,
    /// At most one node is in edit mode at a time
    pub editing: Option<RenameDraft>,
}

impl OutlineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &SourceId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &SourceId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn expand(&mut self, id: &SourceId) {
        self.expanded.insert(id.clone());
    }

    pub fn is_editing(&self, id: &SourceId) -> bool {
        self.editing.as_ref().is_some_and(|edit| &edit.id == id)
    }

    pub fn start_editing(&mut self, id: SourceId, current_name: &str) {
        self.editing = Some(RenameDraft {
            id,
            draft: current_name.to_string(),
        });
    }

    /// Leave edit mode, returning the draft that was open
    pub fn stop_editing(&mut self) -> Option<RenameDraft> {
        self.editing.take()
    }

    /// Forget expansion and edit state for ids no longer in the forest
    pub fn retain_existing(&mut self, forest: &Forest) {
        self.expanded.retain(|id| forest.contains(id));
        if let Some(edit) = &self.editing {
            if !forest.contains(&edit.id) {
                tracing::debug!(id = %edit.id, "rename target removed, leaving edit mode");
                self.editing = None;
            }
        }
    }
}
