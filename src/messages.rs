//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{NavItem, SourceId};

/// Dropdown selector messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorMsg {
    /// Open or close the dropdown panel (trigger click)
    ToggleOpen,
    /// Close the dropdown without selecting
    Close,
    /// Expand or collapse a row's children
    ToggleExpanded(SourceId),
    /// Pick a source row
    Select(SourceId),
    /// Pick the synthetic "All Sources" row
    SelectAll,
}

/// Keystrokes understood by the inline rename field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Accept the draft (Enter)
    Enter,
    /// Discard the draft (Escape)
    Escape,
}

/// Source editor (outline) messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineMsg {
    /// Add a level-1 source at the end of the forest
    AddRoot,
    /// Add a child under the given source
    AddChild(SourceId),
    /// Enter inline edit mode for a source
    StartRename(SourceId),
    /// Replace the draft text of the open edit
    UpdateDraft(String),
    /// Confirm button
    CommitRename,
    /// Cancel button
    CancelRename,
    /// Keystroke inside the edit field
    Key(EditKey),
    /// Remove a source and its subtree (no confirmation)
    Delete(SourceId),
    /// Expand or collapse a row's children
    ToggleExpanded(SourceId),
    /// Raw text from the max-sources numeric input
    SetMaxSources(String),
}

/// Presentation shell messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMsg {
    Navigate(NavItem),
    ToggleSidebar,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Request a fresh render
    Refresh,
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Dropdown selector messages
    Selector(SelectorMsg),
    /// Source editor messages
    Outline(OutlineMsg),
    /// Sidebar / dashboard messages
    Shell(ShellMsg),
    /// App messages (refresh, quit)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a select message for a source id
    pub fn select(id: impl Into<SourceId>) -> Self {
        Msg::Selector(SelectorMsg::Select(id.into()))
    }

    /// Create an add-child message
    pub fn add_child(parent: impl Into<SourceId>) -> Self {
        Msg::Outline(OutlineMsg::AddChild(parent.into()))
    }

    /// Create a delete message
    pub fn delete(id: impl Into<SourceId>) -> Self {
        Msg::Outline(OutlineMsg::Delete(id.into()))
    }

    /// Create a start-rename message
    pub fn start_rename(id: impl Into<SourceId>) -> Self {
        Msg::Outline(OutlineMsg::StartRename(id.into()))
    }
}
