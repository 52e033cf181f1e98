//! Command types for the Elm-style architecture
//!
//! Commands represent effects the host should perform after an update:
//! redraws and the callbacks that reach the presentation shell.

use crate::model::{Forest, SourceId};
use crate::tree::TreeError;

/// Receiver for the callbacks the source widgets emit
///
/// All methods default to doing nothing so hosts implement only what they need.
pub trait SourceListener {
    /// A row was picked in the selector; `id` is empty for "All Sources"
    fn on_source_select(&mut self, _id: &str, _name: &str) {}
    /// The forest was replaced
    fn on_sources_change(&mut self, _sources: &Forest) {}
    /// The root cap was changed
    fn on_max_sources_change(&mut self, _max: u32) {}
    /// An operation was rejected and state left unchanged
    fn on_rejected(&mut self, _error: &TreeError) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Report a selection to the shell
    SourceSelected { id: Option<SourceId>, name: String },
    /// Report the new forest to the shell
    SourcesChanged(Forest),
    /// Report the new root cap to the shell
    MaxSourcesChanged(u32),
    /// An operation was rejected; state is unchanged
    Rejected(TreeError),
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw after the forest changed, notifying the shell
    pub fn sources_changed(forest: &Forest) -> Self {
        Cmd::batch(vec![Cmd::SourcesChanged(forest.clone()), Cmd::Redraw])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SourceSelected { .. } => true,
            Cmd::SourcesChanged(_) => true,
            Cmd::MaxSourcesChanged(_) => true,
            // Rejections leave state untouched
            Cmd::Rejected(_) => false,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Whether this command (or any command in a batch) asks to quit
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_quit),
            _ => false,
        }
    }

    /// The rejection carried by this command, if any
    pub fn rejection(&self) -> Option<&TreeError> {
        match self {
            Cmd::Rejected(error) => Some(error),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::rejection),
            _ => None,
        }
    }

    /// Deliver the shell callbacks in this command to a listener
    pub fn dispatch(&self, listener: &mut dyn SourceListener) {
        match self {
            Cmd::SourceSelected { id, name } => {
                let id = id.as_ref().map(SourceId::as_str).unwrap_or("");
                listener.on_source_select(id, name);
            }
            Cmd::SourcesChanged(forest) => listener.on_sources_change(forest),
            Cmd::MaxSourcesChanged(max) => listener.on_max_sources_change(*max),
            Cmd::Rejected(error) => listener.on_rejected(error),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.dispatch(listener);
                }
            }
            Cmd::None | Cmd::Redraw | Cmd::Quit => {}
        }
    }
}
