//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod outline;
mod selector;
mod shell;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::tree::TreeError;

#[cfg(debug_assertions)]
use crate::tracing::ForestSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use outline::{parse_max_input, update_outline};
pub use selector::update_selector;
pub use shell::update_shell;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Selector(m) => selector::update_selector(model, m),
        Msg::Outline(m) => outline::update_outline(model, m),
        Msg::Shell(m) => shell::update_shell(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Log a rejected operation and report it; the model is left as it was
pub(crate) fn rejected(error: TreeError) -> Option<Cmd> {
    tracing::debug!(%error, kind = ?error.kind(), "operation rejected");
    Some(Cmd::Rejected(error))
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after forest state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = ForestSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = ForestSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "forest", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Selector::ToggleOpen`
/// - `Outline::AddChild(SourceId("source-1"))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Selector(m) => format!("Selector::{:?}", m),
        Msg::Outline(m) => format!("Outline::{:?}", m),
        Msg::Shell(m) => format!("Shell::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
