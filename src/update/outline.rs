//! Source editor message handlers (add / rename / delete / cap)

use crate::commands::Cmd;
use crate::messages::{EditKey, OutlineMsg};
use crate::model::AppModel;
use crate::tree::TreeError;

use super::rejected;

/// Handle source editor messages
pub fn update_outline(model: &mut AppModel, msg: OutlineMsg) -> Option<Cmd> {
    match msg {
        OutlineMsg::AddRoot => match model.store.add_source(None) {
            Ok(id) => {
                tracing::debug!(%id, "added top-level source");
                Some(Cmd::sources_changed(model.forest()))
            }
            Err(e) => rejected(e),
        },

        OutlineMsg::AddChild(parent) => match model.store.add_source(Some(&parent)) {
            Ok(id) => {
                tracing::debug!(%id, %parent, "added child source");
                // Keep the new child visible
                model.outline.expand(&parent);
                Some(Cmd::sources_changed(model.forest()))
            }
            Err(e) => rejected(e),
        },

        OutlineMsg::StartRename(id) => {
            let Some(node) = model.forest().find(&id) else {
                return rejected(TreeError::NotFound(id));
            };
            let name = node.name.clone();
            model.outline.start_editing(id, &name);
            Some(Cmd::Redraw)
        }

        OutlineMsg::UpdateDraft(text) => {
            let edit = model.outline.editing.as_mut()?;
            edit.draft = text;
            Some(Cmd::Redraw)
        }

        OutlineMsg::CommitRename | OutlineMsg::Key(EditKey::Enter) => commit_rename(model),

        OutlineMsg::CancelRename | OutlineMsg::Key(EditKey::Escape) => {
            model.outline.stop_editing()?;
            Some(Cmd::Redraw)
        }

        OutlineMsg::Delete(id) => match model.store.delete_source(&id) {
            Ok(()) => {
                tracing::debug!(%id, "deleted source subtree");
                model.prune_component_state();
                Some(Cmd::sources_changed(model.forest()))
            }
            Err(e) => rejected(e),
        },

        OutlineMsg::ToggleExpanded(id) => {
            if !model.forest().contains(&id) {
                return rejected(TreeError::NotFound(id));
            }
            model.outline.toggle_expanded(&id);
            tracing::trace!(%id, expanded = model.outline.is_expanded(&id), "outline row toggled");
            Some(Cmd::Redraw)
        }

        OutlineMsg::SetMaxSources(raw) => {
            let max = model.store.set_max_sources(parse_max_input(&raw));
            Some(Cmd::batch(vec![Cmd::MaxSourcesChanged(max), Cmd::Redraw]))
        }
    }
}

/// Apply the open rename draft; edit mode is left either way
fn commit_rename(model: &mut AppModel) -> Option<Cmd> {
    let edit = model.outline.stop_editing()?;
    match model.store.rename_source(&edit.id, &edit.draft) {
        Ok(()) => Some(Cmd::sources_changed(model.forest())),
        Err(e) => {
            let cmd = rejected(e)?;
            Some(Cmd::batch(vec![cmd, Cmd::Redraw]))
        }
    }
}

/// Interpret the numeric input like a browser `parseInt(value) || 1`
///
/// The leading integer is used; anything unparsable or zero becomes 1.
/// Negative values also become 1. The store applies the upper bound.
pub fn parse_max_input(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n,
        // Too many digits for u32: saturate, the store clamps it
        Err(_) => u32::MAX,
    }
}
