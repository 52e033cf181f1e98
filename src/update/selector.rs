//! Selector message handlers (source dropdown)

use crate::commands::Cmd;
use crate::messages::SelectorMsg;
use crate::model::{AppModel, NO_SELECTION_LABEL};
use crate::tree::TreeError;

use super::rejected;

/// Handle dropdown messages
pub fn update_selector(model: &mut AppModel, msg: SelectorMsg) -> Option<Cmd> {
    match msg {
        SelectorMsg::ToggleOpen => {
            model.selector.toggle_open();
            Some(Cmd::Redraw)
        }

        SelectorMsg::Close => {
            model.selector.close();
            Some(Cmd::Redraw)
        }

        SelectorMsg::ToggleExpanded(id) => {
            if !model.forest().contains(&id) {
                return rejected(TreeError::NotFound(id));
            }
            model.selector.toggle_expanded(&id);
            tracing::trace!(%id, expanded = model.selector.is_expanded(&id), "selector row toggled");
            Some(Cmd::Redraw)
        }

        SelectorMsg::Select(id) => {
            let Some(node) = model.forest().find(&id) else {
                return rejected(TreeError::NotFound(id));
            };
            let name = node.name.clone();
            model.selected = Some(id.clone());
            model.selector.close();
            Some(Cmd::batch(vec![
                Cmd::SourceSelected { id: Some(id), name },
                Cmd::Redraw,
            ]))
        }

        SelectorMsg::SelectAll => {
            model.selected = None;
            model.selector.close();
            Some(Cmd::batch(vec![
                Cmd::SourceSelected {
                    id: None,
                    name: NO_SELECTION_LABEL.to_string(),
                },
                Cmd::Redraw,
            ]))
        }
    }
}
