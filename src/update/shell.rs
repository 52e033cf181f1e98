//! Presentation shell message handlers

use crate::commands::Cmd;
use crate::messages::ShellMsg;
use crate::model::AppModel;

pub fn update_shell(model: &mut AppModel, msg: ShellMsg) -> Option<Cmd> {
    match msg {
        ShellMsg::Navigate(item) => {
            model.shell.active = item;
            tracing::trace!(item = item.label(), "navigated");
        }
        ShellMsg::ToggleSidebar => {
            model.shell.sidebar_collapsed = !model.shell.sidebar_collapsed;
        }
    }
    Some(Cmd::Redraw)
}
