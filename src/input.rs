//! Text command input
//!
//! Each line typed at the prompt (or read from a script) maps to exactly one
//! message, the same way a click or keystroke would in a graphical shell.

use thiserror::Error;

use crate::messages::{AppMsg, EditKey, Msg, OutlineMsg, SelectorMsg, ShellMsg};
use crate::model::{NavItem, SourceId};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Dispatch a message through `update`
    Msg(Msg),
    /// Re-render the current frame
    Show,
    /// Print command help
    Help,
    /// Empty line or comment
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("unknown navigation item '{0}'")]
    UnknownNavItem(String),
}

pub const HELP: &str = "\
Selector:  dropdown | close | expand <id> | select <id> | select-all
Editor:    add [parent-id] | rename <id> | draft <text> | save | cancel
           enter | escape | delete <id> | toggle <id> | max <n>
Shell:     nav <item> | sidebar | show | help | quit
Lines starting with '#' are ignored.";

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Input, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Input::Blank);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };
    let arg = rest.trim();

    let msg = match command {
        // === Selector ===
        "dropdown" => Msg::Selector(SelectorMsg::ToggleOpen),
        "close" => Msg::Selector(SelectorMsg::Close),
        "expand" => Msg::Selector(SelectorMsg::ToggleExpanded(id_arg("expand", arg)?)),
        "select" => Msg::Selector(SelectorMsg::Select(id_arg("select", arg)?)),
        "select-all" => Msg::Selector(SelectorMsg::SelectAll),

        // === Editor ===
        "add" if arg.is_empty() => Msg::Outline(OutlineMsg::AddRoot),
        "add" => Msg::Outline(OutlineMsg::AddChild(SourceId::new(arg))),
        "rename" => Msg::Outline(OutlineMsg::StartRename(id_arg("rename", arg)?)),
        // Draft text is kept verbatim so trimming stays the editor's job
        "draft" => Msg::Outline(OutlineMsg::UpdateDraft(rest.to_string())),
        "save" => Msg::Outline(OutlineMsg::CommitRename),
        "cancel" => Msg::Outline(OutlineMsg::CancelRename),
        "enter" => Msg::Outline(OutlineMsg::Key(EditKey::Enter)),
        "escape" => Msg::Outline(OutlineMsg::Key(EditKey::Escape)),
        "delete" => Msg::Outline(OutlineMsg::Delete(id_arg("delete", arg)?)),
        "toggle" => Msg::Outline(OutlineMsg::ToggleExpanded(id_arg("toggle", arg)?)),
        "max" => Msg::Outline(OutlineMsg::SetMaxSources(arg.to_string())),

        // === Shell ===
        "nav" => {
            let item = NavItem::from_label(arg)
                .ok_or_else(|| InputError::UnknownNavItem(arg.to_string()))?;
            Msg::Shell(ShellMsg::Navigate(item))
        }
        "sidebar" => Msg::Shell(ShellMsg::ToggleSidebar),
        "quit" | "exit" => Msg::App(AppMsg::Quit),
        "show" => return Ok(Input::Show),
        "help" => return Ok(Input::Help),

        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(Input::Msg(msg))
}

fn id_arg(command: &'static str, arg: &str) -> Result<SourceId, InputError> {
    if arg.is_empty() {
        return Err(InputError::MissingArgument {
            command,
            argument: "a source id",
        });
    }
    Ok(SourceId::new(arg))
}
