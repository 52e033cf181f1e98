//! Tests for the text frame renderer and shell state

mod common;

use common::{model_with, test_model};
use sourcefilter::messages::{Msg, SelectorMsg, ShellMsg};
use sourcefilter::model::NavItem;
use sourcefilter::update::update;
use sourcefilter::view::render_frame;

#[test]
fn test_sidebar_marks_active_item() {
    let mut model = test_model();
    let frame = render_frame(&model, 20);
    assert!(frame.contains("[Home]"));

    update(&mut model, Msg::Shell(ShellMsg::Navigate(NavItem::Saved)));
    let frame = render_frame(&model, 20);
    assert!(frame.contains("[Saved]"));
    assert!(!frame.contains("[Home]"));
}

#[test]
fn test_collapsed_sidebar_shows_only_active_item() {
    let mut model = test_model();
    update(&mut model, Msg::Shell(ShellMsg::ToggleSidebar));
    let frame = render_frame(&model, 20);
    assert!(frame.starts_with("[≡] Home"));
    assert!(!frame.contains("Discover"));
}

#[test]
fn test_closed_dropdown_hides_rows() {
    let model = test_model();
    let frame = render_frame(&model, 20);
    assert!(!frame.contains("All Sources"));
}

#[test]
fn test_open_empty_dropdown_shows_empty_state() {
    let mut model = model_with(10, vec![]);
    update(&mut model, Msg::Selector(SelectorMsg::ToggleOpen));
    let frame = render_frame(&model, 20);
    assert!(frame.contains("All Sources"));
    assert!(frame.contains("No sources configured"));
    assert!(frame.contains("No sources configured yet."));
}

#[test]
fn test_indent_grows_with_depth() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Selector(SelectorMsg::ToggleExpanded("source-2".into())),
    );
    update(&mut model, Msg::Selector(SelectorMsg::ToggleOpen));
    let frame = render_frame(&model, 20);

    let root = frame
        .lines()
        .find(|l| l.contains("Knowledge Base  L1"))
        .unwrap();
    let child = frame.lines().find(|l| l.contains("FAQs  L2")).unwrap();
    let indent = |line: &str| line.len() - line.trim_start().len();
    assert!(indent(child) > indent(root));
}
