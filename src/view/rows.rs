//! Row models for the two tree widgets
//!
//! Both widgets show the same forest: only expanded nodes contribute their
//! children, and every row knows its depth so hosts can indent it.

use std::collections::HashSet;

use crate::model::{
    AppModel, Level, SourceId, SourceNode, ALL_SOURCES_LABEL, MAX_SOURCES_LIMIT,
};

/// Horizontal offset added for every nesting level
pub const INDENT_PER_LEVEL_PX: u32 = 20;
/// Left padding of depth-0 rows
pub const ROW_BASE_PADDING_PX: u32 = 16;

/// Left padding in pixels for a row at `depth`
pub fn row_indent(depth: usize, per_level: u32) -> u32 {
    depth as u32 * per_level + ROW_BASE_PADDING_PX
}

// ============================================================================
// Selector
// ============================================================================

/// One entry in the open dropdown panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorRow {
    /// `None` for the synthetic "All Sources" entry
    pub id: Option<SourceId>,
    pub label: String,
    pub level: Option<Level>,
    pub depth: usize,
    pub indent_px: u32,
    /// Only rows with children get an expand toggle
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub trigger_label: String,
    pub open: bool,
    /// "All Sources" first, then the visible part of the forest
    pub rows: Vec<SelectorRow>,
    /// The forest has no sources ("No sources configured")
    pub empty: bool,
}

pub fn selector_view(model: &AppModel, per_level: u32) -> SelectorView {
    let forest = model.forest();
    let selected = model.selected.as_ref();

    let mut rows = vec![SelectorRow {
        id: None,
        label: ALL_SOURCES_LABEL.to_string(),
        level: None,
        depth: 0,
        indent_px: ROW_BASE_PADDING_PX,
        has_children: false,
        expanded: false,
        selected: selected.is_none(),
    }];

    visit_visible(forest.roots(), 0, &model.selector.expanded, &mut |node, depth| {
        rows.push(SelectorRow {
            id: Some(node.id.clone()),
            label: node.name.clone(),
            level: Some(node.level),
            depth,
            indent_px: row_indent(depth, per_level),
            has_children: node.has_children(),
            expanded: model.selector.is_expanded(&node.id),
            selected: selected == Some(&node.id),
        });
    });

    SelectorView {
        trigger_label: model.trigger_label().to_string(),
        open: model.selector.open,
        rows,
        empty: forest.is_empty(),
    }
}

// ============================================================================
// Editor outline
// ============================================================================

/// One row of the editable outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub id: SourceId,
    pub name: String,
    pub level: Level,
    pub depth: usize,
    pub indent_px: u32,
    pub has_children: bool,
    pub expanded: bool,
    /// Add-child is offered below level 3 only
    pub can_add_child: bool,
    /// Draft text when this row is in edit mode
    pub draft: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineView {
    pub root_count: usize,
    pub max_sources: u32,
    /// Upper bound offered by the numeric input
    pub max_limit: u32,
    /// Root-add button state: disabled once the cap is reached
    pub can_add_root: bool,
    pub rows: Vec<OutlineRow>,
}

impl OutlineView {
    /// "3 / 10 sources configured"
    pub fn header(&self) -> String {
        format!(
            "{} / {} sources configured",
            self.root_count, self.max_sources
        )
    }
}

pub fn outline_view(model: &AppModel, per_level: u32) -> OutlineView {
    let forest = model.forest();
    let outline = &model.outline;

    let mut rows = Vec::new();
    visit_visible(forest.roots(), 0, &outline.expanded, &mut |node, depth| {
        rows.push(OutlineRow {
            id: node.id.clone(),
            name: node.name.clone(),
            level: node.level,
            depth,
            indent_px: row_indent(depth, per_level),
            has_children: node.has_children(),
            expanded: outline.is_expanded(&node.id),
            can_add_child: node.level.can_have_children(),
            draft: outline
                .editing
                .as_ref()
                .filter(|edit| edit.id == node.id)
                .map(|edit| edit.draft.clone()),
        });
    });

    OutlineView {
        root_count: forest.root_count(),
        max_sources: model.store.max_sources(),
        max_limit: MAX_SOURCES_LIMIT,
        can_add_root: model.store.can_add_root(),
        rows,
    }
}

/// Walk the nodes that are currently visible, in display order
fn visit_visible(
    nodes: &[SourceNode],
    depth: usize,
    expanded: &HashSet<SourceId>,
    f: &mut impl FnMut(&SourceNode, usize),
) {
    for node in nodes {
        f(node, depth);
        if node.has_children() && expanded.contains(&node.id) {
            visit_visible(&node.children, depth + 1, expanded, f);
        }
    }
}
