//! Plain-text frame renderer used by the terminal shell

use super::rows::{outline_view, selector_view, OutlineRow, SelectorRow};
use crate::model::{AppModel, NavItem};

/// Pixels represented by one column of text
const PX_PER_COLUMN: u32 = 8;

const RULE: &str = "----------------------------------------";

fn pad(indent_px: u32) -> String {
    " ".repeat((indent_px / PX_PER_COLUMN) as usize)
}

fn chevron(has_children: bool, expanded: bool) -> &'static str {
    match (has_children, expanded) {
        (false, _) => "  ",
        (true, false) => "▸ ",
        (true, true) => "▾ ",
    }
}

/// Render the whole screen: sidebar, dashboard filter bar, editor panel
pub fn render_frame(model: &AppModel, per_level: u32) -> String {
    let mut lines = vec![sidebar_line(model)];
    lines.extend(dashboard_lines(model, per_level));
    lines.extend(editor_lines(model, per_level));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn sidebar_line(model: &AppModel) -> String {
    if model.shell.sidebar_collapsed {
        return format!("[≡] {}", model.shell.active.label());
    }
    let items: Vec<String> = NavItem::ALL
        .iter()
        .map(|item| {
            if *item == model.shell.active {
                format!("[{}]", item.label())
            } else {
                item.label().to_string()
            }
        })
        .collect();
    format!("capacity | {}", items.join("  "))
}

fn dashboard_lines(model: &AppModel, per_level: u32) -> Vec<String> {
    let view = selector_view(model, per_level);
    let arrow = if view.open { "▴" } else { "▾" };
    let mut lines = vec![
        RULE.to_string(),
        format!("Filters: [{} {}]  [Date]  [Type]", view.trigger_label, arrow),
    ];

    if !view.open {
        return lines;
    }
    let (all, sources) = view.rows.split_at(1);
    lines.extend(all.iter().map(selector_line));
    if view.empty {
        lines.push("    No sources configured".to_string());
    }
    lines.extend(sources.iter().map(selector_line));
    lines
}

fn selector_line(row: &SelectorRow) -> String {
    let marker = if row.selected { "*" } else { " " };
    let badge = row
        .level
        .map(|level| format!("  {}", level.badge()))
        .unwrap_or_default();
    let id = row
        .id
        .as_ref()
        .map(|id| format!("  ({})", id))
        .unwrap_or_default();
    format!(
        "{}{}{}{}{}{}",
        marker,
        pad(row.indent_px),
        chevron(row.has_children, row.expanded),
        row.label,
        badge,
        id
    )
}

fn editor_lines(model: &AppModel, per_level: u32) -> Vec<String> {
    let view = outline_view(model, per_level);
    let add = if view.can_add_root {
        "[+ Add L1]"
    } else {
        "[+ Add L1] (disabled)"
    };
    let mut lines = vec![
        RULE.to_string(),
        "Source Filter Editor".to_string(),
        format!(
            "Maximum Sources: {} (1-{})",
            view.max_sources, view.max_limit
        ),
        format!("{}  {}", view.header(), add),
    ];

    if view.rows.is_empty() {
        lines.push("  No sources configured yet.".to_string());
    }
    lines.extend(view.rows.iter().map(outline_line));
    lines.push(RULE.to_string());
    lines
}

fn outline_line(row: &OutlineRow) -> String {
    let body = match &row.draft {
        Some(draft) => format!("[{}_] (enter to save, escape to cancel)", draft),
        None => {
            let add = if row.can_add_child { " +" } else { "" };
            format!("{}  {}  ({}){}", row.name, row.level.badge(), row.id, add)
        }
    };
    format!(
        "{}{}{}",
        pad(row.indent_px),
        chevron(row.has_children, row.expanded),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceConfig;

    #[test]
    fn test_frame_is_newline_terminated_lines() {
        let model = AppModel::new(SourceConfig::demo());
        let frame = render_frame(&model, 20);
        let lines: Vec<&str> = frame.lines().collect();

        assert!(frame.ends_with('\n'));
        assert!(!frame.ends_with("\n\n"));
        assert!(lines[0].starts_with("capacity | [Home]"));
        assert_eq!(lines[1], RULE);
        assert_eq!(lines[2], "Filters: [Source ▾]  [Date]  [Type]");
        assert_eq!(lines[3], RULE);
        assert_eq!(lines.last(), Some(&RULE));
    }

    #[test]
    fn test_collapsed_sidebar_is_one_line() {
        let mut model = AppModel::new(SourceConfig::demo());
        model.shell.sidebar_collapsed = true;
        let frame = render_frame(&model, 20);
        assert_eq!(frame.lines().next(), Some("[≡] Home"));
    }
}
