//! Presentation shell - sidebar navigation around the source widgets

/// Sidebar navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavItem {
    #[default]
    Home,
    Discover,
    Recent,
    Saved,
    Shortcuts,
    Shared,
}

impl NavItem {
    pub const ALL: [NavItem; 6] = [
        NavItem::Home,
        NavItem::Discover,
        NavItem::Recent,
        NavItem::Saved,
        NavItem::Shortcuts,
        NavItem::Shared,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Discover => "Discover",
            NavItem::Recent => "Recent",
            NavItem::Saved => "Saved",
            NavItem::Shortcuts => "Shortcuts",
            NavItem::Shared => "Shared",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<NavItem> {
        Self::ALL
            .into_iter()
            .find(|item| item.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub active: NavItem,
    pub sidebar_collapsed: bool,
}
