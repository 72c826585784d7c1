//! # Navigation History
//!
//! [`Navigator`] keeps a browser-style history stack over the
//! [`RouteTable`] and applies the scroll policy on every move.

use super::table::{ResolvedRoute, RouteTable};
use tracing::{debug, info};

/// Viewport scroll offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    pub left: u32,
    pub top: u32,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { left: 0, top: 0 };
}

/// Where the viewport goes after a navigation.
///
/// Always the top of the page. A saved offset from back/forward is ignored.
pub fn scroll_behavior(
    _to: &ResolvedRoute,
    _from: Option<&ResolvedRoute>,
    _saved: Option<ScrollPosition>,
) -> ScrollPosition {
    ScrollPosition::TOP
}

/// Outcome of one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: ResolvedRoute,
    pub scroll: ScrollPosition,
}

struct HistoryEntry {
    route: ResolvedRoute,
    saved_scroll: Option<ScrollPosition>,
}

pub struct Navigator {
    table: RouteTable,
    base: String,
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Navigator {
    /// Starts at the app root, which lands on `home`.
    pub fn new(table: RouteTable, base_path: &str) -> Self {
        let route = table.resolve("/");
        Self {
            table,
            base: base_path.trim_end_matches('/').to_string(),
            entries: vec![HistoryEntry {
                route,
                saved_scroll: None,
            }],
            index: 0,
        }
    }

    pub fn current(&self) -> &ResolvedRoute {
        &self.entries[self.index].route
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Records the viewport offset of the current entry.
    pub fn save_scroll(&mut self, position: ScrollPosition) {
        self.entries[self.index].saved_scroll = Some(position);
    }

    /// Navigates to `location`, which may include the base path.
    /// Drops any forward history.
    pub fn push(&mut self, location: &str) -> Navigation {
        let route = self.table.resolve(self.strip_base(location));
        info!(path = %route.path, view = ?route.view(), "Navigate");

        let scroll = scroll_behavior(&route, Some(self.current()), None);
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            route: route.clone(),
            saved_scroll: None,
        });
        self.index += 1;

        Navigation { route, scroll }
    }

    pub fn back(&mut self) -> Option<Navigation> {
        if !self.can_go_back() {
            return None;
        }
        Some(self.go_to(self.index - 1))
    }

    pub fn forward(&mut self) -> Option<Navigation> {
        if !self.can_go_forward() {
            return None;
        }
        Some(self.go_to(self.index + 1))
    }

    /// Full href for a named route, including the base path.
    pub fn href(&self, name: &str) -> Option<String> {
        let path = self.table.path_for(name)?;
        Some(format!("{}{}", self.base, path))
    }

    fn go_to(&mut self, index: usize) -> Navigation {
        let from = self.index;
        self.index = index;

        let entry = &self.entries[index];
        let scroll = scroll_behavior(
            &entry.route,
            Some(&self.entries[from].route),
            entry.saved_scroll,
        );
        debug!(path = %entry.route.path, ?scroll, "History move");

        Navigation {
            route: entry.route.clone(),
            scroll,
        }
    }

    fn strip_base<'a>(&self, location: &'a str) -> &'a str {
        if self.base.is_empty() {
            return location;
        }
        match location.strip_prefix(self.base.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
            _ => location,
        }
    }
}
