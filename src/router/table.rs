//! # Route Table
//!
//! The static page map: one layout shell at `/` that redirects to `home`,
//! eight page children, and a not-found fallback for everything else.

/// A page-level view the shell can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Layout,
    Home,
    Photos,
    Article,
    Record,
    Label,
    Mind,
    Archive,
    More,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

impl RouteEntry {
    const fn new(path: &'static str, name: &'static str, view: View) -> Self {
        Self { path, name, view }
    }
}

const LAYOUT: RouteEntry = RouteEntry::new("/", "layout", View::Layout);
const NOT_FOUND: RouteEntry = RouteEntry::new("*", "not-found", View::NotFound);
const DEFAULT_CHILD: &str = "home";

const CHILDREN: [RouteEntry; 8] = [
    RouteEntry::new("home", "home", View::Home),
    RouteEntry::new("photos", "photos", View::Photos),
    RouteEntry::new("article", "article", View::Article),
    RouteEntry::new("record", "record", View::Record),
    RouteEntry::new("label", "label", View::Label),
    RouteEntry::new("mind", "mind", View::Mind),
    RouteEntry::new("archive", "archive", View::Archive),
    RouteEntry::new("more", "more", View::More),
];

/// Result of matching a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized path that was finally matched.
    pub path: String,
    pub layout: RouteEntry,
    pub page: RouteEntry,
    /// Set when the requested path was redirected.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    /// Matched records, outermost first.
    pub fn matched(&self) -> [RouteEntry; 2] {
        [self.layout, self.page]
    }

    pub fn view(&self) -> View {
        self.page.view
    }

    pub fn is_not_found(&self) -> bool {
        self.page.view == View::NotFound
    }
}

/// Immutable route table, built once at startup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    layout: RouteEntry,
    children: Vec<RouteEntry>,
    fallback: RouteEntry,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            layout: LAYOUT,
            children: CHILDREN.to_vec(),
            fallback: NOT_FOUND,
        }
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[RouteEntry] {
        &self.children
    }

    /// Matches `path` (query and fragment ignored, trailing slash optional,
    /// case-insensitive).
    pub fn resolve(&self, path: &str) -> ResolvedRoute {
        let normalized = normalize(path);

        if normalized == "/" {
            let mut route = self.resolve(&format!("/{DEFAULT_CHILD}"));
            route.redirected_from = Some(normalized);
            return route;
        }

        let segment = &normalized[1..];
        let page = self
            .children
            .iter()
            .find(|child| child.path.eq_ignore_ascii_case(segment))
            .copied()
            .unwrap_or(self.fallback);

        ResolvedRoute {
            path: normalized,
            layout: self.layout,
            page,
            redirected_from: None,
        }
    }

    pub fn by_name(&self, name: &str) -> Option<RouteEntry> {
        std::iter::once(self.layout)
            .chain(self.children.iter().copied())
            .find(|entry| entry.name == name)
    }

    /// Absolute path for a named route, relative to the app base.
    pub fn path_for(&self, name: &str) -> Option<String> {
        let entry = self.by_name(name)?;
        if entry.view == View::Layout {
            Some("/".to_string())
        } else {
            Some(format!("/{}", entry.path))
        }
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}
