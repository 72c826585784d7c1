//! Day/night theme state.
//!
//! [`ThemeStore`] owns the `is_night` flag and mirrors it onto the document
//! root as a `data-theme` attribute. The document is injected through
//! [`DocumentRoot`], so the store works the same against a real page or
//! the in-memory [`MemoryDocument`].

use std::collections::HashMap;
use tracing::info;

/// Attribute the stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_night(is_night: bool) -> Self {
        if is_night {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// The root element attributes can be written to.
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// A document root that just remembers its attributes.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    attributes: HashMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentRoot for MemoryDocument {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Session-lifetime theme flag. Starts in day mode and is never persisted.
#[derive(Debug)]
pub struct ThemeStore<D: DocumentRoot> {
    is_night: bool,
    document: D,
}

impl<D: DocumentRoot> ThemeStore<D> {
    /// The document is left untouched until the first toggle.
    pub fn new(document: D) -> Self {
        Self {
            is_night: false,
            document,
        }
    }

    pub fn is_night(&self) -> bool {
        self.is_night
    }

    pub fn theme(&self) -> Theme {
        Theme::from_night(self.is_night)
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Flips the flag and writes the matching `data-theme` value.
    pub fn toggle_mode(&mut self) {
        self.is_night = !self.is_night;
        let theme = self.theme();
        self.document.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        info!(theme = theme.as_str(), "Theme toggled");
    }
}
