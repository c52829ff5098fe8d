//! # Navigation
//!
//! The four pages of the app and the navbar state: which page is current and
//! whether the compact (mobile) menu is open.

use serde::{Deserialize, Serialize};

/// Width in logical pixels below which the navbar collapses into a menu
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// A top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Safety,
    Contacts,
    Routes,
}

impl Page {
    /// Navbar order
    pub const ALL: &'static [Page] = &[Page::Home, Page::Safety, Page::Contacts, Page::Routes];

    /// Label shown in the navbar
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Safety => "Safety Tools",
            Page::Contacts => "Contacts",
            Page::Routes => "Safe Routes",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Safety => "/safety",
            Page::Contacts => "/contacts",
            Page::Routes => "/routes",
        }
    }

    /// Resolve a route path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.iter().copied().find(|p| p.path() == normalized)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Navbar state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavBar {
    current: Page,
    menu_open: bool,
}

impl NavBar {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Go to `page`. Always closes the compact menu.
    pub fn navigate(&mut self, page: Page) {
        if self.current != page {
            tracing::debug!(from = %self.current, to = %page, "navigate");
        }
        self.current = page;
        self.menu_open = false;
    }

    /// React to a viewport width change; the menu only exists in compact mode
    pub fn set_viewport_width(&mut self, width: f32) {
        if !is_compact(width) {
            self.menu_open = false;
        }
    }
}

/// Whether a viewport of this width uses the collapsed navbar
pub fn is_compact(width: f32) -> bool {
    width < COMPACT_BREAKPOINT
}
