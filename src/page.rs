//! Headless document model.
//!
//! Controllers decide; the page records. Every state change is split into a
//! pure decision and an application step against this plain-data model, so
//! the decision logic is testable without a real document environment.

use crate::theme::{ColorMode, ThemeMode};

/// Marker attribute carrying the active theme on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The document as the behavior layer sees it.
///
/// Invariants held by construction: at most one theme marker, one theme
/// class, and one active theme control at any time.
#[derive(Debug, Clone, Default)]
pub struct Page {
    theme_marker: Option<ThemeMode>,
    theme_class: Option<String>,
    appearance: Option<ColorMode>,
    active_control: Option<ThemeMode>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a theme selection.
    ///
    /// Replaces any prior marker attribute and `theme-*` class, records the
    /// resolved appearance, and makes the matching theme control the only
    /// active one.
    pub fn apply_theme(&mut self, mode: ThemeMode, appearance: ColorMode) {
        self.theme_marker = Some(mode);
        self.theme_class = Some(format!("theme-{mode}"));
        self.appearance = Some(appearance);
        self.active_control = Some(mode);
    }

    /// Value of the root marker attribute, if a theme has been applied.
    pub fn theme_marker(&self) -> Option<ThemeMode> {
        self.theme_marker
    }

    /// The `theme-*` class on the root, if a theme has been applied.
    pub fn theme_class(&self) -> Option<&str> {
        self.theme_class.as_deref()
    }

    /// The resolved appearance currently applied.
    pub fn appearance(&self) -> Option<ColorMode> {
        self.appearance
    }

    /// Which theme control is marked active.
    pub fn active_control(&self) -> Option<ThemeMode> {
        self.active_control
    }
}
