//! Named style registries resolved per color mode.

use std::collections::HashMap;

use console::Style;

use crate::theme::ColorMode;

/// A registry of named [`console::Style`]s.
///
/// Styles are looked up by name at render time; unknown names pass text
/// through unstyled so a missing palette entry degrades instead of
/// failing a render.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: HashMap<String, Style>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the set for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies the named style to `text`.
    pub(crate) fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        if !use_color {
            return text.to_string();
        }
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

/// A light/dark pair of style sets.
///
/// The palette differs between appearances; the pair resolves through the
/// [`ColorMode`] the theme controller reports.
#[derive(Debug, Clone)]
pub struct AdaptiveStyles {
    light: StyleSet,
    dark: StyleSet,
}

impl AdaptiveStyles {
    pub fn new(light: StyleSet, dark: StyleSet) -> Self {
        Self { light, dark }
    }

    /// The set matching the given appearance.
    pub fn resolve(&self, mode: ColorMode) -> &StyleSet {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}
