//! The three-way theme selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's theme selection.
///
/// `System` tracks the OS light/dark preference; `Light` and `Dark` pin the
/// appearance regardless of it. The string forms (`"system"`, `"light"`,
/// `"dark"`) are what the settings file stores and what the document marker
/// attribute carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

/// Error returned when parsing a theme mode from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme \"{0}\", expected system, light, or dark")]
pub struct ParseThemeModeError(String);

impl ThemeMode {
    /// The modes in the order the cycle shortcut walks them.
    pub const CYCLE_ORDER: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Stable string form used for persistence and the document marker.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Human-facing name used in confirmation notices.
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// The next mode in the fixed cycle order.
    pub fn next(self) -> ThemeMode {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }
}

impl Default for ThemeMode {
    /// First-load default when no selection has been persisted.
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ThemeMode::System),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}
