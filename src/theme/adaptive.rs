//! Resolution of `system` selections against the OS color preference.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::mode::ThemeMode;

/// The concrete appearance of the document.
///
/// `light` and `dark` selections map to themselves; a `system` selection
/// collapses to one of these through the OS preference signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolves this selection to a concrete appearance.
    ///
    /// For `system` this consults the color-mode detector, so the result can
    /// change between calls when the OS preference changes.
    pub fn resolve(self) -> ColorMode {
        match self {
            ThemeMode::Light => ColorMode::Light,
            ThemeMode::Dark => ColorMode::Dark,
            ThemeMode::System => detect_color_mode(),
        }
    }
}

type ColorModeDetector = fn() -> ColorMode;

static DETECTOR: Lazy<Mutex<ColorModeDetector>> = Lazy::new(|| Mutex::new(os_color_mode));

/// Overrides the detector used to resolve `system` selections.
///
/// This is useful for testing or when you want to force a specific
/// appearance.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_color_mode() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}
