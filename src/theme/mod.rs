//! Theme selection, resolution, and persistence.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: the three-way selection (`system`, `light`, `dark`)
//! - [`ColorMode`]: the concrete appearance a selection resolves to
//! - [`ThemeController`]: owned state driving every theme transition
//! - [`ThemeStore`]: the one durable key behind the selection

mod adaptive;
mod controller;
mod mode;
mod store;

pub use adaptive::{set_color_mode_detector, ColorMode};
pub use controller::{ThemeController, ThemeOutcome};
pub use mode::{ParseThemeModeError, ThemeMode};
pub use store::{FileThemeStore, MemoryThemeStore, StoreError, ThemeStore};
