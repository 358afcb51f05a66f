//! Navigation and scroll behavior, modeled as pure reducers.

mod menu;
mod reveal;
mod scroll;

pub use menu::{MenuEvent, MenuState};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use scroll::{scroll_target, ScrollTracker, Visibility, HIDE_THRESHOLD};
