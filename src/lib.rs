//! Behavior engine for the course-center site front end.
//!
//! `frontdesk` models the interactive layer of the center's site as owned
//! state with pure transitions: the theme controller (system/light/dark
//! selection, persisted and synchronized with the OS preference), the
//! single-slot notification center, inquiry-form validation, WhatsApp link
//! building, and the navigation reducers. Decision logic never touches a
//! real document; every change is applied to a headless [`Page`] model in
//! a separate step.
//!
//! # Example
//!
//! ```rust
//! use frontdesk::{MemoryThemeStore, Page, ThemeController, ThemeMode, ThemeOutcome};
//!
//! let mut page = Page::new();
//! let mut themes = ThemeController::start(MemoryThemeStore::new(), &mut page);
//! assert_eq!(themes.mode(), ThemeMode::Dark);
//!
//! match themes.set(ThemeMode::Light, &mut page) {
//!     ThemeOutcome::Switched { notice, .. } => {
//!         assert_eq!(notice.message, "Switched to Light theme");
//!     }
//!     ThemeOutcome::Unchanged => unreachable!(),
//! }
//! assert_eq!(page.theme_class(), Some("theme-light"));
//! ```

pub mod contact;
pub mod logging;
pub mod nav;
pub mod notify;
pub mod page;
pub mod render;
pub mod theme;
pub mod util;

pub use contact::{FormError, Inquiry, InquiryForm};
pub use notify::{Notice, NoticeKind, NotificationCenter};
pub use page::Page;
pub use render::{OutputMode, SiteRenderer};
pub use theme::{
    ColorMode, FileThemeStore, MemoryThemeStore, ThemeController, ThemeMode, ThemeOutcome,
    ThemeStore,
};

/// The center the site fronts for.
pub const CENTER_NAME: &str = "Disha Computer Education Center";

/// The running admission offer shown on the offer card.
pub const SPECIAL_OFFER: &str = "CCC FREE in 1 year courses";
