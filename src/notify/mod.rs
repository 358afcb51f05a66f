//! Transient user-facing notices.
//!
//! A [`Notice`] is an unpersisted message/kind pair; the
//! [`NotificationCenter`] enforces the single-visible-notice lifecycle with
//! auto-dismissal.

mod center;
mod notice;

pub use center::{NotificationCenter, DISPLAY_TTL};
pub use notice::{Notice, NoticeKind};
