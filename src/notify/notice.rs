//! The notice value object.

/// Category of a user-facing notice, determining its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// Stable lowercase name, used as the badge text.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }

    /// Name of the style the renderer applies to this kind.
    pub fn style_name(self) -> &'static str {
        match self {
            NoticeKind::Info => "notice-info",
            NoticeKind::Success => "notice-success",
            NoticeKind::Warning => "notice-warning",
            NoticeKind::Error => "notice-error",
        }
    }
}

/// A transient, user-facing message.
///
/// Notices are unpersisted value objects: created on a user action, shown
/// through the [`NotificationCenter`](super::NotificationCenter), and gone
/// once dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }
}
