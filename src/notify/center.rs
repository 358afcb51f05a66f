//! Single-slot notification lifecycle.

use std::time::{Duration, Instant};

use super::notice::Notice;

/// How long a notice stays visible before auto-dismissal.
pub const DISPLAY_TTL: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct ActiveNotice {
    notice: Notice,
    deadline: Instant,
}

/// Holds at most one visible notice.
///
/// Showing a notice replaces any prior one and restarts the auto-dismiss
/// deadline. Removal is idempotent: the deadline expiry and an explicit
/// dismissal can both fire without a double-removal, whichever comes
/// second is a no-op. Time is always passed in by the caller; the center
/// never reads a clock.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    slot: Option<ActiveNotice>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notice, replacing any visible one and restarting its
    /// auto-dismiss deadline.
    pub fn show(&mut self, notice: Notice, now: Instant) {
        self.slot = Some(ActiveNotice {
            notice,
            deadline: now + DISPLAY_TTL,
        });
    }

    /// The visible notice, if any.
    pub fn visible(&self) -> Option<&Notice> {
        self.slot.as_ref().map(|active| &active.notice)
    }

    /// Number of visible notice elements. By construction this is 0 or 1.
    pub fn visible_count(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    /// When the visible notice will auto-dismiss.
    pub fn deadline(&self) -> Option<Instant> {
        self.slot.as_ref().map(|active| active.deadline)
    }

    /// Dismisses the visible notice. Returns whether one was removed;
    /// dismissing an empty slot is a no-op.
    pub fn dismiss(&mut self) -> bool {
        self.slot.take().is_some()
    }

    /// Removes the visible notice once its deadline has passed. Returns
    /// whether an expiry happened on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.slot {
            Some(active) if now >= active.deadline => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_makes_notice_visible() {
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("welcome"), now);
        assert_eq!(center.visible().unwrap().message, "welcome");
        assert_eq!(center.visible_count(), 1);
    }

    #[test]
    fn test_second_notice_replaces_first() {
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("first"), now);
        center.show(Notice::error("second"), now);
        assert_eq!(center.visible_count(), 1);
        assert_eq!(center.visible().unwrap().message, "second");
    }

    #[test]
    fn test_replacement_restarts_deadline() {
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("first"), now);
        let later = now + Duration::from_secs(3);
        center.show(Notice::info("second"), later);
        assert_eq!(center.deadline(), Some(later + DISPLAY_TTL));
    }

    #[test]
    fn test_tick_expires_after_ttl() {
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("soon gone"), now);

        assert!(!center.tick(now + DISPLAY_TTL - Duration::from_millis(1)));
        assert_eq!(center.visible_count(), 1);

        assert!(center.tick(now + DISPLAY_TTL));
        assert_eq!(center.visible_count(), 0);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("click me"), now);

        assert!(center.dismiss());
        assert!(!center.dismiss());
    }

    #[test]
    fn test_tick_after_dismiss_is_noop() {
        // The race from the source: a click lands right at the deadline.
        // Whichever removal runs second must see an empty slot and do
        // nothing.
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("racy"), now);

        assert!(center.dismiss());
        assert!(!center.tick(now + DISPLAY_TTL));
        assert_eq!(center.visible_count(), 0);
    }

    #[test]
    fn test_dismiss_after_tick_is_noop() {
        let mut center = NotificationCenter::new();
        let now = Instant::now();
        center.show(Notice::info("racy"), now);

        assert!(center.tick(now + DISPLAY_TTL));
        assert!(!center.dismiss());
    }
}
