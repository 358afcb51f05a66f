//! Navbar visibility and scroll targeting.

/// Scroll offset below which the navbar never hides.
pub const HIDE_THRESHOLD: u32 = 100;

/// Whether the navbar is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

/// Derives navbar visibility from successive scroll offsets.
///
/// Scrolling down past the threshold hides the navbar; any upward scroll
/// brings it back.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last_top: u32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new scroll offset, returning the visibility it implies.
    pub fn on_scroll(&mut self, top: u32) -> Visibility {
        let visibility = if top > self.last_top && top > HIDE_THRESHOLD {
            Visibility::Hidden
        } else {
            Visibility::Shown
        };
        self.last_top = top;
        visibility
    }
}

/// Scroll position that puts `section_top` just below a navbar of
/// `navbar_height`, saturating at the top of the page.
pub fn scroll_target(section_top: u32, navbar_height: u32) -> u32 {
    section_top.saturating_sub(navbar_height)
}
