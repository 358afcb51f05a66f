//! The theme controller.

use log::{debug, warn};

use crate::notify::Notice;
use crate::page::Page;

use super::adaptive::ColorMode;
use super::mode::ThemeMode;
use super::store::ThemeStore;

/// Outcome of a `set` or `cycle` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeOutcome {
    /// The requested mode was already active; nothing changed and no
    /// confirmation is due.
    Unchanged,
    /// The mode changed; carries the confirmation notice to show.
    Switched { mode: ThemeMode, notice: Notice },
}

/// Owns the active theme selection and drives every transition.
///
/// The controller holds the selection as explicit state (no ambient
/// globals) and applies each change to a [`Page`] in a separate step. The
/// persisted selection is written through the store on every change;
/// storage failures are logged and swallowed, leaving the in-memory
/// selection authoritative for the session.
pub struct ThemeController<S> {
    mode: ThemeMode,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Restores the persisted selection and applies it to the page.
    ///
    /// An absent or unreadable stored value falls back to `dark`. Startup
    /// application emits no confirmation notice.
    pub fn start(store: S, page: &mut Page) -> Self {
        let mode = store.load().unwrap_or_default();
        debug!("restoring theme selection: {mode}");
        page.apply_theme(mode, mode.resolve());
        Self { mode, store }
    }

    /// The active selection.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The concrete appearance of the active selection.
    pub fn appearance(&self) -> ColorMode {
        self.mode.resolve()
    }

    /// Activates `mode`.
    ///
    /// Selecting the already-active mode is a no-op: no page mutation, no
    /// persistence write, no notice. Otherwise the mode is applied to the
    /// page, persisted, and a confirmation notice is returned.
    pub fn set(&mut self, mode: ThemeMode, page: &mut Page) -> ThemeOutcome {
        if mode == self.mode {
            debug!("theme {mode} already active");
            return ThemeOutcome::Unchanged;
        }

        debug!("switching theme: {} -> {mode}", self.mode);
        self.mode = mode;
        page.apply_theme(mode, mode.resolve());

        if let Err(err) = self.store.save(mode) {
            // The session keeps the new selection even when it cannot be
            // persisted; the next successful save repairs the file.
            warn!("could not persist theme selection: {err}");
        }

        ThemeOutcome::Switched {
            mode,
            notice: Notice::success(format!("Switched to {} theme", mode.display_name())),
        }
    }

    /// Advances to the next mode in the fixed cycle order.
    pub fn cycle(&mut self, page: &mut Page) -> ThemeOutcome {
        self.set(self.mode.next(), page)
    }

    /// Re-applies the resolved appearance after an OS preference change.
    ///
    /// Only a `system` selection reacts; fixed selections ignore the
    /// signal. The stored selection is not rewritten and no notice is
    /// emitted.
    pub fn on_system_change(&self, page: &mut Page) {
        if self.mode == ThemeMode::System {
            debug!("OS preference changed, re-applying system theme");
            page.apply_theme(self.mode, self.mode.resolve());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use crate::theme::adaptive::set_color_mode_detector;
    use crate::theme::store::{FileThemeStore, MemoryThemeStore};
    use serial_test::serial;

    fn controller(store: MemoryThemeStore) -> (ThemeController<MemoryThemeStore>, Page) {
        let mut page = Page::new();
        let controller = ThemeController::start(store, &mut page);
        (controller, page)
    }

    #[test]
    fn test_start_defaults_to_dark() {
        let (controller, page) = controller(MemoryThemeStore::new());
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert_eq!(page.theme_marker(), Some(ThemeMode::Dark));
        assert_eq!(page.theme_class(), Some("theme-dark"));
    }

    #[test]
    fn test_start_restores_stored_selection() {
        let (controller, page) = controller(MemoryThemeStore::with_stored(ThemeMode::Light));
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(page.active_control(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_set_applies_persists_and_confirms() {
        let (mut controller, mut page) = controller(MemoryThemeStore::new());
        let outcome = controller.set(ThemeMode::Light, &mut page);

        match outcome {
            ThemeOutcome::Switched { mode, notice } => {
                assert_eq!(mode, ThemeMode::Light);
                assert_eq!(notice.kind, NoticeKind::Success);
                assert_eq!(notice.message, "Switched to Light theme");
            }
            ThemeOutcome::Unchanged => panic!("expected a switch"),
        }
        assert_eq!(page.theme_marker(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_set_same_mode_is_noop() {
        let (mut controller, mut page) = controller(MemoryThemeStore::new());
        assert_eq!(
            controller.set(ThemeMode::Dark, &mut page),
            ThemeOutcome::Unchanged
        );
    }

    #[test]
    fn test_set_survives_storage_failure() {
        let mut page = Page::new();
        let mut controller = ThemeController::start(MemoryThemeStore::failing(), &mut page);
        let outcome = controller.set(ThemeMode::System, &mut page);
        assert!(matches!(outcome, ThemeOutcome::Switched { .. }));
        assert_eq!(controller.mode(), ThemeMode::System);
        assert_eq!(page.theme_marker(), Some(ThemeMode::System));
    }

    #[test]
    fn test_cycle_three_times_returns_to_start() {
        for start in ThemeMode::CYCLE_ORDER {
            let (mut controller, mut page) = controller(MemoryThemeStore::with_stored(start));
            controller.cycle(&mut page);
            controller.cycle(&mut page);
            controller.cycle(&mut page);
            assert_eq!(controller.mode(), start);
        }
    }

    #[test]
    fn test_set_then_reload_yields_same_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        for mode in ThemeMode::CYCLE_ORDER {
            let mut page = Page::new();
            let mut controller = ThemeController::start(FileThemeStore::at(&path), &mut page);
            controller.set(mode, &mut page);

            let mut reloaded_page = Page::new();
            let reloaded = ThemeController::start(FileThemeStore::at(&path), &mut reloaded_page);
            assert_eq!(reloaded.mode(), mode);
            assert_eq!(reloaded_page.theme_marker(), Some(mode));
        }
    }

    #[test]
    #[serial]
    fn test_system_change_reapplies_only_in_system_mode() {
        set_color_mode_detector(|| ColorMode::Dark);
        let (controller, mut page) =
            controller(MemoryThemeStore::with_stored(ThemeMode::System));
        assert_eq!(page.appearance(), Some(ColorMode::Dark));

        set_color_mode_detector(|| ColorMode::Light);
        controller.on_system_change(&mut page);
        assert_eq!(page.appearance(), Some(ColorMode::Light));
        assert_eq!(page.theme_marker(), Some(ThemeMode::System));

        set_color_mode_detector(|| ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_system_change_ignored_for_fixed_modes() {
        set_color_mode_detector(|| ColorMode::Light);
        let (controller, mut page) = controller(MemoryThemeStore::with_stored(ThemeMode::Dark));
        assert_eq!(page.appearance(), Some(ColorMode::Dark));

        controller.on_system_change(&mut page);
        assert_eq!(page.appearance(), Some(ColorMode::Dark));
    }
}
