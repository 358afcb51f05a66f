//! Mobile menu state.

/// Events the mobile menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger toggle was activated.
    ToggleClicked,
    /// A navigation link was chosen.
    LinkChosen,
    /// A click landed outside the menu and its toggle.
    OutsideClicked,
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Applies an event, returning the next state.
    pub fn reduce(self, event: MenuEvent) -> MenuState {
        match event {
            MenuEvent::ToggleClicked => MenuState { open: !self.open },
            MenuEvent::LinkChosen | MenuEvent::OutsideClicked => MenuState { open: false },
        }
    }
}
