//! Navigation menu — the collapsible mobile menu's open/closed state.

/// Open/closed state of the collapsible navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Menu button click.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Value for the button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// What a click anywhere on the page means for the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    /// The menu button itself.
    Button,
    /// A link inside the menu.
    MenuLink,
    /// A click whose target is not inside the site header.
    Outside,
}

impl MenuState {
    /// Apply a trigger and return the resulting state.
    #[must_use]
    pub fn on(self, trigger: MenuTrigger) -> Self {
        match trigger {
            MenuTrigger::Button => self.toggled(),
            MenuTrigger::MenuLink | MenuTrigger::Outside => Self::Closed,
        }
    }
}
