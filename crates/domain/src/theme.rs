//! Theme — the dark/light display preference and its tracking/pinned state.

use std::str::FromStr;

use crate::error::ValidationError;

/// The binary visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Pick the theme matching the environment's color-scheme signal.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to storage and to the document's `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Label for the toggle control, describing the state one click away.
    #[must_use]
    pub fn toggle_label(self) -> ToggleLabel {
        match self {
            Self::Dark => ToggleLabel {
                icon: "\u{2600}\u{FE0F}",
                title: "Light mode",
            },
            Self::Light => ToggleLabel {
                icon: "\u{1F319}",
                title: "Dark mode",
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ValidationError::UnknownTheme(other.to_string())),
        }
    }
}

/// Icon and tooltip shown on the theme toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLabel {
    pub icon: &'static str,
    pub title: &'static str,
}

/// Whether the theme follows the environment or was chosen by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// No explicit choice recorded: follows the system preference live.
    #[default]
    Tracking,
    /// Explicit choice recorded: ignores system preference changes.
    Pinned,
}

/// Current theme together with how it was decided.
///
/// All transitions go through the methods below; the mode only ever moves
/// from [`ThemeMode::Tracking`] to [`ThemeMode::Pinned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    mode: ThemeMode,
}

impl ThemeState {
    /// Resolve the startup state from the stored preference, falling back to
    /// the environment's color scheme when nothing is stored.
    #[must_use]
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => Self {
                theme,
                mode: ThemeMode::Pinned,
            },
            None => Self {
                theme: Theme::from_prefers_dark(system_prefers_dark),
                mode: ThemeMode::Tracking,
            },
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.mode == ThemeMode::Pinned
    }

    /// Record an explicit choice. Pins the state.
    pub fn choose(&mut self, theme: Theme) {
        self.theme = theme;
        self.mode = ThemeMode::Pinned;
    }

    /// Flip the theme as an explicit choice and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.choose(self.theme.toggled());
        self.theme
    }

    /// React to a system preference change.
    ///
    /// Returns the theme to apply while tracking, `None` once pinned.
    pub fn follow_system(&mut self, prefers_dark: bool) -> Option<Theme> {
        match self.mode {
            ThemeMode::Pinned => None,
            ThemeMode::Tracking => {
                self.theme = Theme::from_prefers_dark(prefers_dark);
                Some(self.theme)
            }
        }
    }

    /// Drop back to tracking, e.g. after the stored preference was cleared
    /// outside of this page.
    pub fn release(&mut self) {
        self.mode = ThemeMode::Tracking;
    }
}
