//! Theme service — resolve, apply, toggle and follow the system preference.

use std::cell::Cell;

use expensepilot_domain::theme::{Theme, ThemeMode, ThemeState};

use crate::failure;
use crate::ports::{ColorScheme, PreferenceStore, ThemeSurface};

/// Controller for the dark/light theme.
///
/// Holds the [`ThemeState`] and is the single entry point for every theme
/// transition. Storage is written only for explicit choices
/// ([`apply_theme`](Self::apply_theme), [`toggle`](Self::toggle)); the startup
/// render and system changes leave it untouched so the theme keeps tracking
/// the system until the visitor picks one. Storage failures are logged and
/// swallowed: the page keeps working with an in-memory preference.
pub struct ThemeService<S, C, U> {
    store: S,
    scheme: C,
    surface: U,
    state: Cell<ThemeState>,
}

impl<S: PreferenceStore, C: ColorScheme, U: ThemeSurface> ThemeService<S, C, U> {
    /// Create the service and resolve the startup state. Nothing is
    /// rendered until [`start`](Self::start) is called.
    pub fn new(store: S, scheme: C, surface: U) -> Self {
        let state = ThemeState::resolve(stored_theme(&store), scheme.prefers_dark());
        Self {
            store,
            scheme,
            surface,
            state: Cell::new(state),
        }
    }

    /// Read the stored preference, falling back to the environment's
    /// color scheme. Never fails.
    pub fn resolve_initial_theme(&self) -> Theme {
        let state = ThemeState::resolve(stored_theme(&self.store), self.scheme.prefers_dark());
        state.theme()
    }

    /// Render the resolved startup theme.
    ///
    /// A tracked theme is not written to storage so that later system
    /// changes keep applying.
    pub fn start(&self) -> Theme {
        let state = self.state.get();
        self.render(state.theme());
        tracing::debug!(theme = %state.theme(), mode = ?state.mode(), "theme resolved");
        state.theme()
    }

    /// Apply an explicit choice: render it, persist it, pin the state.
    pub fn apply_theme(&self, theme: Theme) {
        let mut state = self.state.get();
        state.choose(theme);
        self.state.set(state);
        self.render(theme);
        self.persist(theme);
    }

    /// Flip the current theme as an explicit choice.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&self) -> Theme {
        let next = self.state.get().theme().toggled();
        self.apply_theme(next);
        next
    }

    /// React to a change of the environment's color scheme.
    ///
    /// Only applies while no preference is stored. Returns the applied
    /// theme, or `None` when the state is pinned.
    #[tracing::instrument(skip(self))]
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        let mut state = self.state.get();
        match read_preference(&self.store) {
            Stored::Present(_) => {
                tracing::debug!("theme pinned, ignoring system preference change");
                return None;
            }
            // Preference was cleared outside this page.
            Stored::Absent if state.is_pinned() => state.release(),
            Stored::Absent | Stored::Unreadable => {}
        }
        let applied = state.follow_system(prefers_dark);
        self.state.set(state);
        if let Some(theme) = applied {
            self.render(theme);
        }
        applied
    }

    pub fn theme(&self) -> Theme {
        self.state.get().theme()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.get().mode()
    }

    fn render(&self, theme: Theme) {
        self.surface.set_document_theme(theme);
        self.surface.set_toggle_label(theme.toggle_label());
    }

    fn persist(&self, theme: Theme) {
        if let Err(err) = self.store.save(theme.as_str()) {
            failure::swallow("persist theme preference", err);
        }
    }
}

enum Stored {
    Present(Theme),
    Absent,
    Unreadable,
}

/// Unknown stored values count as absent.
fn read_preference<S: PreferenceStore>(store: &S) -> Stored {
    match store.load() {
        Ok(Some(raw)) => match raw.parse() {
            Ok(theme) => Stored::Present(theme),
            Err(err) => {
                failure::swallow("stored theme preference", err);
                Stored::Absent
            }
        },
        Ok(None) => Stored::Absent,
        Err(err) => {
            failure::swallow("read theme preference", err);
            Stored::Unreadable
        }
    }
}

fn stored_theme<S: PreferenceStore>(store: &S) -> Option<Theme> {
    match read_preference(store) {
        Stored::Present(theme) => Some(theme),
        Stored::Absent | Stored::Unreadable => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expensepilot_domain::error::StorageError;
    use expensepilot_domain::theme::ToggleLabel;
    use std::cell::RefCell;

    #[derive(Default)]
    struct InMemoryStore {
        value: RefCell<Option<String>>,
        broken: bool,
    }

    impl PreferenceStore for InMemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError {
                    operation: "read",
                    reason: "SecurityError".to_string(),
                });
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError {
                    operation: "write",
                    reason: "SecurityError".to_string(),
                });
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    struct FixedScheme(bool);

    impl ColorScheme for FixedScheme {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        theme: Cell<Option<Theme>>,
        label: Cell<Option<ToggleLabel>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn set_document_theme(&self, theme: Theme) {
            self.theme.set(Some(theme));
        }

        fn set_toggle_label(&self, label: ToggleLabel) {
            self.label.set(Some(label));
        }
    }

    fn make_service(
        stored: Option<&str>,
        prefers_dark: bool,
    ) -> ThemeService<InMemoryStore, FixedScheme, RecordingSurface> {
        let store = InMemoryStore {
            value: RefCell::new(stored.map(str::to_string)),
            broken: false,
        };
        ThemeService::new(
            store,
            FixedScheme(prefers_dark),
            RecordingSurface::default(),
        )
    }

    #[test]
    fn should_resolve_stored_theme_over_system() {
        let svc = make_service(Some("light"), true);
        assert_eq!(svc.resolve_initial_theme(), Theme::Light);
    }

    #[test]
    fn should_resolve_system_theme_when_nothing_stored() {
        let dark = make_service(None, true);
        assert_eq!(dark.resolve_initial_theme(), Theme::Dark);
        let light = make_service(None, false);
        assert_eq!(light.resolve_initial_theme(), Theme::Light);
    }

    #[test]
    fn should_treat_unknown_stored_value_as_absent() {
        let svc = make_service(Some("sepia"), true);
        assert_eq!(svc.resolve_initial_theme(), Theme::Dark);
        assert_eq!(svc.mode(), ThemeMode::Tracking);
    }

    #[test]
    fn should_render_without_persisting_on_start_while_tracking() {
        let svc = make_service(None, true);
        assert_eq!(svc.start(), Theme::Dark);
        assert_eq!(svc.surface.theme.get(), Some(Theme::Dark));
        assert_eq!(svc.surface.label.get(), Some(Theme::Dark.toggle_label()));
        assert!(svc.store.value.borrow().is_none());
    }

    #[test]
    fn should_persist_and_pin_on_apply() {
        let svc = make_service(None, false);
        svc.apply_theme(Theme::Dark);
        assert_eq!(svc.store.value.borrow().as_deref(), Some("dark"));
        assert_eq!(svc.mode(), ThemeMode::Pinned);
        assert_eq!(svc.resolve_initial_theme(), Theme::Dark);
    }

    #[test]
    fn should_flip_theme_on_toggle() {
        let svc = make_service(Some("dark"), false);
        svc.start();
        assert_eq!(svc.toggle(), Theme::Light);
        assert_eq!(svc.surface.theme.get(), Some(Theme::Light));
        assert_eq!(svc.surface.label.get().map(|l| l.title), Some("Dark mode"));
        assert_eq!(svc.toggle(), Theme::Dark);
    }

    #[test]
    fn should_follow_system_while_tracking() {
        let svc = make_service(None, false);
        svc.start();
        assert_eq!(svc.on_system_change(true), Some(Theme::Dark));
        assert_eq!(svc.surface.theme.get(), Some(Theme::Dark));
        assert!(svc.store.value.borrow().is_none());
    }

    #[test]
    fn should_ignore_system_after_explicit_toggle() {
        let svc = make_service(None, false);
        svc.start();
        assert_eq!(svc.toggle(), Theme::Dark);
        assert_eq!(svc.on_system_change(false), None);
        assert_eq!(svc.theme(), Theme::Dark);
        assert_eq!(svc.surface.theme.get(), Some(Theme::Dark));
    }

    #[test]
    fn should_track_again_when_storage_cleared_externally() {
        let svc = make_service(Some("dark"), true);
        svc.start();
        svc.store.value.borrow_mut().take();
        assert_eq!(svc.on_system_change(false), Some(Theme::Light));
        assert_eq!(svc.mode(), ThemeMode::Tracking);
    }

    #[test]
    fn should_keep_working_when_storage_is_unavailable() {
        let store = InMemoryStore {
            value: RefCell::new(None),
            broken: true,
        };
        let svc = ThemeService::new(store, FixedScheme(true), RecordingSurface::default());
        assert_eq!(svc.start(), Theme::Dark);
        assert_eq!(svc.toggle(), Theme::Light);
        assert_eq!(svc.surface.theme.get(), Some(Theme::Light));
        assert_eq!(svc.on_system_change(true), None);
        assert_eq!(svc.theme(), Theme::Light);
    }
}
