//! Theme controller wiring — `localStorage`, `prefers-color-scheme` and the
//! toggle button.

use std::rc::Rc;

use expensepilot_app::ports::{ColorScheme, PreferenceStore, ThemeSurface};
use expensepilot_app::services::theme_service::ThemeService;
use expensepilot_domain::error::StorageError;
use expensepilot_domain::theme::{Theme, ToggleLabel};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, MediaQueryList, MediaQueryListEvent, Storage, Window,
};

use crate::config::DomConfig;
use crate::dom::by_id;
use crate::error::{WebError, describe};
use crate::listener::{EventListener, Registrations};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference persisted in `localStorage` under a fixed key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage(operation: &'static str) -> Result<Storage, StorageError> {
    let unavailable = |reason: String| StorageError { operation, reason };
    web_sys::window()
        .ok_or_else(|| unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|err| unavailable(describe(&err)))?
        .ok_or_else(|| unavailable("localStorage disabled".to_string()))
}

fn storage_error(operation: &'static str, err: &JsValue) -> StorageError {
    StorageError {
        operation,
        reason: describe(err),
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage("read")?
            .get_item(&self.key)
            .map_err(|err| storage_error("read", &err))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        local_storage("write")?
            .set_item(&self.key, value)
            .map_err(|err| storage_error("write", &err))
    }
}

/// The `prefers-color-scheme: dark` media query. Reports light when the
/// browser does not support it.
pub struct MediaQueryColorScheme {
    list: Option<MediaQueryList>,
}

impl ColorScheme for MediaQueryColorScheme {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().is_some_and(MediaQueryList::matches)
    }
}

/// `<html>` presentation attribute and the toggle button.
pub struct DocumentTheme {
    root: Element,
    toggle: HtmlElement,
    attribute: String,
}

impl ThemeSurface for DocumentTheme {
    fn set_document_theme(&self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            tracing::debug!(reason = %describe(&err), "failed to set theme attribute");
        }
    }

    fn set_toggle_label(&self, label: ToggleLabel) {
        self.toggle.set_text_content(Some(label.icon));
        self.toggle.set_title(label.title);
    }
}

/// Apply the resolved theme and wire the toggle button and the system
/// preference listener.
///
/// # Errors
///
/// Returns [`WebError::MissingElement`] when the toggle control or the
/// document root is absent.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &DomConfig,
) -> Result<Registrations, WebError> {
    let toggle: HtmlElement = by_id(document, &config.theme_toggle_id, "HtmlElement")?;
    let root = document
        .document_element()
        .ok_or_else(|| WebError::missing("html"))?;
    let scheme = window
        .match_media(DARK_SCHEME_QUERY)
        .map_err(|err| WebError::from_js(&err))?;

    let service = Rc::new(ThemeService::new(
        LocalStorageStore::new(config.storage_key.as_str()),
        MediaQueryColorScheme {
            list: scheme.clone(),
        },
        DocumentTheme {
            root,
            toggle: toggle.clone(),
            attribute: config.theme_attribute.clone(),
        },
    ));
    service.start();

    let mut registrations = Registrations::default();

    let on_click = Rc::clone(&service);
    registrations.listen(EventListener::new(&toggle, "click", move |_| {
        let theme = on_click.toggle();
        tracing::debug!(%theme, "theme toggled");
    })?);

    if let Some(list) = scheme {
        let on_change = Rc::clone(&service);
        let fallback = list.clone();
        registrations.listen(EventListener::new(&list, "change", move |event: Event| {
            let prefers_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| fallback.matches(), MediaQueryListEvent::matches);
            if let Some(theme) = on_change.on_system_change(prefers_dark) {
                tracing::debug!(%theme, "theme follows system preference");
            }
        })?);
    } else {
        tracing::debug!(
            "prefers-color-scheme unsupported, theme will not track the system"
        );
    }

    Ok(registrations)
}
