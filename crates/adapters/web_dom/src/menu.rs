//! Navigation menu wiring — button, menu links and outside clicks.

use std::rc::Rc;

use expensepilot_app::ports::MenuSurface;
use expensepilot_app::services::menu_service::NavMenuService;
use expensepilot_domain::menu::MenuState;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config::DomConfig;
use crate::dom::{by_id, query_all_in};
use crate::error::{WebError, describe};
use crate::listener::{EventListener, Registrations};

/// Menu container and its toggle button.
pub struct DomMenu {
    button: Element,
    menu: Element,
    open_class: String,
}

impl MenuSurface for DomMenu {
    fn render(&self, state: MenuState) {
        let classes = self.menu.class_list();
        if let Err(err) = classes.toggle_with_force(&self.open_class, state.is_open()) {
            tracing::debug!(reason = %describe(&err), "failed to toggle menu class");
        }
        if let Err(err) = self.button.set_attribute("aria-expanded", state.aria_expanded()) {
            tracing::debug!(reason = %describe(&err), "failed to set aria-expanded");
        }
    }
}

/// Whether the click target sits inside an element matching `selector`.
fn target_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Wire the menu button, every link inside the menu and the document-wide
/// outside-click listener.
///
/// # Errors
///
/// Returns [`WebError::MissingElement`] when the button or menu is absent.
pub fn mount(document: &Document, config: &DomConfig) -> Result<Registrations, WebError> {
    let button: Element = by_id(document, &config.menu_button_id, "Element")?;
    let menu: Element = by_id(document, &config.nav_menu_id, "Element")?;
    let links: Vec<Element> = query_all_in(&menu, "a")?;

    let service = Rc::new(NavMenuService::new(DomMenu {
        button: button.clone(),
        menu,
        open_class: config.menu_open_class.clone(),
    }));

    let mut registrations = Registrations::default();

    let on_button = Rc::clone(&service);
    registrations.listen(EventListener::new(&button, "click", move |_| {
        on_button.toggle();
    })?);

    for link in &links {
        let on_link = Rc::clone(&service);
        registrations.listen(EventListener::new(link, "click", move |_| {
            on_link.close_from_link();
        })?);
    }

    let on_document = Rc::clone(&service);
    let header_selector = config.header_selector.clone();
    registrations.listen(EventListener::new(document, "click", move |event: Event| {
        on_document.on_document_click(target_within(&event, &header_selector));
    })?);

    Ok(registrations)
}
