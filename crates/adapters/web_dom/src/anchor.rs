//! Anchor scroll wiring — smooth, header-aware scrolling for `a[href^="#"]`.

use std::rc::Rc;

use expensepilot_app::ports::Viewport;
use expensepilot_app::services::anchor_service::{AnchorOutcome, AnchorScrollService};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::DomConfig;
use crate::dom::{query, query_all};
use crate::error::WebError;
use crate::listener::{EventListener, Registrations};

const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";

/// Window scrolling plus the fixed header's geometry.
pub struct WindowViewport {
    window: Window,
    document: Document,
    header: HtmlElement,
}

impl Viewport for WindowViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        let target = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(target.offset_top()))
    }

    fn header_height(&self) -> f64 {
        f64::from(self.header.offset_height())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Intercept clicks on every in-page link.
///
/// # Errors
///
/// Returns [`WebError::MissingElement`] when the header is absent.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &DomConfig,
) -> Result<Registrations, WebError> {
    let header: HtmlElement = query(document, &config.header_selector, "HtmlElement")?;
    let links: Vec<Element> = query_all(document, IN_PAGE_LINKS)?;

    let service = Rc::new(AnchorScrollService::new(WindowViewport {
        window: window.clone(),
        document: document.clone(),
        header,
    }));

    let mut registrations = Registrations::default();
    for link in links {
        let on_click = Rc::clone(&service);
        let href_source = link.clone();
        registrations.listen(EventListener::new(&link, "click", move |event: Event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let outcome = on_click.on_click(&href);
            if outcome.suppresses_default() {
                event.prevent_default();
            }
            if let AnchorOutcome::Scrolled { top } = outcome {
                tracing::debug!(%href, top, "scrolling to anchor");
            }
        })?);
    }
    Ok(registrations)
}
