//! Header shadow wiring — window scroll events.

use expensepilot_app::ports::HeaderSurface;
use expensepilot_app::services::header_service::HeaderShadowService;
use expensepilot_domain::header::HeaderShadowPolicy;
use web_sys::{Document, HtmlElement, Window};

use crate::config::DomConfig;
use crate::dom::query;
use crate::error::{WebError, describe};
use crate::listener::{EventListener, Registrations};

/// Inline `box-shadow` of the site header.
pub struct HeaderStyle {
    header: HtmlElement,
}

impl HeaderSurface for HeaderStyle {
    fn set_box_shadow(&self, value: &str) {
        if let Err(err) = self.header.style().set_property("box-shadow", value) {
            tracing::debug!(reason = %describe(&err), "failed to set header shadow");
        }
    }
}

/// Recompute the header shadow on every scroll event.
///
/// # Errors
///
/// Returns [`WebError::MissingElement`] when the header is absent.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &DomConfig,
    policy: HeaderShadowPolicy,
) -> Result<Registrations, WebError> {
    let header: HtmlElement = query(document, &config.header_selector, "HtmlElement")?;
    let service = HeaderShadowService::new(HeaderStyle { header }, policy);

    let mut registrations = Registrations::default();
    let scroller = window.clone();
    registrations.listen(EventListener::new(window, "scroll", move |_| {
        service.on_scroll(scroller.scroll_y().unwrap_or_default());
    })?);
    Ok(registrations)
}
