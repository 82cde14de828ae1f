//! Card reveal wiring — one intersection observer for every card.

use std::rc::Rc;

use expensepilot_app::ports::CardSurface;
use expensepilot_app::services::reveal_service::RevealService;
use expensepilot_domain::reveal::{CardStyle, RevealPolicy};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::DomConfig;
use crate::dom::{query_all, supports_intersection_observer};
use crate::error::{WebError, describe};
use crate::listener::{Observer, ObserverOptions, Registrations};

/// Inline styles of the cards.
pub struct CardStyles;

impl CardSurface for CardStyles {
    type Card = HtmlElement;

    fn apply_style(&self, card: &HtmlElement, style: CardStyle) {
        let declaration = card.style();
        let mut result = declaration
            .set_property("opacity", style.opacity)
            .and_then(|()| declaration.set_property("transform", style.transform));
        if let Some(transition) = style.transition {
            result = result.and_then(|()| declaration.set_property("transition", transition));
        }
        if let Err(err) = result {
            tracing::debug!(reason = %describe(&err), "failed to style card");
        }
    }
}

/// Hide every card and show it again each time it enters the viewport.
///
/// # Errors
///
/// Returns [`WebError::Unsupported`] without touching any card when
/// `IntersectionObserver` is missing.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &DomConfig,
    policy: RevealPolicy,
) -> Result<Registrations, WebError> {
    if !supports_intersection_observer(window) {
        return Err(WebError::Unsupported("IntersectionObserver"));
    }
    let cards: Vec<HtmlElement> = query_all(document, &config.card_selector)?;
    let options = ObserverOptions {
        thresholds: vec![policy.threshold],
        root_margin: Some(policy.root_margin.clone()),
    };

    let service = Rc::new(RevealService::new(CardStyles, policy));
    let on_entry = Rc::clone(&service);
    let observer = Observer::new(&options, move |entry| {
        if let Ok(card) = entry.target().dyn_into::<HtmlElement>() {
            on_entry.on_intersection(&card, entry.is_intersecting());
        }
    })?;

    for card in &cards {
        service.prepare(card);
        observer.observe(card);
    }
    tracing::debug!(cards = cards.len(), "reveal observer attached");

    let mut registrations = Registrations::default();
    registrations.observe(observer);
    Ok(registrations)
}
