//! Reveal service — fade cards into view as they enter the viewport.

use expensepilot_domain::reveal::{CardStyle, RevealPolicy};

use crate::ports::CardSurface;

/// Controller for scroll-triggered card reveals.
///
/// Cards stay observed: every entry into the viewport re-applies the shown
/// style. Contrast with
/// [`LazyImageService`](super::lazy_image_service::LazyImageService), which
/// is one-shot.
pub struct RevealService<S> {
    surface: S,
    policy: RevealPolicy,
}

impl<S: CardSurface> RevealService<S> {
    pub fn new(surface: S, policy: RevealPolicy) -> Self {
        Self { surface, policy }
    }

    /// Hide a card and declare its transition. Called once per card at
    /// startup, before observation begins.
    pub fn prepare(&self, card: &S::Card) {
        self.surface.apply_style(card, CardStyle::HIDDEN);
    }

    /// Returns `true` when the card was (re)shown.
    pub fn on_intersection(&self, card: &S::Card, is_intersecting: bool) -> bool {
        match self.policy.style_for(is_intersecting) {
            Some(style) => {
                self.surface.apply_style(card, style);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeCards {
        styles: RefCell<HashMap<u32, Vec<CardStyle>>>,
    }

    impl CardSurface for FakeCards {
        type Card = u32;

        fn apply_style(&self, card: &u32, style: CardStyle) {
            self.styles
                .borrow_mut()
                .entry(*card)
                .or_default()
                .push(style);
        }
    }

    fn make_service() -> RevealService<FakeCards> {
        RevealService::new(FakeCards::default(), RevealPolicy::default())
    }

    #[test]
    fn should_hide_card_when_prepared() {
        let svc = make_service();
        svc.prepare(&1);
        assert_eq!(svc.surface.styles.borrow()[&1], vec![CardStyle::HIDDEN]);
    }

    #[test]
    fn should_show_card_on_intersection() {
        let svc = make_service();
        svc.prepare(&1);
        assert!(svc.on_intersection(&1, true));
        let styles = svc.surface.styles.borrow();
        let last = styles[&1].last().unwrap();
        assert_eq!(last.opacity, "1");
        assert_eq!(last.transform, "translateY(0)");
    }

    #[test]
    fn should_replay_on_every_reentry() {
        let svc = make_service();
        svc.prepare(&7);
        assert!(svc.on_intersection(&7, true));
        assert!(!svc.on_intersection(&7, false));
        assert!(svc.on_intersection(&7, true));
        assert_eq!(
            svc.surface.styles.borrow()[&7],
            vec![CardStyle::HIDDEN, CardStyle::SHOWN, CardStyle::SHOWN]
        );
    }
}
