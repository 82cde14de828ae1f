//! Reveal — card styles before and after they scroll into view.

use serde::Deserialize;

use crate::error::ValidationError;

/// Selector matching every card that fades into view.
pub const CARD_SELECTOR: &str = ".feature-card, .testimonial-card, .usp-card";

/// Inline style values applied to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    /// Only set when the card is first prepared.
    pub transition: Option<&'static str>,
}

impl CardStyle {
    /// Transparent and shifted down, with the transition declared.
    pub const HIDDEN: Self = Self {
        opacity: "0",
        transform: "translateY(20px)",
        transition: Some("opacity 0.6s ease, transform 0.6s ease"),
    };

    /// Fully visible at its natural position.
    pub const SHOWN: Self = Self {
        opacity: "1",
        transform: "translateY(0)",
        transition: None,
    };
}

/// Observation options for the reveal watcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealPolicy {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS margin applied to the viewport root.
    pub root_margin: String,
}

impl RevealPolicy {
    /// Style to apply for an intersection change, if any.
    ///
    /// Every entry into the viewport yields [`CardStyle::SHOWN`]; leaving
    /// it yields nothing, so the card stays visible.
    #[must_use]
    pub fn style_for(&self, is_intersecting: bool) -> Option<CardStyle> {
        is_intersecting.then_some(CardStyle::SHOWN)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::RatioOutOfRange`] when the threshold is
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ValidationError::RatioOutOfRange {
                field: "reveal.threshold",
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_ten_percent_with_bottom_margin() {
        let policy = RevealPolicy::default();
        assert!((policy.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(policy.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn should_show_card_on_every_entry() {
        let policy = RevealPolicy::default();
        assert_eq!(policy.style_for(true), Some(CardStyle::SHOWN));
        assert_eq!(policy.style_for(false), None);
        assert_eq!(policy.style_for(true), Some(CardStyle::SHOWN));
    }

    #[test]
    fn should_start_hidden_and_offset() {
        assert_eq!(CardStyle::HIDDEN.opacity, "0");
        assert_eq!(CardStyle::HIDDEN.transform, "translateY(20px)");
        assert!(CardStyle::HIDDEN.transition.is_some());
    }

    #[test]
    fn should_reject_threshold_above_one() {
        let policy = RevealPolicy {
            threshold: 1.2,
            ..RevealPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
