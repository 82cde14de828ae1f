//! Header shadow — stronger drop shadow once the page has scrolled.

use serde::Deserialize;

use crate::error::ValidationError;

/// Which shadow the header currently wears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShadow {
    /// At or near the top of the page.
    Resting,
    /// Scrolled past the threshold.
    Raised,
}

/// Threshold and `box-shadow` values for the header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderShadowPolicy {
    /// Vertical scroll offset in pixels above which the header is raised.
    pub threshold: f64,
    pub raised: String,
    pub resting: String,
}

impl HeaderShadowPolicy {
    /// Select the shadow for a scroll offset. Stateless.
    #[must_use]
    pub fn shadow_for(&self, scroll_y: f64) -> HeaderShadow {
        if scroll_y > self.threshold {
            HeaderShadow::Raised
        } else {
            HeaderShadow::Resting
        }
    }

    #[must_use]
    pub fn box_shadow(&self, shadow: HeaderShadow) -> &str {
        match shadow {
            HeaderShadow::Raised => &self.raised,
            HeaderShadow::Resting => &self.resting,
        }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] for a negative threshold.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.threshold < 0.0 {
            return Err(ValidationError::Negative {
                field: "header.threshold",
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for HeaderShadowPolicy {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            raised: "0 2px 12px rgba(0, 0, 0, 0.12)".to_string(),
            resting: "0 1px 3px rgba(0, 0, 0, 0.08)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_rest_at_threshold() {
        let policy = HeaderShadowPolicy::default();
        assert_eq!(policy.shadow_for(0.0), HeaderShadow::Resting);
        assert_eq!(policy.shadow_for(10.0), HeaderShadow::Resting);
    }

    #[test]
    fn should_raise_above_threshold() {
        let policy = HeaderShadowPolicy::default();
        assert_eq!(policy.shadow_for(10.5), HeaderShadow::Raised);
        assert_eq!(
            policy.box_shadow(HeaderShadow::Raised),
            "0 2px 12px rgba(0, 0, 0, 0.12)"
        );
    }

    #[test]
    fn should_reject_negative_threshold() {
        let policy = HeaderShadowPolicy {
            threshold: -1.0,
            ..HeaderShadowPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(ValidationError::Negative { .. })
        ));
    }
}
