//! Configuration loading — inline JSON document with defaults.
//!
//! Looks for `<script type="application/json" id="site-config">` in the
//! page. Every field has a default matching the stock markup, so the
//! element is optional and may override any subset of fields.

use expensepilot_adapter_web_dom::DomConfig;
use expensepilot_domain::error::ValidationError;
use expensepilot_domain::header::HeaderShadowPolicy;
use expensepilot_domain::media::PlaybackPolicy;
use expensepilot_domain::reveal::RevealPolicy;
use serde::Deserialize;
use web_sys::Document;

/// Id of the inline configuration element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Element ids, selectors and the storage key.
    pub dom: DomConfig,
    /// Thresholds and styles of the visibility controllers.
    pub behavior: BehaviorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Tunables of the scroll and visibility controllers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub reveal: RevealPolicy,
    pub header: HeaderShadowPolicy,
    pub media: PlaybackPolicy,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load the inline configuration from `document`, or the defaults when
    /// the page has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but holds malformed or
    /// invalid JSON.
    pub fn load(document: &Document) -> Result<Self, ConfigError> {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());
        match text {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] when a value breaks an invariant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.dom.validate()?;
        self.behavior.reveal.validate()?;
        self.behavior.header.validate()?;
        self.behavior.media.validate()?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse site configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid site configuration")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.dom.storage_key, "theme");
        assert_eq!(config.dom.media_section_id, "about");
        let behavior = &config.behavior;
        assert!((behavior.header.threshold - 10.0).abs() < f64::EPSILON);
        assert!((behavior.media.play_above - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_empty_object() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config.dom.theme_toggle_id, "theme-toggle");
        assert_eq!(config.behavior.reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn should_parse_full_document() {
        let json = r#"{
            "dom": { "storage_key": "ep-theme", "header_selector": ".site-header" },
            "behavior": {
                "reveal": { "threshold": 0.25, "root_margin": "0px" },
                "header": { "threshold": 40 },
                "media": { "thresholds": [0.0, 0.5], "play_above": 0.5 }
            },
            "logging": { "filter": "debug" }
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.dom.storage_key, "ep-theme");
        assert_eq!(config.dom.header_selector, ".site-header");
        assert_eq!(config.dom.nav_menu_id, "nav-menu");
        let behavior = &config.behavior;
        assert!((behavior.reveal.threshold - 0.25).abs() < f64::EPSILON);
        assert!((behavior.header.threshold - 40.0).abs() < f64::EPSILON);
        assert_eq!(
            config.behavior.header.raised,
            "0 2px 12px rgba(0, 0, 0, 0.12)"
        );
        assert_eq!(config.behavior.media.thresholds, vec![0.0, 0.5]);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_report_parse_error_for_invalid_json() {
        let result = SiteConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_reject_out_of_range_reveal_threshold() {
        let result = SiteConfig::from_json(r#"{"behavior": {"reveal": {"threshold": 2.0}}}"#);
        let Err(ConfigError::Validation(err)) = result else {
            panic!("expected a validation error");
        };
        assert!(matches!(err, ValidationError::RatioOutOfRange { .. }));
    }

    #[test]
    fn should_reject_empty_media_thresholds() {
        let result = SiteConfig::from_json(r#"{"behavior": {"media": {"thresholds": []}}}"#);
        let Err(ConfigError::Validation(err)) = result else {
            panic!("expected a validation error");
        };
        assert_eq!(err, ValidationError::Empty("media.thresholds"));
    }

    #[test]
    fn should_reject_blank_element_id() {
        let result = SiteConfig::from_json(r#"{"dom": {"nav_menu_id": ""}}"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
