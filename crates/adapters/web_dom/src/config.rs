//! Page contract — element ids, selectors and the storage key.

use expensepilot_domain::error::ValidationError;
use expensepilot_domain::lazy_image::LAZY_IMAGE_SELECTOR;
use expensepilot_domain::reveal::CARD_SELECTOR;
use serde::Deserialize;

/// Where each controller finds its elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Attribute on `<html>` carrying the theme.
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    pub menu_button_id: String,
    pub nav_menu_id: String,
    /// Class toggled on the menu while it is open.
    pub menu_open_class: String,
    pub header_selector: String,
    pub card_selector: String,
    pub lazy_image_selector: String,
    /// Id of the section holding the hero video (no `#`).
    pub media_section_id: String,
    /// Selector of the video, relative to its section.
    pub video_selector: String,
}

impl DomConfig {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("dom.storage_key", &self.storage_key),
            ("dom.theme_attribute", &self.theme_attribute),
            ("dom.theme_toggle_id", &self.theme_toggle_id),
            ("dom.menu_button_id", &self.menu_button_id),
            ("dom.nav_menu_id", &self.nav_menu_id),
            ("dom.menu_open_class", &self.menu_open_class),
            ("dom.header_selector", &self.header_selector),
            ("dom.card_selector", &self.card_selector),
            ("dom.lazy_image_selector", &self.lazy_image_selector),
            ("dom.media_section_id", &self.media_section_id),
            ("dom.video_selector", &self.video_selector),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::Empty(name));
            }
        }
        Ok(())
    }
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            theme_toggle_id: "theme-toggle".to_string(),
            menu_button_id: "mobile-menu-btn".to_string(),
            nav_menu_id: "nav-menu".to_string(),
            menu_open_class: "active".to_string(),
            header_selector: "header".to_string(),
            card_selector: CARD_SELECTOR.to_string(),
            lazy_image_selector: LAZY_IMAGE_SELECTOR.to_string(),
            media_section_id: "about".to_string(),
            video_selector: "video.about-video".to_string(),
        }
    }
}
