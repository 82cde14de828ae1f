//! Surface ports — the page elements each controller mutates.

use std::rc::Rc;

use expensepilot_domain::menu::MenuState;
use expensepilot_domain::reveal::CardStyle;
use expensepilot_domain::theme::{Theme, ToggleLabel};

/// Document root and theme toggle control.
pub trait ThemeSurface {
    /// Write the theme to the document's presentation attribute.
    fn set_document_theme(&self, theme: Theme);

    /// Update the toggle control's icon and tooltip.
    fn set_toggle_label(&self, label: ToggleLabel);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for Rc<T> {
    fn set_document_theme(&self, theme: Theme) {
        (**self).set_document_theme(theme);
    }

    fn set_toggle_label(&self, label: ToggleLabel) {
        (**self).set_toggle_label(label);
    }
}

/// Menu container and its toggle button.
pub trait MenuSurface {
    /// Reflect `state` in the container's state class and the button's
    /// `aria-expanded` attribute.
    fn render(&self, state: MenuState);
}

impl<T: MenuSurface + ?Sized> MenuSurface for Rc<T> {
    fn render(&self, state: MenuState) {
        (**self).render(state);
    }
}

/// The fixed site header.
pub trait HeaderSurface {
    fn set_box_shadow(&self, value: &str);
}

/// Cards that fade into view.
pub trait CardSurface {
    type Card;

    fn apply_style(&self, card: &Self::Card, style: CardStyle);
}

/// Images whose real source is deferred until they are visible.
pub trait ImageSurface {
    type Image;

    /// Whether the image already carries the loaded marker.
    fn is_loaded(&self, image: &Self::Image) -> bool;

    /// The deferred source (`data-src`), if set.
    fn deferred_source(&self, image: &Self::Image) -> Option<String>;

    fn current_source(&self, image: &Self::Image) -> String;

    fn set_source(&self, image: &Self::Image, src: &str);

    fn mark_loaded(&self, image: &Self::Image);

    /// Stop watching the image for intersection changes.
    fn stop_observing(&self, image: &Self::Image);
}
