//! Navigation menu service — open/close the collapsible mobile menu.

use std::cell::Cell;

use expensepilot_domain::menu::{MenuState, MenuTrigger};

use crate::ports::MenuSurface;

/// Controller for the mobile navigation menu. Starts closed.
pub struct NavMenuService<M> {
    surface: M,
    state: Cell<MenuState>,
}

impl<M: MenuSurface> NavMenuService<M> {
    pub fn new(surface: M) -> Self {
        Self {
            surface,
            state: Cell::new(MenuState::Closed),
        }
    }

    /// Single mutation entry point: apply `trigger` and render the result.
    #[tracing::instrument(skip(self))]
    pub fn handle(&self, trigger: MenuTrigger) -> MenuState {
        let next = self.state.get().on(trigger);
        self.state.set(next);
        self.surface.render(next);
        next
    }

    /// Menu button click.
    pub fn toggle(&self) -> MenuState {
        self.handle(MenuTrigger::Button)
    }

    /// Click on a link inside the menu.
    pub fn close_from_link(&self) -> MenuState {
        self.handle(MenuTrigger::MenuLink)
    }

    /// Click anywhere on the document. Closes the menu unless the click
    /// landed inside the site header.
    pub fn on_document_click(&self, inside_header: bool) -> MenuState {
        if inside_header {
            return self.state.get();
        }
        self.handle(MenuTrigger::Outside)
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }
}
