//! Anchor scroll service — offset-aware smooth scrolling for in-page links.

use expensepilot_domain::anchor::{AnchorAction, Fragment, scroll_destination};

use crate::ports::Viewport;

/// Result of handling a link click.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorOutcome {
    /// Not an in-page link; nothing to do.
    Ignored,
    /// The bare `#` anchor; the browser handles it.
    Passthrough,
    /// Scrolled so the target sits below the header.
    Scrolled { top: f64 },
    /// No element matches the fragment. Navigation is still suppressed.
    MissingTarget(Fragment),
}

impl AnchorOutcome {
    /// Whether the click's default navigation must be prevented.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Scrolled { .. } | Self::MissingTarget(_))
    }
}

/// Controller for in-page anchor links.
pub struct AnchorScrollService<V> {
    viewport: V,
}

impl<V: Viewport> AnchorScrollService<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Handle a click on a link with the given `href`.
    ///
    /// A fragment that resolves to nothing is a silent no-op: the click is
    /// suppressed and no scroll happens.
    #[tracing::instrument(skip(self))]
    pub fn on_click(&self, href: &str) -> AnchorOutcome {
        match AnchorAction::from_href(href) {
            None => AnchorOutcome::Ignored,
            Some(AnchorAction::Passthrough) => AnchorOutcome::Passthrough,
            Some(AnchorAction::ScrollTo(fragment)) => {
                let Some(target_top) = self.viewport.element_top(fragment.id()) else {
                    tracing::debug!(%fragment, "anchor target not found");
                    return AnchorOutcome::MissingTarget(fragment);
                };
                let top = scroll_destination(target_top, self.viewport.header_height());
                self.viewport.smooth_scroll_to(top);
                AnchorOutcome::Scrolled { top }
            }
        }
    }
}
