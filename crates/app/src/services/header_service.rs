//! Header shadow service — recompute the header shadow on every scroll.

use expensepilot_domain::header::{HeaderShadow, HeaderShadowPolicy};

use crate::ports::HeaderSurface;

/// Stateless controller; no debouncing.
pub struct HeaderShadowService<H> {
    surface: H,
    policy: HeaderShadowPolicy,
}

impl<H: HeaderSurface> HeaderShadowService<H> {
    pub fn new(surface: H, policy: HeaderShadowPolicy) -> Self {
        Self { surface, policy }
    }

    pub fn on_scroll(&self, scroll_y: f64) -> HeaderShadow {
        let shadow = self.policy.shadow_for(scroll_y);
        self.surface.set_box_shadow(self.policy.box_shadow(shadow));
        shadow
    }
}
