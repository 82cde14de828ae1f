//! Viewport port — element geometry and scrolling.

/// Read access to layout and write access to the scroll position.
pub trait Viewport {
    /// Vertical offset of the element with `id`, or `None` when no element
    /// matches.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current rendered height of the fixed header.
    fn header_height(&self) -> f64;

    /// Start an animated scroll to `top`. Fire-and-forget.
    fn smooth_scroll_to(&self, top: f64);
}
