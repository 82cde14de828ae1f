//! Anchors — in-page link classification and header-aware scroll offsets.

/// What clicking a link with a given `href` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// The bare `#` anchor: leave the browser's default behavior alone.
    Passthrough,
    /// Suppress navigation and scroll to the element with this id.
    ScrollTo(Fragment),
}

impl AnchorAction {
    /// Classify an `href`. Returns `None` for links that do not target an
    /// in-page fragment.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            Some(Self::Passthrough)
        } else {
            Some(Self::ScrollTo(Fragment(id.to_string())))
        }
    }

    /// Whether the browser's default navigation must be prevented.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::ScrollTo(_))
    }
}

/// Element id named by a fragment, without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scroll destination that leaves the target just below a fixed header.
#[must_use]
pub fn scroll_destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}
