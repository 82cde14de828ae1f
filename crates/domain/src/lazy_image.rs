//! Lazy images — deferred source resolution.

/// Selector for images that load when they enter the viewport.
pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";

/// Class added once an image's real source is in place.
pub const LOADED_CLASS: &str = "loaded";

/// Source to load: the deferred `data-src` value, or the current `src` when
/// the deferred value is missing or empty.
#[must_use]
pub fn resolve_source<'a>(deferred: Option<&'a str>, current: &'a str) -> &'a str {
    match deferred {
        Some(src) if !src.is_empty() => src,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_deferred_source() {
        assert_eq!(
            resolve_source(Some("/img/hero@2x.webp"), "/img/placeholder.svg"),
            "/img/hero@2x.webp"
        );
    }

    #[test]
    fn should_fall_back_to_current_source() {
        assert_eq!(resolve_source(None, "/img/a.png"), "/img/a.png");
        assert_eq!(resolve_source(Some(""), "/img/a.png"), "/img/a.png");
    }
}
