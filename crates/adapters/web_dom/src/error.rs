//! Browser adapter error types.

use expensepilot_domain::error::{BehaviorError, MissingElementError};
use wasm_bindgen::{JsCast, JsValue};

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Not running in a browsing context.
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A required element is absent from the page.
    #[error(transparent)]
    MissingElement(#[from] MissingElementError),

    /// An element exists but has the wrong type.
    #[error("{selector:?} is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    /// A browser API threw.
    #[error("JavaScript exception: {0}")]
    Js(String),

    /// The environment lacks a required API.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

impl WebError {
    /// Wrap a thrown JavaScript value.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(describe(value))
    }

    pub(crate) fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(MissingElementError {
            selector: selector.into(),
        })
    }
}

impl From<WebError> for BehaviorError {
    fn from(err: WebError) -> Self {
        match err {
            WebError::MissingElement(inner) => Self::MissingElement(inner),
            WebError::Unsupported(api) => Self::CapabilityUnavailable(api),
            other => Self::Environment(other.to_string()),
        }
    }
}

/// Human-readable text for a thrown JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_missing_element_error() {
        let err = WebError::missing("#theme-toggle");
        assert_eq!(err.to_string(), "no element matches \"#theme-toggle\"");
    }

    #[test]
    fn should_display_wrong_element_type() {
        let err = WebError::WrongElementType {
            selector: "#about".to_string(),
            expected: "HtmlElement",
        };
        assert_eq!(err.to_string(), "\"#about\" is not a HtmlElement");
    }

    #[test]
    fn should_convert_missing_element_to_domain() {
        let err: BehaviorError = WebError::missing("header").into();
        let BehaviorError::MissingElement(MissingElementError { selector }) = err else {
            panic!("expected a missing element, got {err:?}");
        };
        assert_eq!(selector, "header");
    }

    #[test]
    fn should_convert_unsupported_to_capability_unavailable() {
        let err: BehaviorError = WebError::Unsupported("IntersectionObserver").into();
        assert!(matches!(
            err,
            BehaviorError::CapabilityUnavailable("IntersectionObserver")
        ));
    }

    #[test]
    fn should_convert_other_errors_to_environment() {
        let err: BehaviorError = WebError::NoDocument.into();
        let BehaviorError::Environment(message) = err else {
            panic!("expected an environment error, got {err:?}");
        };
        assert_eq!(message, "window has no document");
    }
}
