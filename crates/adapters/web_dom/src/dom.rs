//! Element lookup helpers and capability detection.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList, Window};

use crate::error::WebError;

/// The global window.
///
/// # Errors
///
/// Returns [`WebError::NoWindow`] outside a browsing context.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`WebError::NoDocument`] when the window has none.
pub fn document(window: &Window) -> Result<Document, WebError> {
    window.document().ok_or(WebError::NoDocument)
}

/// Whether `IntersectionObserver` exists in this environment.
#[must_use]
pub fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Element with the given id, cast to `T`.
pub(crate) fn by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, WebError> {
    let selector = format!("#{id}");
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::missing(selector.clone()))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElementType { selector, expected })
}

/// First element matching `selector`, cast to `T`.
pub(crate) fn query<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, WebError> {
    document
        .query_selector(selector)
        .map_err(|err| WebError::from_js(&err))?
        .ok_or_else(|| WebError::missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElementType {
            selector: selector.to_string(),
            expected,
        })
}

/// Every element matching `selector` under the document.
pub(crate) fn query_all<T: JsCast>(
    document: &Document,
    selector: &str,
) -> Result<Vec<T>, WebError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| WebError::from_js(&err))?;
    Ok(collect(&list))
}

/// Every element matching `selector` under `root`.
pub(crate) fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, WebError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|err| WebError::from_js(&err))?;
    Ok(collect(&list))
}

/// Nodes of type `T`; others are skipped.
fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
