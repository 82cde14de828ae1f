//! Lazy image wiring — load deferred sources on first intersection.

use std::cell::OnceCell;
use std::rc::Rc;

use expensepilot_app::ports::ImageSurface;
use expensepilot_app::services::lazy_image_service::LazyImageService;
use expensepilot_domain::lazy_image::LOADED_CLASS;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, IntersectionObserver, Window};

use crate::config::DomConfig;
use crate::dom::{query_all, supports_intersection_observer};
use crate::error::{WebError, describe};
use crate::listener::{Observer, ObserverOptions, Registrations};

/// Lazily loaded `<img>` elements and the observer watching them.
pub struct DomImages {
    observer: Rc<OnceCell<IntersectionObserver>>,
}

impl ImageSurface for DomImages {
    type Image = HtmlImageElement;

    fn is_loaded(&self, image: &HtmlImageElement) -> bool {
        image.class_list().contains(LOADED_CLASS)
    }

    fn deferred_source(&self, image: &HtmlImageElement) -> Option<String> {
        image.get_attribute("data-src")
    }

    fn current_source(&self, image: &HtmlImageElement) -> String {
        image.src()
    }

    fn set_source(&self, image: &HtmlImageElement, src: &str) {
        image.set_src(src);
    }

    fn mark_loaded(&self, image: &HtmlImageElement) {
        if let Err(err) = image.class_list().add_1(LOADED_CLASS) {
            tracing::debug!(reason = %describe(&err), "failed to mark image loaded");
        }
    }

    fn stop_observing(&self, image: &HtmlImageElement) {
        if let Some(observer) = self.observer.get() {
            observer.unobserve(image);
        }
    }
}

/// Observe every lazy image until it has loaded once.
///
/// # Errors
///
/// Returns [`WebError::Unsupported`] when `IntersectionObserver` is missing;
/// images then rely on the browser's native `loading` attribute.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &DomConfig,
) -> Result<Registrations, WebError> {
    if !supports_intersection_observer(window) {
        return Err(WebError::Unsupported("IntersectionObserver"));
    }
    let images: Vec<HtmlImageElement> = query_all(document, &config.lazy_image_selector)?;

    let handle = Rc::new(OnceCell::new());
    let service = LazyImageService::new(DomImages {
        observer: Rc::clone(&handle),
    });
    let observer = Observer::new(&ObserverOptions::default(), move |entry| {
        if let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() {
            service.on_intersection(&image, entry.is_intersecting());
        }
    })?;
    let _ = handle.set(observer.handle());

    for image in &images {
        observer.observe(image);
    }
    tracing::debug!(images = images.len(), "lazy image observer attached");

    let mut registrations = Registrations::default();
    registrations.observe(observer);
    Ok(registrations)
}
