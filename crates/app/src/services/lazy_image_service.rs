//! Lazy image service — swap in deferred sources the first time an image
//! becomes visible.

use expensepilot_domain::lazy_image::resolve_source;

use crate::ports::ImageSurface;

/// One-shot controller: each image is loaded at most once and then no
/// longer observed.
pub struct LazyImageService<S> {
    surface: S,
}

impl<S: ImageSurface> LazyImageService<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Returns `true` when the image source was swapped by this call.
    pub fn on_intersection(&self, image: &S::Image, is_intersecting: bool) -> bool {
        if !is_intersecting || self.surface.is_loaded(image) {
            return false;
        }
        let deferred = self.surface.deferred_source(image);
        let current = self.surface.current_source(image);
        let src = resolve_source(deferred.as_deref(), &current);
        self.surface.set_source(image, src);
        self.surface.mark_loaded(image);
        self.surface.stop_observing(image);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    struct FakeImages {
        deferred: HashMap<u32, String>,
        sources: RefCell<HashMap<u32, String>>,
        swaps: RefCell<Vec<u32>>,
        loaded: RefCell<HashSet<u32>>,
        observed: RefCell<HashSet<u32>>,
    }

    impl ImageSurface for FakeImages {
        type Image = u32;

        fn is_loaded(&self, image: &u32) -> bool {
            self.loaded.borrow().contains(image)
        }

        fn deferred_source(&self, image: &u32) -> Option<String> {
            self.deferred.get(image).cloned()
        }

        fn current_source(&self, image: &u32) -> String {
            self.sources
                .borrow()
                .get(image)
                .cloned()
                .unwrap_or_default()
        }

        fn set_source(&self, image: &u32, src: &str) {
            self.swaps.borrow_mut().push(*image);
            self.sources.borrow_mut().insert(*image, src.to_string());
        }

        fn mark_loaded(&self, image: &u32) {
            self.loaded.borrow_mut().insert(*image);
        }

        fn stop_observing(&self, image: &u32) {
            self.observed.borrow_mut().remove(image);
        }
    }

    fn make_service() -> LazyImageService<FakeImages> {
        let images = FakeImages {
            deferred: HashMap::from([(1, "/img/dashboard.webp".to_string())]),
            ..FakeImages::default()
        };
        images
            .sources
            .borrow_mut()
            .insert(2, "/img/receipt.png".to_string());
        images.observed.borrow_mut().extend([1, 2]);
        LazyImageService::new(images)
    }

    #[test]
    fn should_swap_in_deferred_source() {
        let svc = make_service();
        assert!(svc.on_intersection(&1, true));
        assert_eq!(svc.surface.sources.borrow()[&1], "/img/dashboard.webp");
        assert!(svc.surface.loaded.borrow().contains(&1));
        assert!(!svc.surface.observed.borrow().contains(&1));
    }

    #[test]
    fn should_keep_current_source_without_deferred_value() {
        let svc = make_service();
        assert!(svc.on_intersection(&2, true));
        assert_eq!(svc.surface.sources.borrow()[&2], "/img/receipt.png");
    }

    #[test]
    fn should_ignore_non_intersecting_entries() {
        let svc = make_service();
        assert!(!svc.on_intersection(&1, false));
        assert!(svc.surface.swaps.borrow().is_empty());
    }

    #[test]
    fn should_swap_at_most_once() {
        let svc = make_service();
        assert!(svc.on_intersection(&1, true));
        assert!(!svc.on_intersection(&1, false));
        assert!(!svc.on_intersection(&1, true));
        assert_eq!(*svc.surface.swaps.borrow(), vec![1]);
    }
}
