//! Listener and observer guards.
//!
//! Callbacks handed to the browser must outlive the registration. Each guard
//! owns its closure and unregisters it on drop.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::WebError;

/// An event listener that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Js`] if the browser refuses the registration.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, WebError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| WebError::from_js(&err))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Options for an intersection observer.
#[derive(Debug, Clone, Default)]
pub struct ObserverOptions {
    /// Visible ratios that trigger the callback. Empty means the browser default.
    pub thresholds: Vec<f64>,
    pub root_margin: Option<String>,
}

impl ObserverOptions {
    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        match self.thresholds.as_slice() {
            [] => {}
            [single] => init.set_threshold(&JsValue::from_f64(*single)),
            many => {
                let list: Array = many.iter().map(|t| JsValue::from_f64(*t)).collect();
                init.set_threshold(&list);
            }
        }
        if let Some(margin) = &self.root_margin {
            init.set_root_margin(margin);
        }
        init
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An intersection observer that is disconnected when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Observer {
    /// Create an observer calling `handler` once per reported entry.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Js`] if the options are rejected (e.g. a
    /// malformed root margin).
    pub fn new(
        options: &ObserverOptions,
        mut handler: impl FnMut(&IntersectionObserverEntry) + 'static,
    ) -> Result<Self, WebError> {
        let callback = EntryCallback::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry);
                }
            }
        });
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options.to_init(),
        )
        .map_err(|err| WebError::from_js(&err))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Handle usable from inside the callback, e.g. to unobserve a target.
    #[must_use]
    pub fn handle(&self) -> IntersectionObserver {
        self.observer.clone()
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything a mounted controller registered with the browser.
#[derive(Default)]
pub struct Registrations {
    listeners: Vec<EventListener>,
    observers: Vec<Observer>,
}

impl Registrations {
    pub(crate) fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub(crate) fn observe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// Absorb another controller's registrations.
    pub fn extend(&mut self, other: Registrations) {
        self.listeners.extend(other.listeners);
        self.observers.extend(other.observers);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
