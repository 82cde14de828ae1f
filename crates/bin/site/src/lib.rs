//! # expensepilot-site — page entry point
//!
//! Composition root compiled to WebAssembly and started by the page.
//!
//! ## Responsibilities
//! - Load configuration (inline JSON, defaults otherwise)
//! - Install the console `tracing` subscriber
//! - Report page reloads
//! - Mount every controller independently: a controller whose required
//!   elements or capabilities are missing is skipped, the others still run
//! - Keep the registered listeners and observers alive until `unmount`
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the browser adapter and the
//! domain together. It is the wiring layer — no page logic belongs here.

mod config;

use std::cell::RefCell;

use expensepilot_adapter_web_dom::{
    Registrations, WebError, anchor, header, lazy_image, logging, media, menu, navigation, reveal,
    theme,
};
use expensepilot_app::failure;
use expensepilot_domain::error::BehaviorError;
use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub use config::{ConfigError, SiteConfig};

thread_local! {
    static MOUNTED: RefCell<Option<Registrations>> = const { RefCell::new(None) };
}

/// Entry point run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    let Ok(window) = expensepilot_adapter_web_dom::window() else {
        return;
    };
    let Ok(document) = expensepilot_adapter_web_dom::document(&window) else {
        return;
    };

    let (config, config_error) = match SiteConfig::load(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::warn!(error = ?err, "invalid site configuration, using defaults");
    }

    navigation::report(&window);

    let registrations = mount_all(&window, &document, config);
    MOUNTED.with(|mounted| {
        mounted.replace(Some(registrations));
    });
}

/// Remove every listener and disconnect every observer.
#[wasm_bindgen]
pub fn unmount() {
    let previous = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if previous.is_some() {
        tracing::info!("site behavior unmounted");
    }
}

fn mount_all(window: &Window, document: &Document, config: SiteConfig) -> Registrations {
    let SiteConfig { dom, behavior, .. } = config;
    let controllers: [(&str, Result<Registrations, WebError>); 7] = [
        ("theme", theme::mount(window, document, &dom)),
        ("menu", menu::mount(document, &dom)),
        ("anchors", anchor::mount(window, document, &dom)),
        ("reveal", reveal::mount(window, document, &dom, behavior.reveal)),
        ("header", header::mount(window, document, &dom, behavior.header)),
        ("lazy_images", lazy_image::mount(window, document, &dom)),
        ("media", media::mount(window, document, &dom, behavior.media)),
    ];

    let mut all = Registrations::default();
    for (controller, result) in controllers {
        match result {
            Ok(registrations) => all.extend(registrations),
            Err(err) => report_skipped(controller, err),
        }
    }
    tracing::info!(
        listeners = all.listener_count(),
        observers = all.observer_count(),
        "site behavior mounted"
    );
    all
}

/// Convert a mount failure and pick the level its skip is logged at.
fn classify_skip(err: WebError) -> (BehaviorError, Level) {
    let err = BehaviorError::from(err);
    let level = failure::severity(&err);
    (err, level)
}

fn report_skipped(controller: &str, err: WebError) {
    let (err, level) = classify_skip(err);
    if level == Level::DEBUG {
        tracing::debug!(controller, error = %err, "controller skipped");
    } else {
        tracing::warn!(controller, error = %err, "controller skipped");
    }
}
