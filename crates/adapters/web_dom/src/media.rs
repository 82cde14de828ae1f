//! Hero video wiring — play while its section is visible.

use std::rc::Rc;

use expensepilot_app::ports::MediaPlayer;
use expensepilot_app::services::media_service::MediaVisibilityService;
use expensepilot_domain::error::PlaybackError;
use expensepilot_domain::media::PlaybackPolicy;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement, Window};

use crate::config::DomConfig;
use crate::dom::supports_intersection_observer;
use crate::error::{WebError, describe};
use crate::listener::{Observer, ObserverOptions, Registrations};

/// The hero `<video>` element.
pub struct VideoPlayer {
    video: HtmlVideoElement,
}

impl MediaPlayer for VideoPlayer {
    fn play(&self) -> Result<(), PlaybackError> {
        let promise = self.video.play().map_err(|err| PlaybackError {
            action: "play",
            reason: describe(&err),
        })?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                tracing::debug!(reason = %describe(&err), "video play rejected");
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), PlaybackError> {
        self.video.pause().map_err(|err| PlaybackError {
            action: "pause",
            reason: describe(&err),
        })
    }
}

/// Play the hero video while its section is visible enough.
///
/// Missing section, missing video or missing `IntersectionObserver` all
/// leave the page untouched and return empty registrations.
///
/// # Errors
///
/// Returns [`WebError::Js`] when the observer cannot be created.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &DomConfig,
    policy: PlaybackPolicy,
) -> Result<Registrations, WebError> {
    let mut registrations = Registrations::default();
    let Some(section) = document.get_element_by_id(&config.media_section_id) else {
        tracing::debug!(section = %config.media_section_id, "no media section on this page");
        return Ok(registrations);
    };
    let video = section
        .query_selector(&config.video_selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
    let Some(video) = video else {
        tracing::debug!(selector = %config.video_selector, "no hero video in media section");
        return Ok(registrations);
    };
    if !supports_intersection_observer(window) {
        tracing::debug!("IntersectionObserver unsupported, hero video left as is");
        return Ok(registrations);
    }

    let options = ObserverOptions {
        thresholds: policy.thresholds.clone(),
        root_margin: None,
    };
    let service = Rc::new(MediaVisibilityService::new(
        VideoPlayer { video },
        policy,
        &config.media_section_id,
    ));

    let on_entry = Rc::clone(&service);
    let observer = Observer::new(&options, move |entry| {
        on_entry.on_intersection(entry.is_intersecting(), entry.intersection_ratio());
    })?;
    observer.observe(&section);
    registrations.observe(observer);

    let hash = window.location().hash().unwrap_or_default();
    if service.on_initial_hash(&hash) {
        tracing::debug!(%hash, "page opened on media section, starting video");
    }
    Ok(registrations)
}
