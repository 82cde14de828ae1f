//! # expensepilot-adapter-web-dom
//!
//! Browser adapter — implements the `expensepilot-app` ports on top of
//! `web-sys` and wires each controller to its DOM events.
//!
//! ## How it works
//!
//! Every controller has a `mount` function that looks up its elements,
//! builds the matching service around DOM-backed ports, and registers the
//! listeners or intersection observers that drive it. The returned
//! [`Registrations`] keep those callbacks alive; dropping them removes the
//! listeners and disconnects the observers.
//!
//! | Controller | Trigger | Required elements |
//! |------------|---------|-------------------|
//! | theme | toggle click, `prefers-color-scheme` change | theme toggle |
//! | menu | button, menu link and document clicks | menu button, menu |
//! | anchors | clicks on `a[href^="#"]` | header |
//! | reveal | intersection of cards | none |
//! | header shadow | window scroll | header |
//! | lazy images | intersection of lazy images | none |
//! | media | intersection of the video's section | none |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `expensepilot-app` and
//! `expensepilot-domain`.

mod config;
mod dom;
mod error;
mod listener;
pub mod logging;
pub mod navigation;

pub mod anchor;
pub mod header;
pub mod lazy_image;
pub mod media;
pub mod menu;
pub mod reveal;
pub mod theme;

pub use config::DomConfig;
pub use dom::{document, supports_intersection_observer, window};
pub use error::WebError;
pub use listener::Registrations;
