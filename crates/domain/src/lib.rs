//! # expensepilot-domain
//!
//! Pure domain model for the expensepilot marketing site behavior layer.
//!
//! ## Responsibilities
//! - **Theme**: the dark/light preference, the tracking/pinned state machine,
//!   and the label shown on the toggle control
//! - **Navigation menu**: the open/closed state and its accessibility flag
//! - **Anchors**: classify in-page links and compute header-aware scroll offsets
//! - **Reveal**: card styles before and after they enter the viewport
//! - **Header shadow**: scroll-position driven shadow selection
//! - **Lazy images**: resolve the deferred image source
//! - **Media**: play/pause decisions from intersection ratios
//! - **Navigation timing**: classify how the page was reached
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser bindings.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod anchor;
pub mod header;
pub mod lazy_image;
pub mod media;
pub mod menu;
pub mod navigation;
pub mod reveal;
pub mod theme;
