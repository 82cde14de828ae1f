//! # expensepilot-app
//!
//! Application layer — controllers and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — read/write the persisted theme preference
//!   - `ColorScheme` — the environment's dark/light signal
//!   - `ThemeSurface`, `MenuSurface`, `HeaderSurface`, `CardSurface`,
//!     `ImageSurface` — the page elements each controller mutates
//!   - `Viewport` — element geometry and smooth scrolling
//!   - `MediaPlayer` — play/pause of the hero video
//! - Define **driving/inbound ports** as one service per controller:
//!   - `ThemeService` — resolve, apply, toggle, follow the system preference
//!   - `NavMenuService` — open/close the mobile menu
//!   - `AnchorScrollService` — header-aware smooth scrolling
//!   - `RevealService`, `HeaderShadowService`, `LazyImageService`,
//!     `MediaVisibilityService` — visibility and scroll reactions
//!
//! Every service is best-effort: failures reported by a port are logged
//! through [`failure::swallow`] and never returned to the event loop.
//!
//! ## Dependency rule
//! Depends on `expensepilot-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod failure;
pub mod ports;
pub mod services;
