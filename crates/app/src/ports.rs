//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the controllers and the page. All of
//! them are synchronous and single-threaded: they are driven from the
//! browser's main event loop only.

pub mod media;
pub mod preference;
pub mod surface;
pub mod viewport;

pub use media::MediaPlayer;
pub use preference::{ColorScheme, PreferenceStore};
pub use surface::{CardSurface, HeaderSurface, ImageSurface, MenuSurface, ThemeSurface};
pub use viewport::Viewport;
