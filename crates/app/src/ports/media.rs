//! Media port — hero video playback.

use std::rc::Rc;

use expensepilot_domain::error::PlaybackError;

/// Starts and stops a video element.
pub trait MediaPlayer {
    /// Attempt to start playback.
    ///
    /// Asynchronous rejections (autoplay policy) are handled by the adapter;
    /// only synchronous refusals are returned.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] when the environment refuses immediately.
    fn play(&self) -> Result<(), PlaybackError>;

    /// # Errors
    ///
    /// Returns [`PlaybackError`] when the environment refuses to pause.
    fn pause(&self) -> Result<(), PlaybackError>;
}

impl<T: MediaPlayer + ?Sized> MediaPlayer for Rc<T> {
    fn play(&self) -> Result<(), PlaybackError> {
        (**self).play()
    }

    fn pause(&self) -> Result<(), PlaybackError> {
        (**self).pause()
    }
}
