//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BehaviorError`] via `#[from]`. Every controller treats these as
//! best-effort failures: they are logged and swallowed, never surfaced
//! to the visitor.

/// Top-level error for the behavior layer.
#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MissingElement(#[from] MissingElementError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(&'static str),

    /// The host environment failed in a way not covered above.
    #[error("environment error: {0}")]
    Environment(String),
}

/// A value failed a domain invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown theme {0:?}, expected \"dark\" or \"light\"")]
    UnknownTheme(String),

    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// A selector or identifier did not resolve to any element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no element matches {selector:?}")]
pub struct MissingElementError {
    pub selector: String,
}

/// The key-value store refused a read or write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage {operation} failed: {reason}")]
pub struct StorageError {
    pub operation: &'static str,
    pub reason: String,
}

/// The environment refused to start or stop playback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{action} rejected: {reason}")]
pub struct PlaybackError {
    pub action: &'static str,
    pub reason: String,
}
