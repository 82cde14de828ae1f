//! Best-effort failure reporting shared by every controller.

use expensepilot_domain::error::BehaviorError;
use tracing::Level;

/// Level at which a swallowed failure is logged.
///
/// A missing browser capability and refused playback are routine and stay
/// at `debug`; anything else is a `warn`.
#[must_use]
pub fn severity(err: &BehaviorError) -> Level {
    match err {
        BehaviorError::CapabilityUnavailable(_) | BehaviorError::Playback(_) => Level::DEBUG,
        BehaviorError::Validation(_)
        | BehaviorError::MissingElement(_)
        | BehaviorError::Storage(_)
        | BehaviorError::Environment(_) => Level::WARN,
    }
}

/// Log a failure the caller recovers from, at its [`severity`].
pub fn swallow(context: &'static str, err: impl Into<BehaviorError>) {
    let err = err.into();
    if severity(&err) == Level::DEBUG {
        tracing::debug!(context, error = %err, "ignored failure");
    } else {
        tracing::warn!(context, error = %err, "ignored failure");
    }
}
