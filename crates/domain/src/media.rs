//! Media — play/pause decisions for the hero video.

use serde::Deserialize;

use crate::error::ValidationError;

/// What to do with the video after an intersection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackDecision {
    Play,
    Pause,
}

/// Observation thresholds and the ratio above which the video plays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackPolicy {
    /// Ratios at which the watcher reports changes.
    pub thresholds: Vec<f64>,
    /// Visible ratio that must be exceeded to start playback.
    pub play_above: f64,
}

impl PlaybackPolicy {
    #[must_use]
    pub fn decide(&self, is_intersecting: bool, ratio: f64) -> PlaybackDecision {
        if is_intersecting && ratio > self.play_above {
            PlaybackDecision::Play
        } else {
            PlaybackDecision::Pause
        }
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] when there are no thresholds or any
    /// ratio lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.thresholds.is_empty() {
            return Err(ValidationError::Empty("media.thresholds"));
        }
        for &value in &self.thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::RatioOutOfRange {
                    field: "media.thresholds",
                    value,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.play_above) {
            return Err(ValidationError::RatioOutOfRange {
                field: "media.play_above",
                value: self.play_above,
            });
        }
        Ok(())
    }
}

impl Default for PlaybackPolicy {
    fn default() -> Self {
        Self {
            thresholds: vec![0.0, 0.4, 0.75],
            play_above: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_play_when_mostly_visible() {
        let policy = PlaybackPolicy::default();
        assert_eq!(policy.decide(true, 0.5), PlaybackDecision::Play);
        assert_eq!(policy.decide(true, 0.75), PlaybackDecision::Play);
    }

    #[test]
    fn should_pause_when_barely_visible() {
        let policy = PlaybackPolicy::default();
        assert_eq!(policy.decide(true, 0.2), PlaybackDecision::Pause);
        assert_eq!(policy.decide(true, 0.4), PlaybackDecision::Pause);
    }

    #[test]
    fn should_pause_when_not_intersecting_regardless_of_ratio() {
        let policy = PlaybackPolicy::default();
        assert_eq!(policy.decide(false, 0.9), PlaybackDecision::Pause);
    }

    #[test]
    fn should_reject_empty_thresholds() {
        let policy = PlaybackPolicy {
            thresholds: Vec::new(),
            ..PlaybackPolicy::default()
        };
        assert_eq!(
            policy.validate(),
            Err(ValidationError::Empty("media.thresholds"))
        );
    }

    #[test]
    fn should_parse_partial_json_with_defaults() {
        let policy: PlaybackPolicy = serde_json::from_str(r#"{"play_above": 0.6}"#).unwrap();
        assert!((policy.play_above - 0.6).abs() < f64::EPSILON);
        assert_eq!(policy.thresholds, vec![0.0, 0.4, 0.75]);
    }
}
