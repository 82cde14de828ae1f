//! Media visibility service — play the hero video while it is visible.

use expensepilot_domain::media::{PlaybackDecision, PlaybackPolicy};

use crate::failure;
use crate::ports::MediaPlayer;

/// Controller for the hero video.
///
/// Playback is best-effort: refusals from the environment (autoplay
/// policy, detached element) are logged at `debug` and dropped.
pub struct MediaVisibilityService<P> {
    player: P,
    policy: PlaybackPolicy,
    section_fragment: String,
}

impl<P: MediaPlayer> MediaVisibilityService<P> {
    /// `section_id` is the id of the section holding the video, without `#`.
    pub fn new(player: P, policy: PlaybackPolicy, section_id: &str) -> Self {
        Self {
            player,
            policy,
            section_fragment: format!("#{section_id}"),
        }
    }

    pub fn on_intersection(&self, is_intersecting: bool, ratio: f64) -> PlaybackDecision {
        let decision = self.policy.decide(is_intersecting, ratio);
        match decision {
            PlaybackDecision::Play => self.play(),
            PlaybackDecision::Pause => self.pause(),
        }
        decision
    }

    /// Attempt playback right away when the page was opened on the video's
    /// section. Runs independently of the watcher. Returns whether a play
    /// attempt was made.
    pub fn on_initial_hash(&self, hash: &str) -> bool {
        if hash != self.section_fragment {
            return false;
        }
        self.play();
        true
    }

    fn play(&self) {
        if let Err(err) = self.player.play() {
            failure::swallow("video play", err);
        }
    }

    fn pause(&self) {
        if let Err(err) = self.player.pause() {
            failure::swallow("video pause", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expensepilot_domain::error::PlaybackError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakePlayer {
        calls: RefCell<Vec<&'static str>>,
        reject: bool,
    }

    impl MediaPlayer for FakePlayer {
        fn play(&self) -> Result<(), PlaybackError> {
            self.calls.borrow_mut().push("play");
            if self.reject {
                return Err(PlaybackError {
                    action: "play",
                    reason: "NotAllowedError".to_string(),
                });
            }
            Ok(())
        }

        fn pause(&self) -> Result<(), PlaybackError> {
            self.calls.borrow_mut().push("pause");
            if self.reject {
                return Err(PlaybackError {
                    action: "pause",
                    reason: "InvalidStateError".to_string(),
                });
            }
            Ok(())
        }
    }

    fn make_service(reject: bool) -> MediaVisibilityService<FakePlayer> {
        let player = FakePlayer {
            reject,
            ..FakePlayer::default()
        };
        MediaVisibilityService::new(player, PlaybackPolicy::default(), "about")
    }

    #[test]
    fn should_play_above_forty_percent() {
        let svc = make_service(false);
        assert_eq!(svc.on_intersection(true, 0.5), PlaybackDecision::Play);
        assert_eq!(*svc.player.calls.borrow(), vec!["play"]);
    }

    #[test]
    fn should_pause_below_forty_percent() {
        let svc = make_service(false);
        assert_eq!(svc.on_intersection(true, 0.2), PlaybackDecision::Pause);
        assert_eq!(svc.on_intersection(false, 0.0), PlaybackDecision::Pause);
        assert_eq!(*svc.player.calls.borrow(), vec!["pause", "pause"]);
    }

    #[test]
    fn should_swallow_rejected_playback() {
        let svc = make_service(true);
        assert_eq!(svc.on_intersection(true, 0.9), PlaybackDecision::Play);
        assert_eq!(svc.on_intersection(true, 0.1), PlaybackDecision::Pause);
        assert!(svc.on_initial_hash("#about"));
        assert_eq!(*svc.player.calls.borrow(), vec!["play", "pause", "play"]);
    }

    #[test]
    fn should_play_immediately_when_opened_on_section() {
        let svc = make_service(false);
        assert!(svc.on_initial_hash("#about"));
        assert_eq!(*svc.player.calls.borrow(), vec!["play"]);
    }

    #[test]
    fn should_not_play_for_other_hashes() {
        let svc = make_service(false);
        assert!(!svc.on_initial_hash(""));
        assert!(!svc.on_initial_hash("#pricing"));
        assert!(svc.player.calls.borrow().is_empty());
    }
}
