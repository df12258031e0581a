/// Decides when a player that autoplays on scroll should start, and when an
/// external pause signal should stop it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoplayPolicy {
    play_once_only: bool,
    has_autoplayed: bool,
    attempt_pending: bool,
    was_visible: bool,
    last_pause_signal: u32,
}

impl AutoplayPolicy {
    pub fn new(play_once_only: bool, initial_pause_signal: u32) -> Self {
        Self {
            play_once_only,
            last_pause_signal: initial_pause_signal,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn has_autoplayed(&self) -> bool {
        self.has_autoplayed
    }

    /// Feed the latest visibility. Returns `true` when playback should start:
    /// the element just crossed into view, nothing is playing or starting,
    /// and the once-only restriction has not been used up.
    pub fn on_visibility(&mut self, visible: bool, is_playing: bool) -> bool {
        let entered = visible && !self.was_visible;
        self.was_visible = visible;

        if !entered || is_playing || self.attempt_pending {
            return false;
        }
        if self.play_once_only && self.has_autoplayed {
            return false;
        }
        self.attempt_pending = true;
        true
    }

    /// Playback actually started. Only an autoplay attempt counts towards
    /// the once-only restriction; manual plays do not.
    pub fn on_play_started(&mut self) {
        if self.attempt_pending {
            self.attempt_pending = false;
            self.has_autoplayed = true;
        }
    }

    /// The browser refused to start. The next entry may try again.
    pub fn on_play_rejected(&mut self) {
        self.attempt_pending = false;
    }

    /// Feed the latest pause-signal counter. Returns `true` when the player
    /// must pause now. `active` covers both playing and a pending play.
    pub fn on_pause_signal(&mut self, signal: u32, active: bool) -> bool {
        if signal <= self.last_pause_signal {
            return false;
        }
        self.last_pause_signal = signal;
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_entry() {
        let mut policy = AutoplayPolicy::new(false, 0);
        assert!(!policy.on_visibility(false, false));
        assert!(policy.on_visibility(true, false));
        assert!(!policy.has_autoplayed());

        policy.on_play_started();
        assert!(policy.has_autoplayed());
    }

    #[test]
    fn staying_visible_does_not_retrigger() {
        let mut policy = AutoplayPolicy::new(false, 0);
        assert!(policy.on_visibility(true, false));
        assert!(!policy.on_visibility(true, false));
    }

    #[test]
    fn re_entry_restarts_without_once_only() {
        let mut policy = AutoplayPolicy::new(false, 0);
        assert!(policy.on_visibility(true, false));
        policy.on_play_started();
        policy.on_visibility(false, false);
        assert!(policy.on_visibility(true, false));
    }

    #[test]
    fn once_only_never_fires_again() {
        let mut policy = AutoplayPolicy::new(true, 0);
        assert!(policy.on_visibility(true, false));
        policy.on_play_started();
        for _ in 0..5 {
            assert!(!policy.on_visibility(false, false));
            assert!(!policy.on_visibility(true, false));
        }
    }

    #[test]
    fn already_playing_is_left_alone() {
        let mut policy = AutoplayPolicy::new(true, 0);
        assert!(!policy.on_visibility(true, true));
        assert!(!policy.has_autoplayed());
    }

    #[test]
    fn rejected_autoplay_does_not_use_up_once_only() {
        let mut policy = AutoplayPolicy::new(true, 0);
        assert!(policy.on_visibility(true, false));
        policy.on_play_rejected();
        assert!(!policy.has_autoplayed());

        policy.on_visibility(false, false);
        assert!(policy.on_visibility(true, false));
        policy.on_play_started();
        assert!(policy.has_autoplayed());

        policy.on_visibility(false, false);
        assert!(!policy.on_visibility(true, false));
    }

    #[test]
    fn pending_attempt_blocks_a_second_start() {
        let mut policy = AutoplayPolicy::new(false, 0);
        assert!(policy.on_visibility(true, false));
        policy.on_visibility(false, false);
        assert!(!policy.on_visibility(true, false));
    }

    #[test]
    fn manual_play_does_not_count_as_autoplay() {
        let mut policy = AutoplayPolicy::new(true, 0);
        policy.on_play_started();
        assert!(!policy.has_autoplayed());
        assert!(policy.on_visibility(true, false));
    }

    #[test]
    fn pause_signal_increment_pauses_active_player() {
        let mut policy = AutoplayPolicy::new(true, 0);
        assert!(policy.on_pause_signal(1, true));
        assert!(policy.on_pause_signal(2, true));
    }

    #[test]
    fn pause_signal_is_a_no_op_when_paused() {
        let mut policy = AutoplayPolicy::new(true, 0);
        assert!(!policy.on_pause_signal(1, false));
        // The increment was consumed; resuming later is not undone by it.
        assert!(!policy.on_pause_signal(1, true));
    }

    #[test]
    fn initial_signal_value_is_not_an_increment() {
        let mut policy = AutoplayPolicy::new(false, 3);
        assert!(!policy.on_pause_signal(3, true));
        assert!(policy.on_pause_signal(4, true));
    }
}
