//! Playback state for a single audio or video element.
//!
//! The state only changes in response to [`MediaEvent`]s, which the
//! controller hook translates from the element's own lifecycle events and
//! from user commands that have already been applied to the element.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    LoadStart,
    Metadata { duration: f64 },
    CanPlay,
    TimeUpdate { current_time: f64, duration: f64 },
    PlayStarted,
    PlayRejected,
    Paused,
    Ended,
    /// Horizontal click position inside the progress bar.
    Seek { click_x: f64, width: f64 },
    ToggleMute,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaPlaybackState {
    pub phase: PlaybackPhase,
    pub is_playing: bool,
    pub progress_percent: f64,
    pub duration_seconds: f64,
    pub current_time_seconds: f64,
    pub volume: f64,
    pub is_muted: bool,
    pub is_loading: bool,
}

impl Default for MediaPlaybackState {
    fn default() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            is_playing: false,
            progress_percent: 0.0,
            duration_seconds: 0.0,
            current_time_seconds: 0.0,
            volume: 1.0,
            is_muted: false,
            is_loading: false,
        }
    }
}

fn usable_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

/// Clamped position of a click along a bar, in `0.0..=1.0`.
pub fn seek_ratio(click_x: f64, width: f64) -> f64 {
    if width.is_nan() || width <= 0.0 || !click_x.is_finite() {
        return 0.0;
    }
    (click_x / width).clamp(0.0, 1.0)
}

/// Converts a viewport click into `(click_x, width)` relative to the bar's
/// bounding box.
pub fn bar_click(client_x: f64, bar_left: f64, bar_width: f64) -> (f64, f64) {
    (client_x - bar_left, bar_width)
}

/// `m:ss`, minutes unpadded.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

impl MediaPlaybackState {
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    fn set_position(&mut self, current_time: f64) {
        if self.duration_seconds > 0.0 {
            let current_time = current_time.clamp(0.0, self.duration_seconds);
            self.current_time_seconds = current_time;
            self.progress_percent = 100.0 * current_time / self.duration_seconds;
        } else {
            self.current_time_seconds = 0.0;
            self.progress_percent = 0.0;
        }
    }

    /// Target time for a seek, or `None` when nothing is loaded yet.
    pub fn seek_target(&self, click_x: f64, width: f64) -> Option<f64> {
        if self.duration_seconds > 0.0 {
            Some(seek_ratio(click_x, width) * self.duration_seconds)
        } else {
            None
        }
    }

    pub fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadStart => {
                self.is_loading = true;
                if !self.is_playing {
                    self.phase = PlaybackPhase::Loading;
                }
            }
            MediaEvent::Metadata { duration } => {
                self.duration_seconds = usable_duration(duration);
                self.is_loading = false;
                if self.phase == PlaybackPhase::Idle || self.phase == PlaybackPhase::Loading {
                    self.phase = PlaybackPhase::Ready;
                }
                let current = self.current_time_seconds;
                self.set_position(current);
            }
            MediaEvent::CanPlay => {
                self.is_loading = false;
            }
            MediaEvent::TimeUpdate { current_time, duration } => {
                // Some elements report time before metadata; take the duration
                // from the element itself so the progress stays consistent.
                let duration = usable_duration(duration);
                if duration > 0.0 {
                    self.duration_seconds = duration;
                    self.set_position(current_time);
                }
            }
            MediaEvent::PlayStarted => {
                self.is_playing = true;
                self.is_loading = false;
                self.phase = PlaybackPhase::Playing;
            }
            MediaEvent::PlayRejected => {
                self.is_loading = false;
            }
            MediaEvent::Paused => {
                self.is_playing = false;
                if self.phase == PlaybackPhase::Playing {
                    self.phase = PlaybackPhase::Paused;
                }
            }
            MediaEvent::Ended => {
                self.is_playing = false;
                self.current_time_seconds = 0.0;
                self.progress_percent = 0.0;
                self.phase = PlaybackPhase::Ended;
            }
            MediaEvent::Seek { click_x, width } => {
                if let Some(target) = self.seek_target(click_x, width) {
                    self.set_position(target);
                }
            }
            MediaEvent::ToggleMute => {
                self.is_muted = !self.is_muted;
            }
        }
    }
}

impl Reducible for MediaPlaybackState {
    type Action = MediaEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> MediaPlaybackState {
        let mut state = MediaPlaybackState::default();
        state.apply(MediaEvent::LoadStart);
        state.apply(MediaEvent::Metadata { duration });
        state
    }

    fn assert_progress_invariant(state: &MediaPlaybackState) {
        if state.duration_seconds > 0.0 {
            let expected = 100.0 * state.current_time_seconds / state.duration_seconds;
            assert!((state.progress_percent - expected).abs() < 1e-9);
        } else {
            assert_eq!(state.progress_percent, 0.0);
        }
    }

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.0), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(125.0), "2:05");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(125.9), "2:05");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn loading_lifecycle_reaches_ready() {
        let mut state = MediaPlaybackState::default();
        assert_eq!(state.phase, PlaybackPhase::Idle);

        state.apply(MediaEvent::LoadStart);
        assert_eq!(state.phase, PlaybackPhase::Loading);
        assert!(state.is_loading);

        state.apply(MediaEvent::Metadata { duration: 180.0 });
        assert_eq!(state.phase, PlaybackPhase::Ready);
        assert_eq!(state.duration_seconds, 180.0);
        assert!(!state.is_loading);
    }

    #[test]
    fn streaming_duration_is_treated_as_unknown() {
        let state = loaded(f64::INFINITY);
        assert_eq!(state.duration_seconds, 0.0);
        assert_progress_invariant(&state);
    }

    #[test]
    fn time_updates_keep_progress_consistent() {
        let mut state = loaded(200.0);
        state.apply(MediaEvent::PlayStarted);
        for t in [0.0, 12.5, 50.0, 199.0, 250.0] {
            state.apply(MediaEvent::TimeUpdate { current_time: t, duration: 200.0 });
            assert_progress_invariant(&state);
        }
        assert_eq!(state.current_time_seconds, 200.0);
        assert_eq!(state.progress_percent, 100.0);
    }

    #[test]
    fn time_update_without_duration_leaves_progress_at_zero() {
        let mut state = MediaPlaybackState::default();
        state.apply(MediaEvent::TimeUpdate { current_time: 3.0, duration: f64::NAN });
        assert_eq!(state.progress_percent, 0.0);
        assert_eq!(state.current_time_seconds, 0.0);
    }

    #[test]
    fn seek_sets_exact_fraction_of_duration() {
        let mut state = loaded(120.0);
        state.apply(MediaEvent::Seek { click_x: 75.0, width: 300.0 });
        assert_eq!(state.current_time_seconds, 0.25 * 120.0);
        assert_eq!(state.progress_percent, 25.0);

        state.apply(MediaEvent::Seek { click_x: 300.0, width: 300.0 });
        assert_eq!(state.current_time_seconds, 120.0);
        assert_eq!(state.progress_percent, 100.0);
    }

    #[test]
    fn seek_clamps_clicks_outside_the_bar() {
        let mut state = loaded(90.0);
        state.apply(MediaEvent::Seek { click_x: -20.0, width: 300.0 });
        assert_eq!(state.current_time_seconds, 0.0);

        state.apply(MediaEvent::Seek { click_x: 400.0, width: 300.0 });
        assert_eq!(state.current_time_seconds, 90.0);
        assert_progress_invariant(&state);
    }

    #[test]
    fn seek_before_metadata_is_ignored() {
        let mut state = MediaPlaybackState::default();
        assert_eq!(state.seek_target(10.0, 100.0), None);
        state.apply(MediaEvent::Seek { click_x: 10.0, width: 100.0 });
        assert_eq!(state, MediaPlaybackState::default());
    }

    #[test]
    fn seek_is_measured_from_the_bar_not_the_page() {
        let mut state = loaded(60.0);
        // 300px bar starting 100px into the page, clicked at clientX 150.
        let (click_x, width) = bar_click(150.0, 100.0, 300.0);
        assert_eq!((click_x, width), (50.0, 300.0));

        state.apply(MediaEvent::Seek { click_x, width });
        assert_eq!(state.current_time_seconds, 50.0 / 300.0 * 60.0);
        assert_progress_invariant(&state);

        let (click_x, width) = bar_click(40.0, 100.0, 300.0);
        assert_eq!(seek_ratio(click_x, width), 0.0);
    }

    #[test]
    fn seek_ratio_handles_degenerate_widths() {
        assert_eq!(seek_ratio(10.0, 0.0), 0.0);
        assert_eq!(seek_ratio(f64::NAN, 100.0), 0.0);
        assert_eq!(seek_ratio(50.0, 100.0), 0.5);
    }

    #[test]
    fn natural_end_resets_position_from_any_state() {
        let mut playing = loaded(60.0);
        playing.apply(MediaEvent::PlayStarted);
        playing.apply(MediaEvent::TimeUpdate { current_time: 59.0, duration: 60.0 });

        let mut paused = playing.clone();
        paused.apply(MediaEvent::Paused);

        for mut state in [playing, paused, MediaPlaybackState::default()] {
            state.apply(MediaEvent::Ended);
            assert!(!state.is_playing);
            assert_eq!(state.current_time_seconds, 0.0);
            assert_eq!(state.progress_percent, 0.0);
            assert_eq!(state.phase, PlaybackPhase::Ended);
        }
    }

    #[test]
    fn rejected_play_clears_loading_and_stays_paused() {
        let mut state = MediaPlaybackState::default();
        state.apply(MediaEvent::LoadStart);
        state.apply(MediaEvent::PlayRejected);
        assert!(!state.is_loading);
        assert!(!state.is_playing);
        assert_ne!(state.phase, PlaybackPhase::Playing);
    }

    #[test]
    fn pause_and_resume() {
        let mut state = loaded(30.0);
        state.apply(MediaEvent::PlayStarted);
        assert_eq!(state.phase, PlaybackPhase::Playing);

        state.apply(MediaEvent::Paused);
        assert_eq!(state.phase, PlaybackPhase::Paused);
        assert!(!state.is_playing);

        state.apply(MediaEvent::PlayStarted);
        assert!(state.is_playing);
    }

    #[test]
    fn mute_keeps_stored_volume() {
        let mut state = MediaPlaybackState {
            volume: 0.7,
            ..MediaPlaybackState::default()
        };
        state.apply(MediaEvent::ToggleMute);
        assert!(state.is_muted);
        assert_eq!(state.effective_volume(), 0.0);
        assert_eq!(state.volume, 0.7);

        state.apply(MediaEvent::ToggleMute);
        assert_eq!(state.effective_volume(), 0.7);
    }

    #[test]
    fn reducer_reuses_unchanged_state() {
        let state = Rc::new(MediaPlaybackState::default());
        let next = state.clone().reduce(MediaEvent::CanPlay);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(MediaEvent::LoadStart);
        assert!(!Rc::ptr_eq(&state, &next));
    }
}
