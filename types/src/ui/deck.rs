//! Pure cassette-deck state machine.
//!
//! At most one of N tracks plays at a time. This type is the mechanism's
//! source of truth: it decides transitions and tracks positions, while the
//! engine's audio registry applies the returned [`DeckCommand`]s to real
//! sinks best-effort. Splitting the two keeps every playback property
//! testable without an audio device.

use std::time::Duration;

/// A side effect the audio backend should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    /// Pause the track, keeping its position.
    Pause(usize),
    /// Resume the track from its current position.
    Resume(usize),
    /// Stop the track and reset its position to zero.
    Stop(usize),
    /// Start (or resume) the requested track from its current position.
    Start(usize),
}

#[derive(Debug, Clone, Default)]
struct TrackState {
    position: Duration,
    duration: Option<Duration>,
}

/// Deck state surfaced to the UI: which track is active, whether it is
/// playing, and per-track position/duration.
#[derive(Debug, Clone)]
pub struct DeckState {
    tracks: Vec<TrackState>,
    active: Option<usize>,
    playing: bool,
}

impl DeckState {
    #[must_use]
    pub fn new(track_count: usize) -> Self {
        Self {
            tracks: vec![TrackState::default(); track_count],
            active: None,
            playing: false,
        }
    }

    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True when `index` is the active track and audibly playing.
    #[must_use]
    pub fn is_track_playing(&self, index: usize) -> bool {
        self.playing && self.active == Some(index)
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Duration {
        self.tracks.get(index).map_or(Duration::ZERO, |t| t.position)
    }

    #[must_use]
    pub fn duration(&self, index: usize) -> Option<Duration> {
        self.tracks.get(index).and_then(|t| t.duration)
    }

    /// Toggle playback of `index`:
    /// active and playing pauses; active and paused resumes; a different
    /// track stops the old one (position reset to zero) and starts the
    /// requested one from its current position. Out-of-range input is
    /// absorbed.
    pub fn toggle(&mut self, index: usize) -> Vec<DeckCommand> {
        if index >= self.tracks.len() {
            return Vec::new();
        }
        if self.active == Some(index) {
            return if self.playing {
                self.playing = false;
                vec![DeckCommand::Pause(index)]
            } else {
                self.playing = true;
                vec![DeckCommand::Resume(index)]
            };
        }

        let mut commands = Vec::with_capacity(2);
        if let Some(prev) = self.active.take() {
            self.tracks[prev].position = Duration::ZERO;
            commands.push(DeckCommand::Stop(prev));
        }
        self.active = Some(index);
        self.playing = true;
        commands.push(DeckCommand::Start(index));
        commands
    }

    /// Advance the active track's position while playing. When the position
    /// reaches a known duration the track finishes (see [`Self::finish_active`]).
    pub fn advance(&mut self, delta: Duration) {
        let Some(index) = self.active else { return };
        if !self.playing {
            return;
        }
        let track = &mut self.tracks[index];
        track.position = track.position.saturating_add(delta);
        if let Some(duration) = track.duration
            && track.position >= duration
        {
            self.finish_active();
        }
    }

    /// End-of-track: clear the active track and reset its position. No
    /// auto-advance to the next track.
    pub fn finish_active(&mut self) {
        if let Some(index) = self.active.take() {
            self.tracks[index].position = Duration::ZERO;
        }
        self.playing = false;
    }

    /// Playback failure absorbed by the backend: the control simply stops
    /// animating.
    pub fn halt(&mut self) {
        self.playing = false;
    }

    /// Overwrite a track's position from the backend's real clock.
    pub fn sync_position(&mut self, index: usize, position: Duration) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.position = position;
        }
    }

    /// Record a track's duration once the backend has decoded it.
    pub fn set_duration(&mut self, index: usize, duration: Duration) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.duration = Some(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_an_idempotent_pair() {
        for index in 0..3 {
            let mut deck = DeckState::new(3);
            assert_eq!(deck.toggle(index), vec![DeckCommand::Start(index)]);
            assert!(deck.is_track_playing(index));
            assert_eq!(deck.toggle(index), vec![DeckCommand::Pause(index)]);
            // Back to the pre-first-call playback state: silent, nothing advanced.
            assert!(!deck.is_playing());
            assert_eq!(deck.position(index), Duration::ZERO);
        }
    }

    #[test]
    fn toggle_paused_track_resumes() {
        let mut deck = DeckState::new(3);
        deck.toggle(1);
        deck.advance(Duration::from_secs(3));
        deck.toggle(1);
        assert_eq!(deck.toggle(1), vec![DeckCommand::Resume(1)]);
        // Position survives the pause.
        assert_eq!(deck.position(1), Duration::from_secs(3));
    }

    #[test]
    fn switching_tracks_resets_the_old_position() {
        let mut deck = DeckState::new(3);
        deck.toggle(0);
        deck.advance(Duration::from_secs(5));
        assert_eq!(deck.position(0), Duration::from_secs(5));

        let commands = deck.toggle(2);
        assert_eq!(commands, vec![DeckCommand::Stop(0), DeckCommand::Start(2)]);
        assert_eq!(deck.position(0), Duration::ZERO);
        assert_eq!(deck.active(), Some(2));
        assert!(deck.is_playing());
    }

    #[test]
    fn exactly_one_track_is_ever_active() {
        let mut deck = DeckState::new(3);
        for index in [0, 1, 2, 1, 0] {
            deck.toggle(index);
            assert_eq!(deck.active(), Some(index));
        }
    }

    #[test]
    fn position_only_advances_while_playing() {
        let mut deck = DeckState::new(2);
        deck.advance(Duration::from_secs(1));
        assert_eq!(deck.position(0), Duration::ZERO);

        deck.toggle(0);
        deck.advance(Duration::from_secs(1));
        deck.toggle(0); // pause
        deck.advance(Duration::from_secs(5));
        assert_eq!(deck.position(0), Duration::from_secs(1));
    }

    #[test]
    fn end_of_track_clears_active_without_auto_advance() {
        let mut deck = DeckState::new(3);
        deck.set_duration(0, Duration::from_secs(2));
        deck.toggle(0);
        deck.advance(Duration::from_secs(3));
        assert_eq!(deck.active(), None);
        assert!(!deck.is_playing());
        assert_eq!(deck.position(0), Duration::ZERO);
    }

    #[test]
    fn halt_stops_playback_but_keeps_the_active_track() {
        let mut deck = DeckState::new(2);
        deck.toggle(1);
        deck.halt();
        assert!(!deck.is_playing());
        assert_eq!(deck.active(), Some(1));
    }

    #[test]
    fn out_of_range_toggle_is_absorbed() {
        let mut deck = DeckState::new(2);
        assert!(deck.toggle(9).is_empty());
        assert_eq!(deck.active(), None);
    }
}
