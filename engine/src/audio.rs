//! The Jukebox: a process-wide audio playback registry.
//!
//! One sink per track, created on first use and kept alive until process
//! end, owned by the `App` above page lifetime. Navigating away from the
//! cassette page and back therefore never restarts audio that is already
//! playing.
//!
//! The pure transition logic lives in [`DeckState`]; this type applies the
//! returned commands to real sinks best-effort. Every playback failure is
//! absorbed: the deck halts, a warning is logged, and the experience keeps
//! going silently.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::warn;

use keepsake_types::ui::{DeckCommand, DeckState};

struct AudioOutput {
    // Dropping the stream kills every sink attached to it.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

#[derive(Default)]
struct TrackSlot {
    path: Option<PathBuf>,
    data: Option<Arc<[u8]>>,
    duration: Option<Duration>,
    sink: Option<Sink>,
}

/// Playback registry for the cassette page's track list.
pub struct Jukebox {
    output: Option<AudioOutput>,
    output_failed: bool,
    slots: Vec<TrackSlot>,
    deck: DeckState,
}

impl Jukebox {
    /// Build a silent registry for `track_count` tracks, with audio files
    /// paired positionally. Missing paths leave the track silent but fully
    /// toggleable.
    #[must_use]
    pub fn new(track_count: usize, mut paths: Vec<PathBuf>) -> Self {
        let mut slots: Vec<TrackSlot> = Vec::with_capacity(track_count);
        for index in 0..track_count {
            let path = paths.get_mut(index).map(std::mem::take);
            slots.push(TrackSlot {
                path,
                ..TrackSlot::default()
            });
        }
        Self {
            output: None,
            output_failed: false,
            slots,
            deck: DeckState::new(track_count),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    /// Toggle playback of `index` (see [`DeckState::toggle`]) and apply the
    /// resulting commands to the sinks.
    pub fn toggle(&mut self, index: usize) {
        let commands = self.deck.toggle(index);
        for command in commands {
            match command {
                DeckCommand::Pause(i) => {
                    if let Some(sink) = self.slots[i].sink.as_ref() {
                        sink.pause();
                    }
                }
                DeckCommand::Resume(i) | DeckCommand::Start(i) => self.start(i),
                DeckCommand::Stop(i) => {
                    if let Some(sink) = self.slots[i].sink.as_ref() {
                        sink.stop();
                    }
                }
            }
        }
    }

    /// Advance the deck clock and fold in what the sinks report: real
    /// positions while playing, and end-of-track once a sink drains.
    pub fn tick(&mut self, delta: Duration) {
        self.deck.advance(delta);
        let Some(index) = self.deck.active() else {
            return;
        };
        if let Some(sink) = self.slots[index].sink.as_ref() {
            if self.deck.is_playing() && sink.empty() {
                self.deck.finish_active();
                return;
            }
            self.deck.sync_position(index, sink.get_pos());
        }
    }

    /// Stop every track. The registry itself stays alive; this is the
    /// restart path, which silences audio the way a process reload would.
    pub fn stop_all(&mut self) {
        for slot in &self.slots {
            if let Some(sink) = slot.sink.as_ref() {
                sink.stop();
            }
        }
        self.deck = DeckState::new(self.slots.len());
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(duration) = slot.duration {
                self.deck.set_duration(index, duration);
            }
        }
    }

    /// Start (or resume) `index` from its current position.
    fn start(&mut self, index: usize) {
        let Some(handle) = self.ensure_output() else {
            self.deck.halt();
            return;
        };

        if self.slots[index].sink.is_none() {
            match Sink::try_new(&handle) {
                Ok(sink) => self.slots[index].sink = Some(sink),
                Err(err) => {
                    warn!(track = index, %err, "Failed to create audio sink");
                    self.deck.halt();
                    return;
                }
            }
        }

        // A sink with a queued source just resumes; a drained or fresh one
        // needs the track decoded and appended first.
        if self.slots[index].sink.as_ref().is_some_and(Sink::empty) {
            let Some(data) = self.track_data(index) else {
                self.deck.halt();
                return;
            };
            match Decoder::new(Cursor::new(data)) {
                Ok(source) => {
                    if let Some(duration) = source.total_duration() {
                        self.slots[index].duration = Some(duration);
                        self.deck.set_duration(index, duration);
                    }
                    if let Some(sink) = self.slots[index].sink.as_ref() {
                        sink.append(source);
                    }
                }
                Err(err) => {
                    warn!(track = index, %err, "Failed to decode audio track");
                    self.deck.halt();
                    return;
                }
            }
        }

        if let Some(sink) = self.slots[index].sink.as_ref() {
            sink.play();
        }
    }

    /// Read and cache the track's bytes.
    fn track_data(&mut self, index: usize) -> Option<Arc<[u8]>> {
        if let Some(data) = self.slots[index].data.as_ref() {
            return Some(Arc::clone(data));
        }
        let path = self.slots[index].path.clone()?;
        match fs::read(&path) {
            Ok(bytes) => {
                let data: Arc<[u8]> = bytes.into();
                self.slots[index].data = Some(Arc::clone(&data));
                Some(data)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "Failed to read audio track");
                None
            }
        }
    }

    /// Open the audio device on first use. A machine without one leaves the
    /// jukebox permanently silent, with a single warning.
    fn ensure_output(&mut self) -> Option<OutputStreamHandle> {
        if self.output.is_none() && !self.output_failed {
            match OutputStream::try_default() {
                Ok((stream, handle)) => {
                    self.output = Some(AudioOutput {
                        _stream: stream,
                        handle,
                    });
                }
                Err(err) => {
                    warn!(%err, "No audio output available; continuing silently");
                    self.output_failed = true;
                }
            }
        }
        self.output.as_ref().map(|output| output.handle.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Device-backed behavior is exercised manually; these tests cover the
    // registry's silent degradation, which must hold on any machine.

    #[test]
    fn silent_jukebox_still_tracks_deck_state() {
        let mut jukebox = Jukebox::new(3, Vec::new());
        jukebox.toggle(1);
        // No path, no device: playback halts but the selection sticks.
        assert_eq!(jukebox.deck().active(), Some(1));
        assert!(!jukebox.deck().is_playing());
    }

    #[test]
    fn missing_file_halts_without_error() {
        let paths = vec![PathBuf::from("/nonexistent/a.mp3")];
        let mut jukebox = Jukebox::new(1, paths);
        jukebox.toggle(0);
        jukebox.tick(Duration::from_millis(16));
        assert!(!jukebox.deck().is_playing());
    }

    #[test]
    fn stop_all_clears_the_deck() {
        let mut jukebox = Jukebox::new(2, Vec::new());
        jukebox.toggle(0);
        jukebox.stop_all();
        assert_eq!(jukebox.deck().active(), None);
        assert!(!jukebox.deck().is_playing());
    }

    #[test]
    fn slots_pad_to_track_count() {
        let jukebox = Jukebox::new(3, vec![PathBuf::from("only-one.mp3")]);
        assert_eq!(jukebox.deck().track_count(), 3);
    }
}
