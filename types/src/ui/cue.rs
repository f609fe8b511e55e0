//! Declarative timer-chain choreography.
//!
//! A `CueSheet` holds an ordered list of `(offset, cue)` pairs and fires
//! each cue exactly once as its offset is crossed. This replaces nested
//! ad-hoc timers for sequences of visual beats with fixed offsets (the
//! intro overlay, the landing-page envelope opening).

use std::time::Duration;

/// An ordered schedule of cues fired by advancing time.
#[derive(Debug, Clone)]
pub struct CueSheet<T> {
    cues: Vec<(Duration, T)>,
    elapsed: Duration,
    next: usize,
}

impl<T: Copy> CueSheet<T> {
    /// Build a sheet from `(offset, cue)` pairs. Offsets are sorted; equal
    /// offsets fire in the order given.
    #[must_use]
    pub fn new(mut cues: Vec<(Duration, T)>) -> Self {
        cues.sort_by_key(|(at, _)| *at);
        Self {
            cues,
            elapsed: Duration::ZERO,
            next: 0,
        }
    }

    /// Advance by `delta`, returning every cue whose offset was crossed.
    pub fn advance(&mut self, delta: Duration) -> Vec<T> {
        self.elapsed = self.elapsed.saturating_add(delta);
        let mut fired = Vec::new();
        while let Some((at, cue)) = self.cues.get(self.next) {
            if *at > self.elapsed {
                break;
            }
            fired.push(*cue);
            self.next += 1;
        }
        fired
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True once every cue has fired.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.cues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Beat {
        Flash,
        Burst,
        Reveal,
    }

    fn sheet() -> CueSheet<Beat> {
        CueSheet::new(vec![
            (Duration::from_millis(2100), Beat::Flash),
            (Duration::from_millis(2200), Beat::Burst),
            (Duration::from_millis(2600), Beat::Reveal),
        ])
    }

    #[test]
    fn fires_in_offset_order() {
        let mut cues = sheet();
        assert!(cues.advance(Duration::from_millis(2000)).is_empty());
        assert_eq!(cues.advance(Duration::from_millis(250)), vec![
            Beat::Flash,
            Beat::Burst
        ]);
        assert_eq!(cues.advance(Duration::from_millis(400)), vec![Beat::Reveal]);
        assert!(cues.is_finished());
    }

    #[test]
    fn each_cue_fires_exactly_once() {
        let mut cues = sheet();
        let mut all = cues.advance(Duration::from_secs(10));
        all.extend(cues.advance(Duration::from_secs(10)));
        assert_eq!(all, vec![Beat::Flash, Beat::Burst, Beat::Reveal]);
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let mut cues = CueSheet::new(vec![
            (Duration::from_millis(300), Beat::Reveal),
            (Duration::from_millis(100), Beat::Flash),
        ]);
        assert_eq!(cues.advance(Duration::from_millis(150)), vec![Beat::Flash]);
    }

    #[test]
    fn empty_sheet_is_finished() {
        let cues: CueSheet<Beat> = CueSheet::new(Vec::new());
        assert!(cues.is_finished());
    }
}
