//! The final-letter page's local state machine.
//!
//! `Locked → Igniting → Letter → Sealed`, linear, no backward edges. The
//! igniting stage runs a simulated progress counter; the sealed stage runs
//! a typewriter over the configured message. State is scoped to the page's
//! mounted lifetime: re-mounting the page rebuilds a fresh `LetterFlow`.

use std::time::Duration;

use super::animation::{EffectTimer, IntervalTicker};
use super::typewriter::Typewriter;

/// Step interval of the igniting progress counter.
pub const PROGRESS_TICK: Duration = Duration::from_millis(30);

/// Pause between reaching 100% and showing the letter.
pub const GRACE_PAUSE: Duration = Duration::from_millis(500);

/// Tick interval of the sealed-stage typewriter.
pub const TYPE_TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStage {
    Locked,
    Igniting,
    Letter,
    Sealed,
}

/// State machine for the final-letter flow.
#[derive(Debug, Clone)]
pub struct LetterFlow {
    stage: LetterStage,
    progress: u8,
    counter: IntervalTicker,
    grace: Option<EffectTimer>,
    typed: Typewriter,
}

impl LetterFlow {
    /// Build a fresh flow in `Locked`, with `message` queued for the
    /// sealed-stage typewriter.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            stage: LetterStage::Locked,
            progress: 0,
            counter: IntervalTicker::new(PROGRESS_TICK),
            grace: None,
            typed: Typewriter::new(message, TYPE_TICK),
        }
    }

    #[must_use]
    pub fn stage(&self) -> LetterStage {
        self.stage
    }

    /// Igniting progress, `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// The revealed prefix of the sealed message.
    #[must_use]
    pub fn typed(&self) -> &str {
        self.typed.visible()
    }

    #[must_use]
    pub fn typing_done(&self) -> bool {
        self.typed.is_done()
    }

    /// `Locked → Igniting`. Ignored in any other stage.
    pub fn ignite(&mut self) {
        if self.stage == LetterStage::Locked {
            self.stage = LetterStage::Igniting;
        }
    }

    /// `Letter → Sealed`. Ignored in any other stage. Restarts the
    /// typewriter so re-entry never double-starts a half-run reveal.
    pub fn seal(&mut self) {
        if self.stage == LetterStage::Letter {
            self.stage = LetterStage::Sealed;
            self.typed.restart();
        }
    }

    /// Advance the stage-local timers by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        match self.stage {
            LetterStage::Locked | LetterStage::Letter => {}
            LetterStage::Igniting => {
                if let Some(grace) = &mut self.grace {
                    grace.advance(delta);
                    if grace.is_finished() {
                        self.grace = None;
                        self.stage = LetterStage::Letter;
                    }
                    return;
                }
                let ticks = self.counter.advance(delta);
                if ticks > 0 {
                    self.progress = self.progress.saturating_add(ticks.min(100) as u8).min(100);
                    if self.progress == 100 {
                        self.grace = Some(EffectTimer::new(GRACE_PAUSE));
                    }
                }
            }
            LetterStage::Sealed => {
                self.typed.advance(delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_linearly() {
        let mut flow = LetterFlow::new("hi");
        assert_eq!(flow.stage(), LetterStage::Locked);
        flow.ignite();
        assert_eq!(flow.stage(), LetterStage::Igniting);
        flow.advance(PROGRESS_TICK * 100);
        flow.advance(GRACE_PAUSE);
        assert_eq!(flow.stage(), LetterStage::Letter);
        flow.seal();
        assert_eq!(flow.stage(), LetterStage::Sealed);
    }

    #[test]
    fn ignite_is_a_noop_outside_locked() {
        let mut flow = LetterFlow::new("hi");
        flow.ignite();
        flow.advance(PROGRESS_TICK * 40);
        let progress = flow.progress();
        flow.ignite();
        assert_eq!(flow.stage(), LetterStage::Igniting);
        assert_eq!(flow.progress(), progress);
    }

    #[test]
    fn progress_reaches_exactly_100_without_overshoot() {
        let mut flow = LetterFlow::new("hi");
        flow.ignite();
        // Far more ticks than needed: progress must clamp at 100.
        flow.advance(PROGRESS_TICK * 500);
        assert_eq!(flow.progress(), 100);
        assert_eq!(flow.stage(), LetterStage::Igniting);
    }

    #[test]
    fn letter_transition_fires_exactly_once_after_grace() {
        let mut flow = LetterFlow::new("hi");
        flow.ignite();
        flow.advance(PROGRESS_TICK * 100);
        assert_eq!(flow.progress(), 100);
        // Grace pause not yet elapsed.
        flow.advance(GRACE_PAUSE / 2);
        assert_eq!(flow.stage(), LetterStage::Igniting);
        flow.advance(GRACE_PAUSE);
        assert_eq!(flow.stage(), LetterStage::Letter);
        // However many ticks follow, the flow stays put until sealed.
        flow.advance(PROGRESS_TICK * 500);
        assert_eq!(flow.stage(), LetterStage::Letter);
        assert_eq!(flow.progress(), 100);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut flow = LetterFlow::new("hi");
        flow.ignite();
        let mut last = 0;
        for _ in 0..200 {
            flow.advance(Duration::from_millis(17));
            assert!(flow.progress() >= last);
            last = flow.progress();
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn seal_starts_the_typewriter_fresh() {
        let mut flow = LetterFlow::new("Happy New Year!");
        flow.ignite();
        flow.advance(PROGRESS_TICK * 100);
        flow.advance(GRACE_PAUSE);
        flow.seal();
        assert_eq!(flow.typed(), "");
        flow.advance(TYPE_TICK * 5);
        assert_eq!(flow.typed(), "Happy");
        flow.advance(TYPE_TICK * 1000);
        assert_eq!(flow.typed(), "Happy New Year!");
        assert!(flow.typing_done());
    }

    #[test]
    fn empty_message_seals_complete() {
        let mut flow = LetterFlow::new("");
        flow.ignite();
        flow.advance(PROGRESS_TICK * 100);
        flow.advance(GRACE_PAUSE);
        flow.seal();
        assert!(flow.typing_done());
        flow.advance(TYPE_TICK * 3);
        assert_eq!(flow.typed(), "");
    }

    #[test]
    fn dropping_the_flow_cancels_everything() {
        // Re-mounting the page builds a fresh flow; the old one's timers
        // are values that died with it.
        let mut flow = LetterFlow::new("hi");
        flow.ignite();
        flow.advance(PROGRESS_TICK * 40);
        assert_eq!(flow.progress(), 40);
        let fresh = LetterFlow::new("hi");
        drop(std::mem::replace(&mut flow, fresh));
        flow.advance(PROGRESS_TICK * 10);
        assert_eq!(flow.stage(), LetterStage::Locked);
        assert_eq!(flow.progress(), 0);
    }
}
