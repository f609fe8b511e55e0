//! Page-transition effect state.
//!
//! A transition runs an exit/enter pair: the old page animates out, the new
//! page is mounted at the seam, then animates in. The two phases never
//! overlap, and the engine drops input routed to a page while its exit is
//! running, so a departing page's controls are unreachable.

use std::time::Duration;

use super::animation::EffectTimer;
use super::sequencer::PageId;

/// Exit-phase duration of a page swap.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Enter-phase duration of a page swap.
pub const ENTER_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Exit,
    Enter,
}

/// Seam events surfaced to the engine while a transition advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The exit phase completed: mount the target page now.
    Mount(PageId),
    /// The enter phase completed: the transition is over.
    Finished,
}

/// An in-flight page transition.
#[derive(Debug, Clone)]
pub struct PageTransition {
    to: PageId,
    phase: TransitionPhase,
    timer: EffectTimer,
}

impl PageTransition {
    /// Begin a full exit-then-enter swap towards `target`.
    #[must_use]
    pub fn to(target: PageId) -> Self {
        Self {
            to: target,
            phase: TransitionPhase::Exit,
            timer: EffectTimer::new(EXIT_DURATION),
        }
    }

    /// Begin at the enter phase, for pages mounted without a predecessor
    /// (the first page after the intro).
    #[must_use]
    pub fn entering(target: PageId) -> Self {
        Self {
            to: target,
            phase: TransitionPhase::Enter,
            timer: EffectTimer::new(ENTER_DURATION),
        }
    }

    #[must_use]
    pub fn target(&self) -> PageId {
        self.to
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Progress through the current phase, `0..=1`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// True while the exit phase runs; input to the departing page is
    /// dropped for this window.
    #[must_use]
    pub fn locks_input(&self) -> bool {
        self.phase == TransitionPhase::Exit
    }

    /// Advance the transition, reporting at most one seam event.
    pub fn advance(&mut self, delta: Duration) -> Option<TransitionEvent> {
        self.timer.advance(delta);
        if !self.timer.is_finished() {
            return None;
        }
        match self.phase {
            TransitionPhase::Exit => {
                self.phase = TransitionPhase::Enter;
                self.timer = EffectTimer::new(ENTER_DURATION);
                Some(TransitionEvent::Mount(self.to))
            }
            TransitionPhase::Enter => Some(TransitionEvent::Finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_then_enter_then_finished() {
        let mut transition = PageTransition::to(PageId::Cassette);
        assert!(transition.locks_input());
        assert_eq!(transition.advance(EXIT_DURATION / 2), None);
        assert_eq!(
            transition.advance(EXIT_DURATION),
            Some(TransitionEvent::Mount(PageId::Cassette))
        );
        assert!(!transition.locks_input());
        assert_eq!(
            transition.advance(ENTER_DURATION),
            Some(TransitionEvent::Finished)
        );
    }

    #[test]
    fn entering_skips_the_exit_phase() {
        let mut transition = PageTransition::entering(PageId::Landing);
        assert!(!transition.locks_input());
        assert_eq!(
            transition.advance(ENTER_DURATION),
            Some(TransitionEvent::Finished)
        );
    }
}
