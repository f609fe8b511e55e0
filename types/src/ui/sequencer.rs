//! Top-level stage/page sequencer.
//!
//! Owns the intro-vs-main stage flag and the current page index. Advances
//! linearly: the intro hands off to the main stage once its timer completes,
//! and pages advance on user action. Exactly one page is current at a time;
//! the engine re-creates page-local state on every mount.

use std::time::Duration;

use super::animation::EffectTimer;

/// How long the intro overlay plays before the main stage takes over.
pub const INTRO_DURATION: Duration = Duration::from_millis(6500);

/// Number of pages in the main stage.
pub const PAGE_COUNT: usize = 5;

/// Top-level stage of the experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Main,
}

/// The pages of the main stage, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageId {
    Landing,
    BucketList,
    Cassette,
    Cards,
    Letter,
}

impl PageId {
    pub const ALL: [Self; PAGE_COUNT] = [
        Self::Landing,
        Self::BucketList,
        Self::Cassette,
        Self::Cards,
        Self::Letter,
    ];

    /// Map an index to a page, clamping out-of-range input to the last page.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(PAGE_COUNT - 1)]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The page after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// True for the terminal page, whose only exit is a restart.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Session-scoped sequencer state. Created at startup as
/// `(Intro, Landing)`; destroyed (and rebuilt) on restart.
#[derive(Debug, Clone)]
pub struct SessionState {
    stage: Stage,
    current_page: PageId,
    intro: EffectTimer,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Intro,
            current_page: PageId::Landing,
            intro: EffectTimer::new(INTRO_DURATION),
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    /// Progress of the intro timer, `0..=1`.
    #[must_use]
    pub fn intro_progress(&self) -> f32 {
        self.intro.progress()
    }

    /// Advance the intro timer. Returns `true` exactly once, when the timer
    /// completes and the stage flips from intro to main.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.stage != Stage::Intro {
            return false;
        }
        self.intro.advance(delta);
        if self.intro.is_finished() {
            self.advance_to_main();
            return true;
        }
        false
    }

    /// Transition from the intro to the main stage.
    pub fn advance_to_main(&mut self) {
        self.stage = Stage::Main;
    }

    /// Set the current page, clamping out-of-range indices. The caller is
    /// responsible for re-mounting page state and resetting scroll.
    pub fn go_to_page(&mut self, index: usize) -> PageId {
        self.current_page = PageId::from_index(index);
        self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_intro_on_first_page() {
        let session = SessionState::new();
        assert_eq!(session.stage(), Stage::Intro);
        assert_eq!(session.current_page(), PageId::Landing);
    }

    #[test]
    fn intro_hands_off_exactly_once() {
        let mut session = SessionState::new();
        assert!(!session.advance(Duration::from_millis(6400)));
        assert!(session.advance(Duration::from_millis(200)));
        assert_eq!(session.stage(), Stage::Main);
        // Further ticks never re-fire the handoff.
        assert!(!session.advance(Duration::from_secs(10)));
    }

    #[test]
    fn go_to_page_clamps_out_of_range() {
        let mut session = SessionState::new();
        assert_eq!(session.go_to_page(2), PageId::Cassette);
        assert_eq!(session.go_to_page(99), PageId::Letter);
        assert_eq!(session.current_page(), PageId::Letter);
    }

    #[test]
    fn pages_advance_linearly_to_terminal() {
        let mut page = PageId::Landing;
        let mut visited = vec![page];
        while let Some(next) = page.next() {
            page = next;
            visited.push(page);
        }
        assert_eq!(visited.len(), PAGE_COUNT);
        assert!(page.is_terminal());
        assert_eq!(page, PageId::Letter);
    }
}
