//! UI state machines for the experience.
//!
//! Pure data types with no IO, no async, no ratatui dependency. The engine
//! owns them; the tui layer reads them for rendering. Every type here is
//! advanced by explicit frame deltas, so cancellation is ownership: dropping
//! the owning state stops every timer it holds.

mod animation;
mod cue;
mod deck;
mod letter;
mod scroll;
mod sequencer;
mod transition;
mod typewriter;
mod view_state;

pub use animation::{AnimPhase, EffectTimer, IntervalTicker};
pub use cue::CueSheet;
pub use deck::{DeckCommand, DeckState};
pub use letter::{LetterFlow, LetterStage, GRACE_PAUSE, PROGRESS_TICK, TYPE_TICK};
pub use scroll::ScrollState;
pub use sequencer::{INTRO_DURATION, PAGE_COUNT, PageId, SessionState, Stage};
pub use transition::{
    ENTER_DURATION, EXIT_DURATION, PageTransition, TransitionEvent, TransitionPhase,
};
pub use typewriter::Typewriter;
pub use view_state::{UiOptions, ViewState};
