//! View state for rendering.
//!
//! This struct groups all state related to rendering and UI display,
//! separating it from orchestration concerns.

use std::time::Instant;

use super::{PageTransition, ScrollState};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for flakes, reels and decorations.
    pub ascii_only: bool,
    /// Collapse transition offsets and ambient motion.
    pub reduced_motion: bool,
}

/// Separates view concerns from orchestration state: what the renderer
/// reads, as opposed to what drives the application logic.
#[derive(Debug)]
pub struct ViewState {
    pub scroll: ScrollState,
    /// Maximum scroll offset (content length - viewport), set by the renderer.
    pub scroll_max: u16,
    /// In-flight page transition, if any.
    pub transition: Option<PageTransition>,
    /// UI options (glyphs, motion).
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll: ScrollState::default(),
            scroll_max: 0,
            transition: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}
