//! Core domain types for Keepsake.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: the content table the pages read their copy from, and the
//! state machines that drive the experience. Everything here is advanced by
//! explicit [`std::time::Duration`] deltas, never by wall-clock callbacks,
//! so every timer is unit-testable without real waits.

mod content;
pub use content::{
    ActivityContent, AnimatedContent, CardContent, CardsContent, ChillZoneContent, ContentDoc,
    FinalLetterContent, LandingContent, TrackContent, resolve,
};

pub mod ui;
