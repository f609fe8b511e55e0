//! Core engine for Keepsake - state machine and orchestration.
//!
//! This crate contains the [`App`] state machine without TUI dependencies,
//! providing:
//!
//! - **Session sequencing**: the intro-to-main handoff and the page index
//! - **Page lifecycle**: per-page state built on mount, dropped on unmount,
//!   so every timer a page owns dies with it
//! - **Audio registry**: the [`Jukebox`], a process-wide playback registry
//!   living above page lifetime
//! - **Ambient effects**: snowfall, star and firework particle fields
//! - **Configuration**: TOML config and content loading
//!
//! # Architecture
//!
//! The frame loop (owned by the binary) drains input, calls
//! [`App::tick`] with the measured frame delta, and renders. Nothing in
//! this crate schedules callbacks: every timer is a value advanced by that
//! delta, which makes cancellation a matter of ownership and keeps the
//! whole machine testable with virtual time.
//!
//! The TUI layer (`keepsake_tui`) reads state from `App` and forwards input
//! back to it. No rendering logic lives in this crate.

mod ambient;
mod app;
mod audio;
mod config;
mod content_store;
mod pages;

pub use ambient::{FireworkBurst, Spark, SparkColor, SnowField, Snowflake, StarField};
pub use app::App;
pub use audio::Jukebox;
pub use config::{AppConfig, AudioConfig, ConfigError, ContentConfig, KeepsakeConfig};
pub use content_store::load_content;
pub use pages::{
    BucketState, CardsState, CassetteState, IntroBeat, IntroState, LandingState, PageState,
};

// Re-export the domain types the binary and TUI consume alongside the App.
pub use keepsake_types::ContentDoc;
pub use keepsake_types::ui::{
    DeckState, LetterFlow, LetterStage, PageId, PageTransition, ScrollState, SessionState, Stage,
    TransitionPhase, UiOptions, ViewState,
};

#[cfg(test)]
mod tests;
