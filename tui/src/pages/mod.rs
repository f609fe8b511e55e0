//! Per-page renderers.

pub(crate) mod bucket;
pub(crate) mod cards;
pub(crate) mod cassette;
pub(crate) mod intro;
pub(crate) mod landing;
pub(crate) mod letter;

use keepsake_engine::{App, LetterStage, PageState};

/// Key hints for the status bar, matched to the mounted page's controls.
pub(crate) fn key_hints(app: &App) -> &'static str {
    match app.page() {
        PageState::Landing(_) | PageState::Bucket(_) => "[enter] continue  [q] quit",
        PageState::Cassette(_) => "[1-3] play/pause  [enter] continue  [q] quit",
        PageState::Cards(_) => "[1-3] flip  [enter] continue  [q] quit",
        PageState::Letter(flow) => match flow.stage() {
            LetterStage::Locked => "[enter] ignite  [q] quit",
            LetterStage::Igniting => "[q] quit",
            LetterStage::Letter => "[enter] seal  [q] quit",
            LetterStage::Sealed => "[enter] restart  [q] quit",
        },
    }
}
