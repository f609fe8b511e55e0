//! The content table every page reads its copy from.
//!
//! Content is a structured document keyed by page section then field,
//! deserialized from TOML by the engine. Every field is optional: a missing
//! field degrades to a fallback string via [`resolve`], never a crash.
//! Changing copy never touches sequencing logic.

use serde::Deserialize;

/// Resolve a display string from the most specific to least specific source.
///
/// Returns the first present source, or `fallback` when every source is
/// absent. Applied uniformly instead of repeated inline fallback chains.
#[must_use]
pub fn resolve<'a>(sources: &[Option<&'a str>], fallback: &'a str) -> &'a str {
    sources.iter().find_map(|s| *s).unwrap_or(fallback)
}

/// The full content document.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContentDoc {
    pub animated: AnimatedContent,
    pub landing: LandingContent,
    pub activity: ActivityContent,
    pub chill_zone: ChillZoneContent,
    pub cards: CardsContent,
    pub final_letter: FinalLetterContent,
}

/// Copy for the intro overlay and the landing card.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AnimatedContent {
    pub ny_label: Option<String>,
    pub ny_main_year: Option<String>,
    pub ny_subtitle: Option<String>,
    pub ny_bottom_status: Option<String>,
    pub card_title: Option<String>,
    pub card_subtitle: Option<String>,
    pub card_last_line: Option<String>,
    pub card_footer: Option<String>,
}

/// Older alternate source for the landing card fields. Kept as a fallback
/// link in the resolution chain so documents written against the old keys
/// still render.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub last_line: Option<String>,
    pub footer: Option<String>,
}

/// Copy for the bucket-list page.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ActivityContent {
    pub bucket_heading: Option<String>,
    pub ready_prompt: Option<String>,
    pub bucket_list: Vec<String>,
    pub continue_button: Option<String>,
}

/// Copy for the cassette player page.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ChillZoneContent {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub choose_track_hint: Option<String>,
    pub continue_button: Option<String>,
    pub tracks: Vec<TrackContent>,
}

/// One track entry, paired positionally with the configured audio files.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TrackContent {
    pub title: Option<String>,
    pub caption: Option<String>,
}

/// Copy for the flip-cards page.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CardsContent {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub instruction: Option<String>,
    pub continue_button: Option<String>,
    pub cards: Vec<CardContent>,
}

/// One flip-card: a short front line and a back face.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub front: Option<String>,
    pub back_title: Option<String>,
    pub back_text: Option<String>,
    pub back_stamp: Option<String>,
    pub back_emoji: Option<String>,
}

/// Copy for the final-letter page.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FinalLetterContent {
    pub title: Option<String>,
    pub letter_greeting: Option<String>,
    pub letter_paragraphs: Vec<String>,
    pub seal_button: Option<String>,
    pub sealed_title: Option<String>,
    pub typed_full_message: Option<String>,
    pub typed_default: Option<String>,
    pub loading_text: Option<String>,
    pub restart_button: Option<String>,
}

impl ContentDoc {
    /// Landing card title, falling through the alternate sources.
    #[must_use]
    pub fn landing_title(&self) -> &str {
        resolve(
            &[
                self.animated.card_title.as_deref(),
                self.landing.title.as_deref(),
                self.animated.ny_label.as_deref(),
            ],
            "Welcome",
        )
    }

    #[must_use]
    pub fn landing_subtitle(&self) -> &str {
        resolve(
            &[
                self.animated.card_subtitle.as_deref(),
                self.landing.subtitle.as_deref(),
                self.animated.ny_subtitle.as_deref(),
            ],
            "",
        )
    }

    #[must_use]
    pub fn landing_last_line(&self) -> &str {
        resolve(
            &[
                self.animated.card_last_line.as_deref(),
                self.landing.last_line.as_deref(),
                self.animated.ny_bottom_status.as_deref(),
            ],
            "",
        )
    }

    #[must_use]
    pub fn landing_footer(&self) -> &str {
        resolve(
            &[
                self.animated.card_footer.as_deref(),
                self.landing.footer.as_deref(),
            ],
            "",
        )
    }

    /// The message revealed by the sealed-stage typewriter.
    #[must_use]
    pub fn typed_message(&self) -> &str {
        resolve(
            &[
                self.final_letter.typed_full_message.as_deref(),
                self.final_letter.typed_default.as_deref(),
            ],
            "Happy New Year!",
        )
    }

    #[must_use]
    pub fn loading_text(&self) -> &str {
        resolve(
            &[self.final_letter.loading_text.as_deref()],
            "almost there...",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_picks_first_present() {
        assert_eq!(resolve(&[None, Some("a"), Some("b")], "z"), "a");
    }

    #[test]
    fn resolve_falls_back_when_all_absent() {
        assert_eq!(resolve(&[None, None], "z"), "z");
    }

    #[test]
    fn empty_doc_degrades_to_fallbacks() {
        let doc = ContentDoc::default();
        assert_eq!(doc.landing_title(), "Welcome");
        assert_eq!(doc.landing_subtitle(), "");
        assert_eq!(doc.typed_message(), "Happy New Year!");
    }

    #[test]
    fn landing_title_prefers_card_title_over_legacy() {
        let mut doc = ContentDoc::default();
        doc.landing.title = Some("legacy".into());
        doc.animated.ny_label = Some("label".into());
        assert_eq!(doc.landing_title(), "legacy");

        doc.animated.card_title = Some("card".into());
        assert_eq!(doc.landing_title(), "card");
    }

    #[test]
    fn typed_message_prefers_full_message() {
        let mut doc = ContentDoc::default();
        doc.final_letter.typed_default = Some("short".into());
        assert_eq!(doc.typed_message(), "short");
        doc.final_letter.typed_full_message = Some("long".into());
        assert_eq!(doc.typed_message(), "long");
    }
}
