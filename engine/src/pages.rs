//! Per-page mounted state.
//!
//! Each page that needs local state gets a struct here, built fresh on
//! every mount and dropped on unmount. Dropping the state cancels every
//! timer and particle loop the page owns; there is no other cancellation
//! path and none is needed.

use std::time::Duration;

use keepsake_types::ContentDoc;
use keepsake_types::ui::{CueSheet, EffectTimer, LetterFlow, PageId};

use crate::ambient::{FireworkBurst, SnowField, StarField};

/// Number of glyph snowflakes on the card pages.
const PAGE_SNOW_COUNT: usize = 15;

/// The intro overlay's visual beats, in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroBeat {
    Flash,
    Burst,
    Title,
    Subtitle,
    Status,
}

/// State for the intro overlay: a star field, the rocket ascent, and a cue
/// sheet firing the explosion and text-reveal beats at fixed offsets.
#[derive(Debug, Clone)]
pub struct IntroState {
    cues: CueSheet<IntroBeat>,
    stars: StarField,
    rocket: EffectTimer,
    flash: Option<EffectTimer>,
    burst: Option<FireworkBurst>,
    title: Option<EffectTimer>,
    subtitle: Option<EffectTimer>,
    status: Option<EffectTimer>,
}

impl IntroState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cues: CueSheet::new(vec![
                (Duration::from_millis(2100), IntroBeat::Flash),
                (Duration::from_millis(2200), IntroBeat::Burst),
                (Duration::from_millis(2600), IntroBeat::Title),
                (Duration::from_millis(3200), IntroBeat::Subtitle),
                (Duration::from_millis(4500), IntroBeat::Status),
            ]),
            stars: StarField::new(80),
            rocket: EffectTimer::new(Duration::from_millis(2200)),
            flash: None,
            burst: None,
            title: None,
            subtitle: None,
            status: None,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.stars.advance(delta);
        self.rocket.advance(delta);
        for beat in self.cues.advance(delta) {
            match beat {
                IntroBeat::Flash => {
                    self.flash = Some(EffectTimer::new(Duration::from_millis(800)));
                }
                IntroBeat::Burst => self.burst = Some(FireworkBurst::new(45)),
                IntroBeat::Title => {
                    self.title = Some(EffectTimer::new(Duration::from_millis(1000)));
                }
                IntroBeat::Subtitle => {
                    self.subtitle = Some(EffectTimer::new(Duration::from_millis(1000)));
                }
                IntroBeat::Status => {
                    self.status = Some(EffectTimer::new(Duration::from_millis(600)));
                }
            }
        }
        for timer in [
            &mut self.flash,
            &mut self.title,
            &mut self.subtitle,
            &mut self.status,
        ]
        .into_iter()
        .flatten()
        {
            timer.advance(delta);
        }
        if let Some(burst) = &mut self.burst {
            burst.advance(delta);
            if burst.is_finished() {
                self.burst = None;
            }
        }
    }

    #[must_use]
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Rocket ascent progress, `0..=1`; the rocket is gone once finished.
    #[must_use]
    pub fn rocket_progress(&self) -> Option<f32> {
        (!self.rocket.is_finished()).then(|| self.rocket.progress())
    }

    #[must_use]
    pub fn flash_progress(&self) -> Option<f32> {
        self.flash
            .as_ref()
            .filter(|t| !t.is_finished())
            .map(EffectTimer::progress)
    }

    #[must_use]
    pub fn burst(&self) -> Option<&FireworkBurst> {
        self.burst.as_ref()
    }

    #[must_use]
    pub fn title_progress(&self) -> Option<f32> {
        self.title.as_ref().map(EffectTimer::progress)
    }

    #[must_use]
    pub fn subtitle_progress(&self) -> Option<f32> {
        self.subtitle.as_ref().map(EffectTimer::progress)
    }

    #[must_use]
    pub fn status_progress(&self) -> Option<f32> {
        self.status.as_ref().map(EffectTimer::progress)
    }
}

impl Default for IntroState {
    fn default() -> Self {
        Self::new()
    }
}

/// The landing page's envelope-opening beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LandingBeat {
    CardSlide,
    ButtonFade,
}

/// State for the landing page: the envelope flap opens immediately, the
/// card slides up shortly after, and the continue control fades in last.
#[derive(Debug, Clone)]
pub struct LandingState {
    cues: CueSheet<LandingBeat>,
    flap: EffectTimer,
    card: Option<EffectTimer>,
    button: Option<EffectTimer>,
    snow: SnowField,
}

impl LandingState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cues: CueSheet::new(vec![
                (Duration::from_millis(800), LandingBeat::CardSlide),
                (Duration::from_millis(2400), LandingBeat::ButtonFade),
            ]),
            flap: EffectTimer::new(Duration::from_millis(1800)),
            card: None,
            button: None,
            snow: SnowField::new(PAGE_SNOW_COUNT),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.flap.advance(delta);
        for beat in self.cues.advance(delta) {
            match beat {
                LandingBeat::CardSlide => {
                    self.card = Some(EffectTimer::new(Duration::from_millis(1500)));
                }
                LandingBeat::ButtonFade => {
                    self.button = Some(EffectTimer::new(Duration::from_millis(800)));
                }
            }
        }
        for timer in [&mut self.card, &mut self.button].into_iter().flatten() {
            timer.advance(delta);
        }
        self.snow.advance(delta);
    }

    #[must_use]
    pub fn flap_progress(&self) -> f32 {
        self.flap.progress()
    }

    /// Card slide-up progress; `None` until the beat fires.
    #[must_use]
    pub fn card_progress(&self) -> Option<f32> {
        self.card.as_ref().map(EffectTimer::progress)
    }

    /// True once the continue control is visible and accepting input.
    #[must_use]
    pub fn button_visible(&self) -> bool {
        self.button.is_some()
    }

    #[must_use]
    pub fn snow(&self) -> &SnowField {
        &self.snow
    }
}

impl Default for LandingState {
    fn default() -> Self {
        Self::new()
    }
}

/// State for the bucket-list page: items reveal with a fixed stagger.
#[derive(Debug, Clone)]
pub struct BucketState {
    elapsed: Duration,
    items: usize,
    snow: SnowField,
}

const ITEM_STAGGER: Duration = Duration::from_millis(100);

impl BucketState {
    #[must_use]
    pub fn new(items: usize) -> Self {
        Self {
            elapsed: Duration::ZERO,
            items,
            snow: SnowField::new(PAGE_SNOW_COUNT),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.snow.advance(delta);
    }

    /// How many list items are visible so far.
    #[must_use]
    pub fn revealed(&self) -> usize {
        if self.items == 0 {
            return 0;
        }
        let steps = (self.elapsed.as_millis() / ITEM_STAGGER.as_millis()) as usize;
        (steps + 1).min(self.items)
    }

    #[must_use]
    pub fn snow(&self) -> &SnowField {
        &self.snow
    }
}

/// State for the cassette page: the reels spin while audio plays.
#[derive(Debug, Clone, Default)]
pub struct CassetteState {
    reel_turns: f32,
}

/// One full reel revolution per five seconds of playback.
const REEL_SECS_PER_TURN: f32 = 5.0;

impl CassetteState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: Duration, playing: bool) {
        if playing {
            self.reel_turns += delta.as_secs_f32() / REEL_SECS_PER_TURN;
        }
    }

    /// Current reel angle as a fraction of a revolution, `0..1`.
    #[must_use]
    pub fn reel_phase(&self) -> f32 {
        self.reel_turns.fract()
    }
}

/// State for the flip-cards page: which cards show their back face.
#[derive(Debug, Clone)]
pub struct CardsState {
    flipped: Vec<bool>,
    flips: Vec<Option<EffectTimer>>,
}

const FLIP_DURATION: Duration = Duration::from_millis(800);

impl CardsState {
    #[must_use]
    pub fn new(cards: usize) -> Self {
        Self {
            flipped: vec![false; cards],
            flips: vec![None; cards],
        }
    }

    /// Toggle a card between front and back.
    pub fn flip(&mut self, index: usize) {
        if let Some(state) = self.flipped.get_mut(index) {
            *state = !*state;
            self.flips[index] = Some(EffectTimer::new(FLIP_DURATION));
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        for timer in self.flips.iter_mut().flatten() {
            timer.advance(delta);
        }
    }

    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// Flip animation progress for a card, `1.0` when at rest.
    #[must_use]
    pub fn flip_progress(&self, index: usize) -> f32 {
        self.flips
            .get(index)
            .and_then(Option::as_ref)
            .map_or(1.0, EffectTimer::progress)
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.flipped.len()
    }
}

/// The mounted page's local state. Exactly one variant exists at a time;
/// swapping pages replaces the variant, dropping the old page's timers.
#[derive(Debug, Clone)]
pub enum PageState {
    Landing(LandingState),
    Bucket(BucketState),
    Cassette(CassetteState),
    Cards(CardsState),
    Letter(LetterFlow),
}

impl PageState {
    /// Build fresh state for a page. Every mount starts from initial
    /// values; nothing persists across mounts except the audio registry,
    /// which lives above page lifetime.
    #[must_use]
    pub fn mount(page: PageId, content: &ContentDoc) -> Self {
        match page {
            PageId::Landing => Self::Landing(LandingState::new()),
            PageId::BucketList => Self::Bucket(BucketState::new(content.activity.bucket_list.len())),
            PageId::Cassette => Self::Cassette(CassetteState::new()),
            PageId::Cards => Self::Cards(CardsState::new(content.cards.cards.len())),
            PageId::Letter => Self::Letter(LetterFlow::new(content.typed_message())),
        }
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        match self {
            Self::Landing(_) => PageId::Landing,
            Self::Bucket(_) => PageId::BucketList,
            Self::Cassette(_) => PageId::Cassette,
            Self::Cards(_) => PageId::Cards,
            Self::Letter(_) => PageId::Letter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_beats_fire_in_order() {
        let mut intro = IntroState::new();
        intro.advance(Duration::from_millis(2000));
        assert!(intro.flash_progress().is_none());
        assert!(intro.burst().is_none());

        intro.advance(Duration::from_millis(300));
        assert!(intro.flash_progress().is_some());
        assert!(intro.burst().is_some());
        assert!(intro.title_progress().is_none());

        intro.advance(Duration::from_millis(2500));
        assert!(intro.title_progress().is_some());
        assert!(intro.subtitle_progress().is_some());
        assert!(intro.status_progress().is_some());
    }

    #[test]
    fn rocket_disappears_after_ascent() {
        let mut intro = IntroState::new();
        intro.advance(Duration::from_millis(1000));
        assert!(intro.rocket_progress().is_some());
        intro.advance(Duration::from_millis(1500));
        assert!(intro.rocket_progress().is_none());
    }

    #[test]
    fn landing_button_appears_last() {
        let mut landing = LandingState::new();
        landing.advance(Duration::from_millis(1000));
        assert!(landing.card_progress().is_some());
        assert!(!landing.button_visible());
        landing.advance(Duration::from_millis(1500));
        assert!(landing.button_visible());
    }

    #[test]
    fn bucket_items_reveal_with_stagger() {
        let mut bucket = BucketState::new(4);
        assert_eq!(bucket.revealed(), 1);
        bucket.advance(Duration::from_millis(100));
        assert_eq!(bucket.revealed(), 2);
        bucket.advance(Duration::from_millis(1000));
        assert_eq!(bucket.revealed(), 4);
    }

    #[test]
    fn empty_bucket_reveals_nothing() {
        let mut bucket = BucketState::new(0);
        bucket.advance(Duration::from_secs(1));
        assert_eq!(bucket.revealed(), 0);
    }

    #[test]
    fn reels_spin_only_while_playing() {
        let mut cassette = CassetteState::new();
        cassette.advance(Duration::from_secs(2), false);
        assert!(cassette.reel_phase().abs() < f32::EPSILON);
        cassette.advance(Duration::from_secs(2), true);
        assert!(cassette.reel_phase() > 0.0);
    }

    #[test]
    fn cards_flip_and_unflip() {
        let mut cards = CardsState::new(3);
        assert!(!cards.is_flipped(1));
        cards.flip(1);
        assert!(cards.is_flipped(1));
        assert!(cards.flip_progress(1) < 1.0);
        cards.advance(Duration::from_secs(1));
        assert!((cards.flip_progress(1) - 1.0).abs() < f32::EPSILON);
        cards.flip(1);
        assert!(!cards.is_flipped(1));
        // Untouched cards rest at full progress.
        assert!((cards.flip_progress(0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn out_of_range_flip_is_absorbed() {
        let mut cards = CardsState::new(2);
        cards.flip(9);
        assert!(!cards.is_flipped(9));
    }

    #[test]
    fn mount_builds_matching_state() {
        let content = ContentDoc::default();
        for page in PageId::ALL {
            assert_eq!(PageState::mount(page, &content).id(), page);
        }
    }
}
