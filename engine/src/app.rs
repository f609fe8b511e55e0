//! The application state machine.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::debug;

use keepsake_types::ContentDoc;
use keepsake_types::ui::{
    LetterStage, PageId, PageTransition, SessionState, Stage, TransitionEvent, UiOptions,
    ViewState,
};

use crate::ambient::SnowField;
use crate::audio::Jukebox;
use crate::pages::{IntroState, PageState};

/// Sparkle overlay flake count for the main stage.
const OVERLAY_SNOW_COUNT: usize = 80;

/// All runtime state of the experience.
///
/// The frame loop drives it with three calls per frame: drain input into
/// the input methods, [`Self::tick`] with the frame delta, then render.
/// State transitions triggered by input and by timers are therefore
/// serialized on one thread; no two advance paths ever run concurrently.
pub struct App {
    content: ContentDoc,
    session: SessionState,
    intro: IntroState,
    page: PageState,
    view: ViewState,
    overlay_snow: SnowField,
    jukebox: Jukebox,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(content: ContentDoc, ui_options: UiOptions, track_paths: Vec<PathBuf>) -> Self {
        let track_count = content.chill_zone.tracks.len();
        let page = PageState::mount(PageId::Landing, &content);
        Self {
            jukebox: Jukebox::new(track_count, track_paths),
            session: SessionState::new(),
            intro: IntroState::new(),
            page,
            view: ViewState::new(ui_options),
            overlay_snow: SnowField::new(OVERLAY_SNOW_COUNT),
            content,
            should_quit: false,
        }
    }

    /// Measure the delta since the previous frame.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    /// Advance every live timer by `delta`.
    pub fn tick(&mut self, delta: Duration) {
        match self.session.stage() {
            Stage::Intro => {
                self.intro.advance(delta);
                if self.session.advance(delta) {
                    self.enter_main();
                }
            }
            Stage::Main => {
                self.overlay_snow.advance(delta);
                self.advance_transition(delta);
                self.advance_page(delta);
            }
        }
        self.jukebox.tick(delta);
    }

    fn advance_transition(&mut self, delta: Duration) {
        let Some(transition) = self.view.transition.as_mut() else {
            return;
        };
        match transition.advance(delta) {
            Some(TransitionEvent::Mount(target)) => self.mount_page(target),
            Some(TransitionEvent::Finished) => self.view.transition = None,
            None => {}
        }
    }

    fn advance_page(&mut self, delta: Duration) {
        match &mut self.page {
            PageState::Landing(state) => state.advance(delta),
            PageState::Bucket(state) => state.advance(delta),
            PageState::Cassette(state) => state.advance(delta, self.jukebox.deck().is_playing()),
            PageState::Cards(state) => state.advance(delta),
            PageState::Letter(flow) => flow.advance(delta),
        }
    }

    /// Intro timer completed: hand off to the main stage.
    fn enter_main(&mut self) {
        debug!("Intro complete, entering main stage");
        self.mount_page(PageId::Landing);
        self.view.transition = Some(PageTransition::entering(PageId::Landing));
    }

    /// Replace the mounted page. The old variant drops here, cancelling
    /// every timer and particle loop it owned.
    fn mount_page(&mut self, target: PageId) {
        self.page = PageState::mount(target, &self.content);
        self.view.scroll.reset();
        self.view.scroll_max = 0;
    }

    /// True while input routed to the departing page must be dropped.
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.view
            .transition
            .as_ref()
            .is_some_and(PageTransition::locks_input)
    }

    /// Begin a transition to an arbitrary page index (clamped).
    pub fn go_to_page(&mut self, index: usize) {
        if self.session.stage() != Stage::Main || self.input_locked() {
            return;
        }
        let target = self.session.go_to_page(index);
        debug!(page = target.index(), "Page transition started");
        self.view.transition = Some(PageTransition::to(target));
    }

    /// The current page's continue control.
    pub fn advance_page_requested(&mut self) {
        if self.input_locked() {
            return;
        }
        // The landing page's control only exists once its fade-in beat fired.
        if let PageState::Landing(state) = &self.page
            && !state.button_visible()
        {
            return;
        }
        if let Some(next) = self.session.current_page().next() {
            self.go_to_page(next.index());
        }
    }

    /// Final-letter page: `locked -> igniting`.
    pub fn ignite(&mut self) {
        if self.input_locked() {
            return;
        }
        if let PageState::Letter(flow) = &mut self.page {
            flow.ignite();
        }
    }

    /// Final-letter page: `letter -> sealed`.
    pub fn seal(&mut self) {
        if self.input_locked() {
            return;
        }
        if let PageState::Letter(flow) = &mut self.page {
            flow.seal();
        }
    }

    /// Cassette page: toggle playback of a track.
    pub fn toggle_track(&mut self, index: usize) {
        if self.input_locked() {
            return;
        }
        if matches!(self.page, PageState::Cassette(_)) {
            self.jukebox.toggle(index);
        }
    }

    /// Flip-cards page: flip a card.
    pub fn flip_card(&mut self, index: usize) {
        if self.input_locked() {
            return;
        }
        if let PageState::Cards(state) = &mut self.page {
            state.flip(index);
        }
    }

    /// Restart the whole experience from the terminal page.
    ///
    /// The observed behavior being preserved is a full reload, so this is a
    /// full in-memory re-init: session, page state, ambient fields and
    /// scroll are rebuilt and audio stops. The jukebox itself (the
    /// registry) survives, as process-wide state does.
    pub fn restart(&mut self) {
        let PageState::Letter(flow) = &self.page else {
            return;
        };
        if flow.stage() != LetterStage::Sealed {
            return;
        }
        debug!("Restarting the journey");
        self.jukebox.stop_all();
        self.session = SessionState::new();
        self.intro = IntroState::new();
        self.page = PageState::mount(PageId::Landing, &self.content);
        self.overlay_snow = SnowField::new(OVERLAY_SNOW_COUNT);
        let ui_options = self.view.ui_options;
        self.view = ViewState::new(ui_options);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.view.scroll.scroll_up(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        let max = self.view.scroll_max;
        self.view.scroll.scroll_down(rows, max);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // --- read surface for the renderer ---

    #[must_use]
    pub fn content(&self) -> &ContentDoc {
        &self.content
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.session.current_page()
    }

    #[must_use]
    pub fn intro(&self) -> &IntroState {
        &self.intro
    }

    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }

    #[must_use]
    pub fn overlay_snow(&self) -> &SnowField {
        &self.overlay_snow
    }

    #[must_use]
    pub fn jukebox(&self) -> &Jukebox {
        &self.jukebox
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }
}
