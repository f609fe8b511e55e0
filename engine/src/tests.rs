//! Unit tests for the engine crate.
//!
//! Everything here drives the `App` with explicit deltas; no test waits on
//! a real clock.

use std::time::Duration;

use keepsake_types::ContentDoc;
use keepsake_types::TrackContent;
use keepsake_types::ui::{
    ENTER_DURATION, EXIT_DURATION, INTRO_DURATION, LetterStage, PageId, Stage, UiOptions,
};

use crate::app::App;
use crate::pages::PageState;

fn test_content() -> ContentDoc {
    let mut content = ContentDoc::default();
    content.activity.bucket_list = vec!["a".into(), "b".into(), "c".into()];
    content.chill_zone.tracks = vec![
        TrackContent::default(),
        TrackContent::default(),
        TrackContent::default(),
    ];
    content.cards.cards = vec![Default::default(), Default::default(), Default::default()];
    content.final_letter.typed_full_message = Some("Happy New Year!".into());
    content
}

fn test_app() -> App {
    App::new(test_content(), UiOptions::default(), Vec::new())
}

/// Tick the app through a full exit+enter page swap.
fn settle_transition(app: &mut App) {
    app.tick(EXIT_DURATION);
    app.tick(ENTER_DURATION);
    app.tick(Duration::from_millis(1));
}

/// Drive a fresh app past the intro into the main stage.
fn main_stage_app() -> App {
    let mut app = test_app();
    app.tick(INTRO_DURATION);
    settle_transition(&mut app);
    app
}

#[test]
fn starts_in_intro() {
    let app = test_app();
    assert_eq!(app.stage(), Stage::Intro);
    assert_eq!(app.current_page(), PageId::Landing);
}

#[test]
fn intro_auto_advances_to_main() {
    let mut app = test_app();
    app.tick(INTRO_DURATION - Duration::from_millis(100));
    assert_eq!(app.stage(), Stage::Intro);
    app.tick(Duration::from_millis(200));
    assert_eq!(app.stage(), Stage::Main);
    assert_eq!(app.current_page(), PageId::Landing);
}

#[test]
fn go_to_page_mounts_exactly_that_page_with_scroll_reset() {
    let mut app = main_stage_app();
    app.view_mut().scroll_max = 10;
    app.scroll_down(5);
    assert_eq!(app.view().scroll.offset(), 5);

    app.go_to_page(2);
    settle_transition(&mut app);

    assert_eq!(app.current_page(), PageId::Cassette);
    assert!(matches!(app.page(), PageState::Cassette(_)));
    assert_eq!(app.view().scroll.offset(), 0);
}

#[test]
fn continue_walks_the_pages_in_order() {
    let mut app = main_stage_app();
    // The landing continue control only appears after its fade-in beat.
    app.tick(Duration::from_millis(2500));

    let mut visited = vec![app.current_page()];
    for _ in 0..PageId::ALL.len() - 1 {
        app.advance_page_requested();
        settle_transition(&mut app);
        visited.push(app.current_page());
    }
    assert_eq!(visited, PageId::ALL.to_vec());

    // The terminal page has no next; continue is a no-op there.
    app.advance_page_requested();
    settle_transition(&mut app);
    assert_eq!(app.current_page(), PageId::Letter);
}

#[test]
fn landing_continue_is_inert_before_the_button_appears() {
    let mut app = main_stage_app();
    app.advance_page_requested();
    settle_transition(&mut app);
    assert_eq!(app.current_page(), PageId::Landing);
}

#[test]
fn input_is_dropped_while_a_page_exits() {
    let mut app = main_stage_app();
    app.tick(Duration::from_millis(2500));

    app.go_to_page(3);
    assert!(app.input_locked());
    // Mid-exit, the departing page's controls are unreachable.
    app.advance_page_requested();
    app.tick(EXIT_DURATION / 2);
    assert!(app.input_locked());

    settle_transition(&mut app);
    assert!(!app.input_locked());
    assert_eq!(app.current_page(), PageId::Cards);
}

#[test]
fn letter_flow_runs_inside_the_app() {
    let mut app = main_stage_app();
    app.go_to_page(4);
    settle_transition(&mut app);

    app.ignite();
    // 100 steps at 30ms each, then the 500ms grace pause.
    app.tick(Duration::from_millis(3000));
    app.tick(Duration::from_millis(500));
    let PageState::Letter(flow) = app.page() else {
        panic!("letter page must be mounted");
    };
    assert_eq!(flow.stage(), LetterStage::Letter);

    app.seal();
    app.tick(Duration::from_millis(50 * 5));
    let PageState::Letter(flow) = app.page() else {
        panic!("letter page must be mounted");
    };
    assert_eq!(flow.typed(), "Happy");
}

#[test]
fn navigating_away_mid_igniting_cancels_the_counter() {
    let mut app = main_stage_app();
    app.go_to_page(4);
    settle_transition(&mut app);
    app.ignite();
    app.tick(Duration::from_millis(30 * 40));

    // Unmount mid-count: the page swap drops the old flow and its timers.
    app.go_to_page(0);
    settle_transition(&mut app);
    app.tick(Duration::from_secs(10));

    // A fresh mount starts from initial values; nothing leaked through.
    app.go_to_page(4);
    settle_transition(&mut app);
    let PageState::Letter(flow) = app.page() else {
        panic!("letter page must be mounted");
    };
    assert_eq!(flow.stage(), LetterStage::Locked);
    assert_eq!(flow.progress(), 0);
}

#[test]
fn track_toggles_only_reach_the_cassette_page() {
    let mut app = main_stage_app();
    app.toggle_track(0);
    assert_eq!(app.jukebox().deck().active(), None);

    app.go_to_page(2);
    settle_transition(&mut app);
    app.toggle_track(0);
    assert_eq!(app.jukebox().deck().active(), Some(0));
}

#[test]
fn deck_selection_survives_page_remounts() {
    let mut app = main_stage_app();
    app.go_to_page(2);
    settle_transition(&mut app);
    app.toggle_track(1);

    // Leave and come back: the registry lives above page lifetime.
    app.go_to_page(3);
    settle_transition(&mut app);
    app.go_to_page(2);
    settle_transition(&mut app);
    assert_eq!(app.jukebox().deck().active(), Some(1));
}

#[test]
fn restart_only_works_from_the_sealed_stage() {
    let mut app = main_stage_app();
    app.restart();
    assert_eq!(app.stage(), Stage::Main);

    app.go_to_page(4);
    settle_transition(&mut app);
    app.restart();
    assert_eq!(app.stage(), Stage::Main);

    app.ignite();
    app.tick(Duration::from_millis(3000));
    app.tick(Duration::from_millis(500));
    app.seal();
    app.restart();
    assert_eq!(app.stage(), Stage::Intro);
    assert_eq!(app.current_page(), PageId::Landing);
    assert!(!app.jukebox().deck().is_playing());
}

#[test]
fn quit_flag_sticks() {
    let mut app = test_app();
    assert!(!app.should_quit());
    app.quit();
    assert!(app.should_quit());
}
