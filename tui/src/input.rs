//! Input handling for the Keepsake TUI.
//!
//! A reader thread pulls crossterm events into a bounded channel; the
//! frame loop drains the queue once per frame and routes keys to the
//! mounted page. Draining is capped so a burst of input never starves
//! rendering.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use keepsake_engine::{App, LetterStage, PageState, Stage};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reader-thread pump feeding the frame loop without blocking it.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    shutdown: Arc<AtomicBool>,
    reader: Option<thread::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let reader = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                match event::poll(INPUT_POLL_TIMEOUT) {
                    Ok(true) => match event::read() {
                        Ok(ev) => {
                            // Queue full means the app is hopelessly behind;
                            // dropping input is the lesser evil.
                            let _ = tx.try_send(InputMsg::Event(ev));
                        }
                        Err(err) => {
                            let _ = tx.try_send(InputMsg::Error(err.to_string()));
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        let _ = tx.try_send(InputMsg::Error(err.to_string()));
                        break;
                    }
                }
            }
        });
        Self {
            rx,
            shutdown,
            reader: Some(reader),
        }
    }

    fn try_next(&mut self) -> Option<InputMsg> {
        self.rx.try_recv().ok()
    }

    /// Stop the reader thread and wait for it to exit.
    pub fn shutdown(mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.reader.take() {
            let _ = handle.join();
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain queued input and apply it to the app. Returns `true` to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        match input.try_next() {
            Some(InputMsg::Event(event)) => on_event(app, &event),
            Some(InputMsg::Error(message)) => return Err(anyhow!("input error: {message}")),
            None => break,
        }
        if app.should_quit() {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

fn on_event(app: &mut App, event: &Event) {
    let Event::Key(key) = event else { return };
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return;
    }

    if is_quit(key) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        code => {
            if app.stage() == Stage::Main {
                route_page_key(app, code);
            }
            // The intro has no controls; it plays out on its own.
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn route_page_key(app: &mut App, code: KeyCode) {
    let is_continue = matches!(
        code,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n')
    );

    match app.page() {
        PageState::Landing(_) | PageState::Bucket(_) => {
            if is_continue {
                app.advance_page_requested();
            }
        }
        PageState::Cassette(_) => {
            if let Some(index) = digit_index(code) {
                debug!(track = index, "Toggle track");
                app.toggle_track(index);
            } else if is_continue {
                app.advance_page_requested();
            }
        }
        PageState::Cards(_) => {
            if let Some(index) = digit_index(code) {
                app.flip_card(index);
            } else if is_continue {
                app.advance_page_requested();
            }
        }
        PageState::Letter(flow) => match flow.stage() {
            LetterStage::Locked => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('i')) {
                    app.ignite();
                }
            }
            LetterStage::Igniting => {}
            LetterStage::Letter => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('s')) {
                    app.seal();
                }
            }
            LetterStage::Sealed => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('r')) {
                    app.restart();
                }
            }
        },
    }
}

fn digit_index(code: KeyCode) -> Option<usize> {
    if let KeyCode::Char(c) = code
        && let Some(digit) = c.to_digit(10)
        && digit > 0
    {
        return Some(digit as usize - 1);
    }
    None
}
