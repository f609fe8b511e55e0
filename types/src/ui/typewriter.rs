//! Character-reveal ("typing") effect.

use std::time::Duration;

use super::animation::IntervalTicker;

/// Reveals a message one character per fixed tick.
///
/// An empty message completes immediately. Once fully revealed the effect
/// stops issuing updates; restarting it (re-entry to the owning stage)
/// resets the reveal cleanly.
#[derive(Debug, Clone)]
pub struct Typewriter {
    message: String,
    total_chars: usize,
    revealed: usize,
    ticker: IntervalTicker,
}

impl Typewriter {
    #[must_use]
    pub fn new(message: impl Into<String>, tick: Duration) -> Self {
        let message = message.into();
        let total_chars = message.chars().count();
        Self {
            message,
            total_chars,
            revealed: 0,
            ticker: IntervalTicker::new(tick),
        }
    }

    /// Reset the reveal to the beginning.
    pub fn restart(&mut self) {
        self.revealed = 0;
        self.ticker.reset();
    }

    /// Advance by `delta`. Returns `true` when the visible text changed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        let ticks = self.ticker.advance(delta) as usize;
        if ticks == 0 {
            return false;
        }
        self.revealed = (self.revealed + ticks).min(self.total_chars);
        true
    }

    /// The revealed prefix of the message.
    #[must_use]
    pub fn visible(&self) -> &str {
        let end = self
            .message
            .char_indices()
            .nth(self.revealed)
            .map_or(self.message.len(), |(i, _)| i);
        &self.message[..end]
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.revealed >= self.total_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(50);

    #[test]
    fn reveals_first_n_chars_after_n_ticks() {
        let mut tw = Typewriter::new("Happy New Year!", TICK);
        tw.advance(TICK * 5);
        assert_eq!(tw.visible(), "Happy");
        assert!(!tw.is_done());
    }

    #[test]
    fn clamps_to_full_length_and_stops_updating() {
        let mut tw = Typewriter::new("Happy New Year!", TICK);
        assert!(tw.advance(TICK * 1000));
        assert_eq!(tw.visible(), "Happy New Year!");
        assert!(tw.is_done());
        // Fully revealed: no further updates are issued.
        assert!(!tw.advance(TICK * 10));
    }

    #[test]
    fn empty_message_completes_immediately() {
        let mut tw = Typewriter::new("", TICK);
        assert!(tw.is_done());
        assert_eq!(tw.visible(), "");
        assert!(!tw.advance(TICK));
    }

    #[test]
    fn multibyte_chars_reveal_on_boundaries() {
        let mut tw = Typewriter::new("héllo ✨", TICK);
        tw.advance(TICK * 2);
        assert_eq!(tw.visible(), "hé");
        tw.advance(TICK * 5);
        assert_eq!(tw.visible(), "héllo ✨");
    }

    #[test]
    fn restart_resets_the_reveal() {
        let mut tw = Typewriter::new("hello", TICK);
        tw.advance(TICK * 3);
        tw.restart();
        assert_eq!(tw.visible(), "");
        tw.advance(TICK);
        assert_eq!(tw.visible(), "h");
    }

    #[test]
    fn sub_tick_deltas_accumulate() {
        let mut tw = Typewriter::new("ab", TICK);
        assert!(!tw.advance(Duration::from_millis(30)));
        assert!(tw.advance(Duration::from_millis(30)));
        assert_eq!(tw.visible(), "a");
    }
}
