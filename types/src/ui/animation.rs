use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Phase of a one-shot animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

/// A one-shot timer advanced by frame deltas, reporting progress in `0..=1`.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Extracts whole fixed-size steps from frame deltas.
///
/// Replaces wall-clock intervals: callers advance by whatever delta the
/// frame loop measured and receive the number of steps that elapsed, with
/// the remainder carried into the next call.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    step: Duration,
    carry: Duration,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            carry: Duration::ZERO,
        }
    }

    /// Advance by `delta`, returning how many whole steps elapsed.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.carry = self.carry.saturating_add(delta);
        let mut steps = 0;
        while self.carry >= self.step {
            self.carry -= self.step;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_immediately_finished() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert!(timer.is_finished());
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_clamped_at_one() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::from_millis(1000));
        assert!(timer.progress() <= 1.0);
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }

    #[test]
    fn running_phase_before_completion() {
        let mut timer = EffectTimer::new(Duration::from_millis(200));
        timer.advance(Duration::from_millis(100));
        assert!(matches!(
            timer.phase(),
            AnimPhase::Running { progress } if (progress - 0.5).abs() < 0.01
        ));
    }

    #[test]
    fn ticker_carries_remainder() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(30));
        assert_eq!(ticker.advance(Duration::from_millis(29)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(1)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(95)), 3);
    }

    #[test]
    fn ticker_zero_step_never_fires() {
        let mut ticker = IntervalTicker::new(Duration::ZERO);
        assert_eq!(ticker.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn ticker_reset_drops_carry() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(50));
        ticker.advance(Duration::from_millis(49));
        ticker.reset();
        assert_eq!(ticker.advance(Duration::from_millis(49)), 0);
    }
}
