//! Page-transition animation effects.

use ratatui::layout::Rect;

use keepsake_types::ui::{PageTransition, TransitionPhase};

/// Rows a page travels during an enter/exit swap.
const SLIDE_ROWS: u16 = 3;

/// Apply the current transition to the page's base rectangle.
///
/// The exit phase slides the departing page up and out; the enter phase
/// settles the new page from below. Reduced motion collapses both to the
/// base rect.
#[must_use]
pub fn apply_page_effect(
    transition: &PageTransition,
    base: Rect,
    viewport: Rect,
    reduced_motion: bool,
) -> Rect {
    if reduced_motion {
        return base;
    }
    let t = ease_out_cubic(transition.progress());
    let offset = match transition.phase() {
        TransitionPhase::Exit => (t * f32::from(SLIDE_ROWS)).round() as u16,
        TransitionPhase::Enter => ((1.0 - t) * f32::from(SLIDE_ROWS)).round() as u16,
    };
    let y = match transition.phase() {
        // Departing pages drift up, entering pages settle up from below.
        TransitionPhase::Exit => base.y.saturating_sub(offset).max(viewport.y),
        TransitionPhase::Enter => base
            .y
            .saturating_add(offset)
            .min(viewport.y.saturating_add(viewport.height.saturating_sub(1))),
    };
    Rect { y, ..base }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_types::ui::{EXIT_DURATION, PageId};
    use std::time::Duration;

    fn viewport() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn exit_slides_the_page_up() {
        let mut transition = PageTransition::to(PageId::Cards);
        transition.advance(EXIT_DURATION / 2);
        let base = Rect::new(0, 10, 80, 10);
        let moved = apply_page_effect(&transition, base, viewport(), false);
        assert!(moved.y < base.y);
        assert_eq!(moved.height, base.height);
    }

    #[test]
    fn enter_settles_to_the_base_rect() {
        let mut transition = PageTransition::entering(PageId::Cards);
        transition.advance(Duration::from_secs(10));
        let base = Rect::new(0, 10, 80, 10);
        let settled = apply_page_effect(&transition, base, viewport(), false);
        assert_eq!(settled, base);
    }

    #[test]
    fn reduced_motion_keeps_the_base_rect() {
        let transition = PageTransition::to(PageId::Cards);
        let base = Rect::new(0, 10, 80, 10);
        assert_eq!(apply_page_effect(&transition, base, viewport(), true), base);
    }

    #[test]
    fn ease_out_cubic_is_monotonic_on_the_unit_interval() {
        let mut last = 0.0;
        for i in 0..=10 {
            let v = ease_out_cubic(i as f32 / 10.0);
            assert!(v >= last);
            last = v;
        }
        assert!((last - 1.0).abs() < f32::EPSILON);
    }
}
