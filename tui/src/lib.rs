//! TUI rendering for Keepsake using ratatui.

mod effects;
mod input;
mod pages;
mod particles;
mod theme;

pub use effects::apply_page_effect;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use keepsake_engine::{App, PageId, Stage};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    match app.stage() {
        Stage::Intro => pages::intro::draw(frame, app, &palette, &glyphs),
        Stage::Main => draw_main(frame, app, &palette, &glyphs),
    }
}

fn draw_main(frame: &mut Frame, app: &mut App, palette: &Palette, glyphs: &Glyphs) {
    let bg = Block::default().style(Style::default().bg(palette.paper).fg(palette.ink));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Ambient sparkle overlay, underneath the page content.
    particles::draw_snow(frame.buffer_mut(), chunks[0], app.overlay_snow(), glyphs);

    let mut page_area = chunks[0];
    if let Some(transition) = app.view().transition.as_ref() {
        page_area = apply_page_effect(
            transition,
            page_area,
            frame.area(),
            app.ui_options().reduced_motion,
        )
        .intersection(frame.area());
    }

    // Draw the mounted page; during an exit phase that is still the
    // departing page, even though the sequencer already points ahead.
    match app.page().id() {
        PageId::Landing => pages::landing::draw(frame, app, page_area, palette, glyphs),
        PageId::BucketList => pages::bucket::draw(frame, app, page_area, palette, glyphs),
        PageId::Cassette => pages::cassette::draw(frame, app, page_area, palette, glyphs),
        PageId::Cards => pages::cards::draw(frame, app, page_area, palette, glyphs),
        PageId::Letter => pages::letter::draw(frame, app, page_area, palette, glyphs),
    }

    draw_status_bar(frame, app, chunks[1], palette, glyphs);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let current = app.page().id().index();
    let mut spans: Vec<Span> = Vec::new();
    for page in PageId::ALL {
        let glyph = if page.index() == current {
            glyphs.bullet_active
        } else {
            glyphs.bullet_inactive
        };
        spans.push(Span::styled(
            format!("{glyph} "),
            if page.index() == current {
                Style::default().fg(palette.red)
            } else {
                Style::default().fg(palette.muted)
            },
        ));
    }
    spans.push(Span::styled(
        format!("  {}", pages::key_hints(app)),
        styles::hint(palette),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_the_area() {
        let area = Rect::new(2, 3, 20, 10);
        let inner = centered(area, 10, 4);
        assert_eq!(inner, Rect::new(7, 6, 10, 4));
        let clamped = centered(area, 100, 100);
        assert_eq!(clamped, Rect::new(2, 3, 20, 10));
    }
}
