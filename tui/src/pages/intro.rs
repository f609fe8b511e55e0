//! The intro overlay: night sky, rocket ascent, firework burst, text reveal.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use keepsake_engine::App;
use keepsake_types::resolve;

use crate::particles;
use crate::theme::{Glyphs, Palette, styles};
use crate::centered;

pub(crate) fn draw(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.sky).fg(palette.sky_text)),
        area,
    );

    let intro = app.intro();
    particles::draw_stars(frame.buffer_mut(), area, intro.stars(), glyphs);

    if let Some(progress) = intro.rocket_progress() {
        draw_rocket(frame, area, progress, palette);
    }

    if let Some(progress) = intro.flash_progress() {
        draw_flash(frame, area, progress, palette, glyphs);
    }

    if let Some(burst) = intro.burst() {
        let sky_center = Rect {
            height: (area.height / 2).max(1),
            ..area
        };
        particles::draw_burst(frame.buffer_mut(), sky_center, burst, palette, glyphs);
    }

    draw_text_reveal(frame, app, area, palette, glyphs);
}

/// The rocket climbs the center column from the bottom to mid-sky.
fn draw_rocket(frame: &mut Frame, area: Rect, progress: f32, palette: &Palette) {
    if area.height < 4 {
        return;
    }
    let x = area.x + area.width / 2;
    let climb = f32::from(area.height) * 0.55 * progress;
    let y = area
        .y
        .saturating_add(area.height.saturating_sub(1))
        .saturating_sub(climb as u16);

    let buf = frame.buffer_mut();
    let head = &mut buf[(x, y)];
    head.set_char('^');
    head.set_fg(palette.white);
    head.set_style(Style::default().add_modifier(Modifier::BOLD));
    for tail in 1..=2u16 {
        let ty = y.saturating_add(tail);
        if ty < area.y + area.height {
            let cell = &mut buf[(x, ty)];
            cell.set_char('|');
            cell.set_fg(palette.gold_bright);
        }
    }
}

/// A short white bloom where the rocket dies and the burst is born.
fn draw_flash(frame: &mut Frame, area: Rect, progress: f32, palette: &Palette, glyphs: &Glyphs) {
    let cx = area.x + area.width / 2;
    let cy = area.y + area.height / 4;
    let radius = (progress * 4.0) as i32 + 1;
    let buf = frame.buffer_mut();
    for (dx, dy) in [(0, 0), (radius, 0), (-radius, 0), (0, radius / 2), (0, -radius / 2)] {
        let x = i32::from(cx) + dx;
        let y = i32::from(cy) + dy;
        if x >= i32::from(area.x)
            && x < i32::from(area.x + area.width)
            && y >= i32::from(area.y)
            && y < i32::from(area.y + area.height)
        {
            let cell = &mut buf[(x as u16, y as u16)];
            cell.set_char(glyphs.spark);
            cell.set_fg(palette.white);
        }
    }
}

fn draw_text_reveal(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let intro = app.intro();
    let content = app.content();
    let mut lines: Vec<Line> = Vec::new();

    if let Some(progress) = intro.title_progress() {
        let label = resolve(&[content.animated.ny_label.as_deref()], "HAPPY NEW YEAR!");
        let year = resolve(&[content.animated.ny_main_year.as_deref()], "2026");
        let spaced: String = year.chars().flat_map(|c| [c, ' ']).collect();
        lines.push(Line::styled(
            spread(label),
            styles::faded(palette.sky_muted, progress),
        ));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            spaced,
            styles::faded(palette.gold_bright, progress).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("────── ", Style::default().fg(palette.gold)),
            Span::styled(glyphs.diamond.to_string(), Style::default().fg(palette.gold)),
            Span::styled(" ──────", Style::default().fg(palette.gold)),
        ]));
    }

    if let Some(progress) = intro.subtitle_progress() {
        let subtitle = resolve(
            &[content.animated.ny_subtitle.as_deref()],
            "See what i made for you",
        );
        lines.push(Line::from(""));
        lines.push(Line::styled(
            subtitle.to_string(),
            styles::faded(palette.sky_text, progress).add_modifier(Modifier::ITALIC),
        ));
    }

    if let Some(progress) = intro.status_progress() {
        let status = resolve(
            &[content.animated.ny_bottom_status.as_deref()],
            "Starting the Journey",
        );
        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("{} {}", glyphs.bullet_active, spread(status)),
            styles::faded(palette.gold, progress).add_modifier(Modifier::DIM),
        ));
    }

    if lines.is_empty() {
        return;
    }
    let height = lines.len() as u16;
    let target = centered(area, area.width.saturating_sub(4), height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        target,
    );
}

/// Letter-space a label the way the overlay styles its uppercase captions.
fn spread(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
