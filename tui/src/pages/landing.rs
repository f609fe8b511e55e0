//! The landing page: an envelope opens and the greeting card rises out.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use keepsake_engine::{App, PageState};

use crate::centered;
use crate::particles;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let PageState::Landing(state) = app.page() else {
        return;
    };

    particles::draw_snow(frame.buffer_mut(), area, state.snow(), glyphs);

    let content = app.content();
    let card_height: u16 = 9;
    let envelope_height: u16 = 5;
    let stack = centered(area, 48.min(area.width), card_height + envelope_height + 2);

    // The card rises from behind the envelope as its slide beat plays.
    if let Some(progress) = state.card_progress() {
        let lift = (progress * f32::from(card_height)) as u16;
        let card_area = Rect {
            x: stack.x,
            y: stack
                .y
                .saturating_add(card_height.saturating_sub(lift)),
            width: stack.width,
            height: lift.max(1).min(card_height),
        }
        .intersection(area);
        let card = Paragraph::new(vec![
            Line::styled(
                content.landing_title().to_string(),
                Style::default()
                    .fg(palette.red)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                content.landing_subtitle().to_string(),
                Style::default().fg(palette.ink_soft),
            ),
            Line::from(""),
            Line::styled(
                content.landing_last_line().to_string(),
                Style::default().fg(palette.ink),
            ),
            Line::styled(
                content.landing_footer().to_string(),
                styles::hint(palette),
            ),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(palette.red))
                .style(Style::default().bg(palette.paper_card)),
        );
        frame.render_widget(card, card_area);
    }

    // The envelope sits below, its flap folding back over the first beat.
    let envelope_area = Rect {
        x: stack.x,
        y: stack.y.saturating_add(card_height + 1),
        width: stack.width,
        height: envelope_height,
    }
    .intersection(area);
    let flap = flap_line(state.flap_progress(), envelope_area.width, glyphs);
    let envelope = Paragraph::new(vec![
        Line::styled(flap, Style::default().fg(palette.red_deep)),
        Line::from(""),
        Line::styled(
            format!("{} Greetings", glyphs.envelope),
            Style::default()
                .fg(palette.white)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.red_deep))
            .style(Style::default().bg(palette.red)),
    );
    frame.render_widget(envelope, envelope_area);

    // Continue control, once its fade-in beat has fired.
    if state.button_visible() {
        let button_area = Rect {
            x: area.x,
            y: envelope_area.y.saturating_add(envelope_height + 1),
            width: area.width,
            height: 1,
        }
        .intersection(area);
        if !button_area.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "  CONTINUE [enter]  ",
                    styles::button(palette, true),
                ))
                .alignment(Alignment::Center),
                button_area,
            );
        }
    }
}

/// The flap collapses towards the edges as it opens.
fn flap_line(progress: f32, width: u16, glyphs: &Glyphs) -> String {
    let span = f32::from(width.saturating_sub(2)) / 2.0;
    let remaining = (span * (1.0 - progress)) as usize;
    if remaining == 0 {
        return String::new();
    }
    let mut line = String::new();
    for _ in 0..remaining {
        line.push('v');
    }
    line.push(glyphs.diamond);
    for _ in 0..remaining {
        line.push('v');
    }
    line
}
