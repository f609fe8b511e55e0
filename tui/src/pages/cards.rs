//! The flip-cards page: paper notes that flip to polaroid backs.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use keepsake_engine::{App, PageState};
use keepsake_types::{CardContent, resolve};

use crate::centered;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let PageState::Cards(state) = app.page() else {
        return;
    };
    let content = app.content();

    let heading = resolve(&[content.cards.heading.as_deref()], "A few things to say");
    let subheading = resolve(&[content.cards.subheading.as_deref()], "");
    let instruction = resolve(&[content.cards.instruction.as_deref()], "Flip a card");

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(9),    // Cards
        ])
        .split(centered(area, area.width, area.height));

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(subheading.to_string(), styles::subheading(palette)),
            Line::styled(heading.to_string(), styles::heading(palette)),
            Line::styled(instruction.to_string(), styles::hint(palette)),
        ])
        .alignment(Alignment::Center),
        layout[0],
    );

    let cards = &content.cards.cards;
    if cards.is_empty() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, cards.len() as u32);
            cards.len()
        ])
        .split(layout[1]);

    for (index, card) in cards.iter().enumerate() {
        let slot = centered(columns[index], columns[index].width.saturating_sub(2), 9);
        draw_card(
            frame,
            slot,
            card,
            index,
            state.is_flipped(index),
            state.flip_progress(index),
            palette,
            glyphs,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    frame: &mut Frame,
    slot: Rect,
    card: &CardContent,
    index: usize,
    flipped: bool,
    flip_progress: f32,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    // Mid-flip the card shows its edge, neither face readable.
    let mid_flip = flip_progress < 0.5;

    let (lines, bg) = if mid_flip {
        (
            vec![
                Line::from(""),
                Line::from(""),
                Line::styled("░░░░░░░░".to_string(), Style::default().fg(palette.muted)),
            ],
            palette.paper_card,
        )
    } else if flipped {
        let title = resolve(&[card.back_title.as_deref()], "");
        let text = resolve(&[card.back_text.as_deref()], "");
        let mut lines = vec![
            Line::from(""),
            Line::styled(
                title.to_string(),
                Style::default()
                    .fg(palette.ink)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(text.to_string(), Style::default().fg(palette.ink_soft)),
        ];
        if let Some(emoji) = card.back_emoji.as_deref() {
            lines.push(Line::styled(
                emoji.to_string(),
                Style::default().fg(palette.red),
            ));
        }
        if let Some(stamp) = card.back_stamp.as_deref() {
            lines.push(Line::styled(
                format!("[ {stamp} ]"),
                Style::default()
                    .fg(palette.red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        (lines, palette.white)
    } else {
        let front = resolve(&[card.front.as_deref()], "");
        (
            vec![
                Line::from(""),
                Line::styled(front.to_string(), Style::default().fg(palette.ink)),
                Line::from(""),
                Line::styled(format!("{} flip [{}]", glyphs.diamond, index + 1), styles::hint(palette)),
            ],
            palette.paper_card,
        )
    };

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if flipped {
                        BorderType::Double
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(Style::default().fg(if flipped {
                        palette.red
                    } else {
                        palette.gold
                    }))
                    .style(Style::default().bg(bg)),
            ),
        slot,
    );
}
