//! The final-letter page: locked, igniting, letter, sealed.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use keepsake_engine::{App, LetterStage, PageState};
use keepsake_types::resolve;

use crate::centered;
use crate::theme::{Glyphs, Palette, styles};

const PROGRESS_CELLS: usize = 32;

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let stage = {
        let PageState::Letter(flow) = app.page() else {
            return;
        };
        flow.stage()
    };
    match stage {
        LetterStage::Locked => draw_locked(frame, app, area, palette, glyphs),
        LetterStage::Igniting => draw_igniting(frame, app, area, palette, glyphs),
        LetterStage::Letter => draw_letter(frame, app, area, palette, glyphs),
        LetterStage::Sealed => draw_sealed(frame, app, area, palette, glyphs),
    }
}

fn draw_locked(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let content = app.content();
    let title = resolve(&[content.final_letter.title.as_deref()], "One Last Note");
    let lines = vec![
        Line::styled(
            format!("  .  {}  .  ", glyphs.envelope),
            styles::gold_text(palette),
        ),
        Line::from(""),
        Line::styled(title.to_string(), styles::heading(palette)),
        Line::styled(
            "A new chapter is waiting to be written...".to_string(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
        Line::styled(
            "  IGNITE THE SPARK [enter]  ".to_string(),
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let target = centered(area, 44.min(area.width), lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

fn draw_igniting(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (progress, loading_text) = {
        let PageState::Letter(flow) = app.page() else {
            return;
        };
        (flow.progress(), app.content().loading_text().to_string())
    };

    let filled = (usize::from(progress) * PROGRESS_CELLS) / 100;
    let bar: String = (0..PROGRESS_CELLS)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();

    let lines = vec![
        Line::styled(glyphs.spark.to_string(), styles::gold_text(palette)),
        Line::from(""),
        Line::styled(
            loading_text,
            Style::default()
                .fg(palette.ink)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
        Line::styled(bar, styles::gold_text(palette)),
        Line::styled(
            format!("{progress}%"),
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let target = centered(area, 40.min(area.width), lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

fn draw_letter(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, _glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    {
        let content = app.content();
        let greeting = resolve(&[content.final_letter.letter_greeting.as_deref()], "Hey,");
        let title = resolve(&[content.final_letter.title.as_deref()], "One Last Note");
        let seal = resolve(&[content.final_letter.seal_button.as_deref()], "Seal It");

        lines.push(Line::styled(
            greeting.to_string(),
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::styled(title.to_string(), styles::heading(palette)));
        lines.push(Line::from(""));
        for paragraph in &content.final_letter.letter_paragraphs {
            lines.push(Line::styled(
                paragraph.clone(),
                Style::default().fg(palette.ink_soft),
            ));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("  {seal} [enter]  "),
            styles::button(palette, true),
        )));
    }

    let height = lines.len() as u16 + 2;
    app.view_mut().scroll_max = height.saturating_sub(area.height);
    let offset = app.view().scroll.offset();

    let card = centered(area, 56.min(area.width), height.min(area.height));
    frame.render_widget(
        Paragraph::new(lines)
            .scroll((offset, 0))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.white))
                    .style(Style::default().bg(palette.white).fg(palette.ink)),
            ),
        card,
    );
}

fn draw_sealed(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (typed, done) = {
        let PageState::Letter(flow) = app.page() else {
            return;
        };
        (flow.typed().to_string(), flow.typing_done())
    };
    let content = app.content();
    let sealed_title = resolve(&[content.final_letter.sealed_title.as_deref()], "Sealed");
    let restart = resolve(&[content.final_letter.restart_button.as_deref()], "Restart");

    let mut message = vec![Span::styled(typed, styles::gold_text(palette))];
    if !done {
        // Typing cursor, gone once the reveal completes.
        message.push(Span::styled(
            "▍".to_string(),
            Style::default().fg(palette.gold_bright),
        ));
    }

    let lines = vec![
        Line::styled(
            format!("{} {sealed_title} {}", glyphs.envelope, glyphs.envelope),
            styles::heading(palette),
        ),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::styled(
            format!("  {} [enter]  ", restart.to_uppercase()),
            Style::default()
                .fg(palette.ink)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let target = centered(area, 52.min(area.width), lines.len() as u16 + 2);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(palette.gold))
                    .style(Style::default().bg(palette.white)),
            ),
        target,
    );
}
