//! The cassette page: a small tape deck per track, one playing at a time.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use keepsake_engine::{App, PageState};
use keepsake_types::resolve;
use unicode_width::UnicodeWidthStr;

use crate::centered;
use crate::theme::{Glyphs, Palette, styles};

const REEL_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const PROGRESS_CELLS: usize = 18;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let PageState::Cassette(state) = app.page() else {
        return;
    };
    let content = app.content();

    let heading = resolve(
        &[content.chill_zone.heading.as_deref()],
        "Songs for the road",
    );
    let subheading = resolve(&[content.chill_zone.subheading.as_deref()], "");
    let hint = resolve(&[content.chill_zone.choose_track_hint.as_deref()], "");

    let tracks = &content.chill_zone.tracks;
    let shell_height: u16 = 5;
    let header_height: u16 = 3;
    let total = header_height + shell_height * tracks.len() as u16 + 2;
    let column = centered(area, 54.min(area.width), total.min(area.height));

    let header = Rect {
        height: header_height.min(column.height),
        ..column
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(subheading.to_string(), styles::subheading(palette)),
            Line::styled(heading.to_string(), styles::heading(palette)),
            Line::styled(hint.to_string(), styles::hint(palette)),
        ])
        .alignment(Alignment::Center),
        header,
    );

    for (index, track) in tracks.iter().enumerate() {
        let y = column.y + header_height + shell_height * index as u16;
        if y + shell_height > area.y + area.height {
            break;
        }
        let shell = Rect {
            x: column.x,
            y,
            width: column.width,
            height: shell_height,
        };
        let label_width = usize::from(column.width.saturating_sub(6));
        let title = fit(resolve(&[track.title.as_deref()], "Untitled"), label_width / 2);
        let caption = fit(resolve(&[track.caption.as_deref()], ""), label_width / 2);
        draw_shell(
            frame,
            shell,
            app,
            state.reel_phase(),
            index,
            title,
            caption,
            palette,
            glyphs,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_shell(
    frame: &mut Frame,
    shell: Rect,
    app: &App,
    reel_phase: f32,
    index: usize,
    title: String,
    caption: String,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let deck = app.jukebox().deck();
    let active = deck.active() == Some(index);
    let playing = deck.is_track_playing(index);

    let border_style = if active {
        Style::default().fg(palette.red)
    } else {
        Style::default().fg(palette.ink)
    };

    let reel = if playing {
        REEL_FRAMES[(reel_phase * 8.0) as usize % REEL_FRAMES.len()]
    } else {
        glyphs.reel
    };

    let position = deck.position(index);
    let ratio = deck
        .duration(index)
        .filter(|d| !d.is_zero())
        .map_or(0.0, |d| {
            (position.as_secs_f32() / d.as_secs_f32()).clamp(0.0, 1.0)
        });
    let filled = if active {
        (ratio * PROGRESS_CELLS as f32) as usize
    } else {
        0
    };
    let bar: String = (0..PROGRESS_CELLS)
        .map(|i| if i < filled { '━' } else { '─' })
        .collect();

    let status = if playing {
        Span::styled(
            format!("{} PLAYING {}", glyphs.bullet_active, format_time(position)),
            Style::default()
                .fg(palette.led_green)
                .add_modifier(Modifier::BOLD),
        )
    } else if active {
        Span::styled(
            format!("paused {}", format_time(position)),
            styles::hint(palette),
        )
    } else {
        Span::styled(format!("[{}] play", index + 1), styles::hint(palette))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} {title}", glyphs.note),
                Style::default()
                    .fg(if active { palette.red } else { palette.ink })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {caption}"), styles::hint(palette)),
        ]),
        Line::from(vec![
            Span::styled(format!(" {reel} "), styles::gold_text(palette)),
            Span::styled(bar, Style::default().fg(if active { palette.red } else { palette.muted })),
            Span::styled(format!(" {reel} "), styles::gold_text(palette)),
        ]),
        Line::from(status),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .style(Style::default().bg(palette.paper_card)),
        ),
        shell,
    );
}

/// `m:ss`, with unknown clocks degrading to `0:00`.
fn format_time(value: Duration) -> String {
    let total = value.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

/// Truncate a label to a display width, appending an ellipsis when cut.
fn fit(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(Duration::ZERO), "0:00");
        assert_eq!(format_time(Duration::from_secs(61)), "1:01");
        assert_eq!(format_time(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("short", 10), "short");
        let cut = fit("a very long cassette title", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }
}
