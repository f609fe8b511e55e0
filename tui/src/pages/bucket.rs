//! The bucket-list page: a vintage list card with staggered item reveal.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use keepsake_engine::{App, PageState};
use keepsake_types::resolve;

use crate::centered;
use crate::particles;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut lines: Vec<Line> = Vec::new();
    {
        let PageState::Bucket(state) = app.page() else {
            return;
        };
        particles::draw_snow(frame.buffer_mut(), area, state.snow(), glyphs);

        let content = app.content();
        let heading = resolve(
            &[content.activity.bucket_heading.as_deref()],
            "Goals for the year",
        );
        let prompt = resolve(&[content.activity.ready_prompt.as_deref()], "Ready?");
        let button = resolve(&[content.activity.continue_button.as_deref()], "CONTINUE");

        lines.push(Line::styled(heading.to_string(), styles::heading(palette)));
        lines.push(Line::styled(
            "Bucket List".to_string(),
            styles::subheading(palette),
        ));
        lines.push(Line::from(""));
        for item in content
            .activity
            .bucket_list
            .iter()
            .take(state.revealed())
        {
            lines.push(Line::styled(
                format!("{} {item}", glyphs.checkbox),
                Style::default().fg(palette.ink_soft),
            ));
        }
        // Hold blank rows for items still waiting on their reveal beat, so
        // the card doesn't grow as they appear.
        for _ in state.revealed()..content.activity.bucket_list.len() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            prompt.to_string(),
            Style::default()
                .fg(palette.ink_soft)
                .add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {button} [enter]  "),
            styles::button(palette, true),
        ));
    }

    let height = lines.len() as u16 + 2;
    app.view_mut().scroll_max = height.saturating_sub(area.height);
    let offset = app.view().scroll.offset();

    let card = centered(area, 46.min(area.width), height.min(area.height));
    frame.render_widget(
        Paragraph::new(lines)
            .scroll((offset, 0))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(palette.white))
                    .style(Style::default().bg(palette.paper_card)),
            ),
        card,
    );
}
