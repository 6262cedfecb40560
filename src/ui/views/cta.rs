use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::profile;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Palette;

/// Call-to-action view.
pub fn render(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let inner = centered_rect(70, 60, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile::CTA_HEADING,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            profile::CTA_BODY,
            Style::default().fg(palette.fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+B and pick Contact to get in touch.",
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, inner);
}
