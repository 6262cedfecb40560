use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::profile;
use crate::ui::theme::Palette;

pub fn render(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let mut lines = vec![Line::from("")];
    for article in &profile::ARTICLES {
        lines.push(Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(palette.accent)),
            Span::styled(
                article.title,
                Style::default()
                    .fg(palette.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {}", article.date),
                Style::default().fg(palette.muted),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(article.blurb, Style::default().fg(palette.muted)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    " Articles ",
                    Style::default().fg(palette.accent),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, area);
}
