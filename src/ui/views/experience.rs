use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::profile;
use crate::ui::theme::Palette;

/// Experience timeline, newest entry first.
pub fn render(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let mut lines = vec![Line::from("")];
    for (idx, entry) in profile::EXPERIENCE.iter().enumerate() {
        let connector = if idx == 0 { "┌" } else { "├" };
        lines.push(Line::from(vec![
            Span::styled(format!(" {connector}─ "), Style::default().fg(palette.muted)),
            Span::styled(
                entry.role,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.company),
                Style::default().fg(palette.fg),
            ),
            Span::styled(
                format!("  ({})", entry.period),
                Style::default().fg(palette.muted),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" │    ", Style::default().fg(palette.muted)),
            Span::styled(entry.summary, Style::default().fg(palette.fg)),
        ]));
        lines.push(Line::from(Span::styled(
            " │",
            Style::default().fg(palette.muted),
        )));
    }
    lines.pop();

    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    " Experience ",
                    Style::default().fg(palette.accent),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, area);
}
