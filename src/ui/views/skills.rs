use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::content::profile;
use crate::ui::theme::Palette;

/// Skills display: one bordered column per group.
pub fn render(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let constraints = vec![Constraint::Ratio(1, profile::SKILLS.len() as u32); profile::SKILLS.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (group, column) in profile::SKILLS.iter().zip(columns.iter()) {
        let mut lines = vec![Line::from("")];
        for skill in group.skills {
            lines.push(Line::from(vec![
                Span::styled(" ▸ ", Style::default().fg(palette.accent)),
                Span::styled(*skill, Style::default().fg(palette.fg)),
            ]));
        }

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(palette.bg))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", group.name),
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            );
        frame.render_widget(widget, *column);
    }
}
