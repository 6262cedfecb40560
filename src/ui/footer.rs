use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    palette: &'a Palette,
    hints: &'static str,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette, hints: &'static str) -> Self {
        Self { palette, hints }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count (the hints contain Unicode).
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(self.palette.fg)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(self.palette.bg))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}
