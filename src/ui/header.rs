use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::sections::{self, SectionId};
use crate::ui::theme::Palette;

/// Top navigation bar: one label per section, active one highlighted.
pub struct Header<'a> {
    active: SectionId,
    palette: &'a Palette,
    menu_open: bool,
}

impl<'a> Header<'a> {
    pub fn new(active: SectionId, palette: &'a Palette, menu_open: bool) -> Self {
        Self {
            active,
            palette,
            menu_open,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.palette.fg);
        let separator_style = Style::default().fg(self.palette.muted);
        let active_style = Style::default()
            .fg(self.palette.accent)
            .bg(self.palette.highlight_bg)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled("  ", text_style)];
        let menu_glyph = if self.menu_open { "▼" } else { "≡" };
        spans.push(Span::styled(
            menu_glyph.to_string(),
            Style::default().fg(self.palette.accent),
        ));
        spans.push(Span::styled("  ", text_style));

        for (idx, section) in sections::registry().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if section.id == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(section.label, style));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.palette.bg))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}
