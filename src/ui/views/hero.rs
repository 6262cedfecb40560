use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::profile;
use crate::ui::backdrop::Backdrop;
use crate::ui::theme::Palette;
use crate::ui::typing;

/// Hero/profile view: name, role, typed tagline, bio, over the particle
/// backdrop.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    backdrop: &Backdrop,
    now_ms: u64,
) {
    backdrop.render(area, frame.buffer_mut(), palette);

    if area.height < 6 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let name = Paragraph::new(Line::from(Span::styled(
        profile::NAME,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(name, rows[1]);

    let role = Paragraph::new(Line::from(Span::styled(
        profile::ROLE,
        Style::default().fg(palette.fg),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(role, rows[2]);

    // Typed-out tagline with a block cursor while typing is in progress.
    let typed = typing::revealed(profile::TAGLINE, now_ms);
    let mut tagline_spans = vec![Span::styled(
        typed.to_string(),
        Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
    )];
    if typed.len() < profile::TAGLINE.len() {
        tagline_spans.push(Span::styled("█", Style::default().fg(palette.accent)));
    }
    let tagline = Paragraph::new(Line::from(tagline_spans)).alignment(Alignment::Center);
    frame.render_widget(tagline, rows[4]);

    let bio_area = pad_horizontal(rows[5], area.width / 6);
    let bio = Paragraph::new(profile::BIO)
        .style(Style::default().fg(palette.fg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(bio, bio_area);
}

fn pad_horizontal(area: Rect, pad: u16) -> Rect {
    let pad = pad.min(area.width / 2);
    Rect {
        x: area.x + pad,
        y: area.y + 1,
        width: area.width.saturating_sub(pad * 2),
        height: area.height.saturating_sub(1),
    }
}
