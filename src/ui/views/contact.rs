use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::contact::{ContactField, ContactFormState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::Palette;

/// Contact form: three fields, a submit control, and the post-send
/// confirmation overlay.
pub fn render(frame: &mut Frame<'_>, area: Rect, palette: &Palette, form: &ContactFormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    match form {
        ContactFormState::Editing {
            name,
            email,
            message,
            focus,
        } => {
            render_field(frame, rows[0], palette, "Name", name, *focus == ContactField::Name);
            render_field(frame, rows[1], palette, "Email", email, *focus == ContactField::Email);
            render_field(
                frame,
                rows[2],
                palette,
                "Message",
                message,
                *focus == ContactField::Message,
            );
            render_submit_line(frame, rows[3], palette, "Enter: Send Message   Tab: Next Field");
        }
        ContactFormState::Sending { .. } => {
            render_field(frame, rows[0], palette, "Name", "", false);
            render_field(frame, rows[1], palette, "Email", "", false);
            render_field(frame, rows[2], palette, "Message", "", false);
            render_submit_line(frame, rows[3], palette, "Sending...");
        }
        ContactFormState::Sent { name } => {
            let text = format!("Thank you, {name}! Message sent successfully.");
            let width = (text.chars().count() as u16 + 6).min(area.width);
            let popup_area = centered_rect_by_size(area, width, 5);
            frame.render_widget(Clear, popup_area);
            let popup = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(text, Style::default().fg(palette.ok))),
                Line::from(Span::styled(
                    "Press any key to continue",
                    Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
                )),
            ])
            .style(Style::default().bg(palette.bg))
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(" Contact ", Style::default().fg(palette.accent)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            );
            frame.render_widget(popup, popup_area);
        }
    }
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    label: &'static str,
    value: &str,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(palette.fg),
    )];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(palette.accent)));
    }

    let widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(format!(" {label} "), border))
                .borders(Borders::ALL)
                .border_style(border),
        );
    frame.render_widget(widget, area);
}

fn render_submit_line(frame: &mut Frame<'_>, area: Rect, palette: &Palette, text: &'static str) {
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(widget, area);
}
