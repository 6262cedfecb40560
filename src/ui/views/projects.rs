use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::projects;
use crate::ui::gallery::GalleryState;
use crate::ui::theme::Palette;

const CARD_HEIGHT: u16 = 6;
const CARD_COLUMNS: usize = 2;

/// Project gallery: filter bar on top, staggered cards below.
///
/// The displayed list is fully replaced whenever the filter changes; cards
/// appear one by one according to the gallery's stagger clock.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    gallery: &GalleryState,
    now_ms: u64,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_filter_bar(frame, rows[0], palette, gallery);
    render_cards(frame, rows[1], palette, gallery, now_ms);
}

fn render_filter_bar(frame: &mut Frame<'_>, area: Rect, palette: &Palette, gallery: &GalleryState) {
    let mut spans = vec![Span::styled(
        " Filter: ",
        Style::default().fg(palette.muted),
    )];
    for category in projects::categories() {
        let style = if category == gallery.selected {
            Style::default()
                .fg(palette.accent)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        spans.push(Span::styled(format!(" {category} "), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        "  ←/→ to switch",
        Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    gallery: &GalleryState,
    now_ms: u64,
) {
    let visible = gallery.visible_projects();
    let revealed = gallery.revealed_cards(visible.len(), now_ms);
    if area.width < 10 || area.height < CARD_HEIGHT {
        return;
    }

    let card_width = area.width / CARD_COLUMNS as u16;
    for (idx, project) in visible.iter().take(revealed).enumerate() {
        let col = (idx % CARD_COLUMNS) as u16;
        let row = (idx / CARD_COLUMNS) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect {
            x: area.x + col * card_width,
            y,
            width: card_width,
            height: CARD_HEIGHT,
        };

        // The newest card is still fading in: render it dim for its first
        // stagger step.
        let entering = idx + 1 == revealed
            && now_ms.saturating_sub(gallery.applied_at_ms)
                < (idx as u64 + 1) * crate::ui::gallery::STAGGER_STEP_MS;

        render_card(frame, card_area, palette, project, entering);
    }
}

fn render_card(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    project: &projects::Project,
    entering: bool,
) {
    let mut title_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let mut text_style = Style::default().fg(palette.fg);
    if entering {
        title_style = title_style.add_modifier(Modifier::DIM);
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", project.category),
                Style::default().fg(palette.ok),
            ),
            Span::styled(project.title, title_style),
        ]),
        Line::from(Span::styled(project.description, text_style)),
        Line::from(Span::styled(
            project.link,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            format!("img: {}", short_image_ref(project.image)),
            Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
        )),
    ];

    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, area);
}

fn short_image_ref(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
