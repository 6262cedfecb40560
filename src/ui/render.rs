use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::content::sections::{self, SectionId, Variant};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::nav::{SectionPhase, TRANSITION_MS};
use crate::ui::views;

const FOOTER_HINTS: &str =
    " Tab: Next │ 1-7: Jump │ Ctrl+B: Menu │ Ctrl+T: Theme │ Ctrl+Q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        area,
    );

    let (header, body, footer) = layout_regions(area);

    let active = app.nav().active_section();
    let header_widget = Header::new(active, palette, app.nav().menu_open);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        body,
    );
    let (view_area, dim) = transition_frame(app, active, body);
    render_section(frame, view_area, app, active, dim);

    let footer_widget = Footer::new(palette, FOOTER_HINTS);
    frame.render_widget(footer_widget.widget(footer.width), footer);

    if app.nav().menu_open {
        render_menu(frame, body, app);
    }
}

fn render_section(frame: &mut Frame<'_>, area: Rect, app: &App, active: SectionId, dim: bool) {
    let palette = app.palette();
    let now_ms = app.now_ms();

    match active {
        SectionId::Home => views::hero::render(frame, area, palette, app.backdrop(), now_ms),
        SectionId::Experience => views::experience::render(frame, area, palette),
        SectionId::Skills => views::skills::render(frame, area, palette),
        SectionId::Projects => views::projects::render(frame, area, palette, app.gallery(), now_ms),
        SectionId::Articles => views::articles::render(frame, area, palette),
        SectionId::Cta => views::cta::render(frame, area, palette),
        SectionId::Contact => views::contact::render(frame, area, palette, app.contact()),
    }

    if dim {
        dim_area(frame, area);
    }
}

/// Maps the active section's transition phase onto a view rect and a dim
/// flag: the terminal approximation of the enter animation. A settled
/// section gets the full body, undimmed.
fn transition_frame(app: &App, active: SectionId, body: Rect) -> (Rect, bool) {
    let SectionPhase::Entering { variant, until_ms } = app.nav().phase(active) else {
        return (body, false);
    };

    let remaining = until_ms.saturating_sub(app.now_ms());
    let progress = 1.0 - remaining as f32 / TRANSITION_MS as f32;
    let progress = progress.clamp(0.0, 1.0);

    match variant {
        Variant::Fade => (body, progress < 0.6),
        Variant::Slide => {
            let dx = ((1.0 - progress) * body.width as f32) as u16;
            (
                Rect {
                    x: body.x + dx,
                    y: body.y,
                    width: body.width.saturating_sub(dx),
                    height: body.height,
                },
                false,
            )
        }
        Variant::SlideUp => {
            let dy = ((1.0 - progress) * body.height as f32) as u16;
            (
                Rect {
                    x: body.x,
                    y: body.y + dy,
                    width: body.width,
                    height: body.height.saturating_sub(dy),
                },
                false,
            )
        }
        Variant::Zoom | Variant::Pop => {
            // Pop overshoots less; it starts larger.
            let floor = if variant == Variant::Pop { 0.5 } else { 0.2 };
            let scale = floor + (1.0 - floor) * progress;
            let width = ((body.width as f32) * scale).max(1.0) as u16;
            let height = ((body.height as f32) * scale).max(1.0) as u16;
            (centered_rect_by_size(body, width, height), false)
        }
        Variant::Rotate => {
            // No rotation in a cell grid; approximate with a centered
            // horizontal wipe plus dimming for the first half.
            let width = ((body.width as f32) * progress).max(1.0) as u16;
            (
                centered_rect_by_size(body, width, body.height),
                progress < 0.5,
            )
        }
    }
}

fn dim_area(frame: &mut Frame<'_>, area: Rect) {
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(Style::default().add_modifier(Modifier::DIM));
            }
        }
    }
}

fn render_menu(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let palette = app.palette();
    let nav = app.nav();

    let mut lines = Vec::new();
    for (idx, section) in sections::registry().iter().enumerate() {
        let marker = if section.id == nav.active_section() {
            "● "
        } else {
            "  "
        };
        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.ok)),
            Span::styled(
                format!("{:>2}. {}", idx + 1, section.label),
                Style::default().fg(palette.fg),
            ),
        ]);
        if idx == nav.menu_selected {
            line = line.style(Style::default().bg(palette.highlight_bg));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down: Move  Enter: Go  Esc: Close",
        Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_area = centered_rect_by_size(
        body,
        content_width.saturating_add(4).max(28),
        lines.len() as u16 + 2,
    );

    frame.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg))
        .block(
            Block::default()
                .title(Span::styled(" Navigate ", Style::default().fg(palette.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(popup, popup_area);
}
