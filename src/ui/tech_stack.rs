use crate::app::state::*;
use crate::ui::layout::section_frame;
use crate::ui::theme::{parse_hex, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const CELL_WIDTH: u16 = 18;
const CELL_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let techs = &state.config.profile.technologies;
    let (title_area, body) = section_frame(area);
    frame.render_widget(
        Paragraph::new(Span::styled("Tech Stack", theme.heading())),
        title_area,
    );
    if techs.is_empty() || body.width == 0 {
        return;
    }

    let cols = (body.width / CELL_WIDTH).max(1);
    let focused = state.focus == FocusPanel::Content;

    for (i, tech) in techs.iter().enumerate() {
        let (row, col) = (i as u16 / cols, i as u16 % cols);
        let y = body.y + row * CELL_HEIGHT;
        // Keep the last two rows for the detail line
        if y + CELL_HEIGHT > body.bottom().saturating_sub(2) {
            break;
        }
        let cell = Rect::new(
            body.x + col * CELL_WIDTH,
            y,
            CELL_WIDTH.min(body.width).saturating_sub(1),
            CELL_HEIGHT,
        );

        let accent = parse_hex(&tech.color).unwrap_or(theme.accent_teal);
        let selected = focused && state.content_cursor == i;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                theme.border_type_focused()
            } else {
                theme.border_type()
            })
            .border_style(if selected {
                Style::default().fg(accent)
            } else {
                theme.border()
            })
            .style(theme.panel_bg());
        let label = Line::from(vec![
            Span::styled("● ", Style::default().fg(accent)),
            Span::styled(tech.name.as_str(), theme.text()),
        ]);
        frame.render_widget(Paragraph::new(label).block(block), cell);
    }

    if let Some(tech) = techs.get(state.content_cursor) {
        let detail = Rect::new(body.x, body.bottom().saturating_sub(1), body.width, 1);
        let line = Line::from(vec![
            Span::styled(format!("{}: ", tech.name), theme.title()),
            Span::styled(tech.description.as_str(), theme.secondary()),
        ]);
        frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), detail);
    }
}
