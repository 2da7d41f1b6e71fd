use crate::app::state::*;
use crate::ui::layout::section_frame;
use crate::ui::theme::{parse_hex, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Below this width the cards stack in a single column.
const TWO_COLUMN_MIN: u16 = 70;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let projects = &state.config.profile.projects;
    let (title_area, body) = section_frame(area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Projects", theme.heading()),
            Span::styled("   ←/→ select · Enter GitHub · d demo", theme.muted()),
        ])),
        title_area,
    );
    if projects.is_empty() || body.height == 0 {
        return;
    }

    let cols: usize = if body.width >= TWO_COLUMN_MIN { 2 } else { 1 };
    let rows = projects.len().div_ceil(cols);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)))
        .split(body);
    let focused = state.focus == FocusPanel::Content;

    for (i, project) in projects.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints((0..cols).map(|_| Constraint::Ratio(1, cols as u32)))
            .split(row_areas[i / cols]);
        let card = col_areas[i % cols];

        let accent = parse_hex(&project.color).unwrap_or(theme.accent_violet);
        let selected = focused && state.content_cursor == i;
        let block = Block::default()
            .title(format!(" {} ", project.title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
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

        let tags: Vec<Span> = project
            .tags
            .iter()
            .flat_map(|t| {
                [
                    Span::styled(format!("#{}", t), Style::default().fg(accent)),
                    Span::raw(" "),
                ]
            })
            .collect();
        let mut links: Vec<Span> = Vec::new();
        if project.github.is_some() {
            links.push(Span::styled("GitHub ↗", theme.link()));
        }
        if project.demo.is_some() {
            if !links.is_empty() {
                links.push(Span::raw("  "));
            }
            links.push(Span::styled("Demo ↗", theme.link()));
        }

        let text = vec![
            Line::from(Span::styled(project.description.as_str(), theme.secondary())),
            Line::from(""),
            Line::from(tags),
            Line::from(links),
        ];
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
            card,
        );
    }
}
