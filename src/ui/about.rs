use crate::app::state::AppState;
use crate::ui::layout::section_frame;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const STAT_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let profile = &state.config.profile;
    let (title_area, body) = section_frame(area);
    frame.render_widget(
        Paragraph::new(Span::styled("About Me", theme.heading())),
        title_area,
    );

    let stats_h = if profile.stats.is_empty() { 0 } else { STAT_HEIGHT };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(stats_h)])
        .split(body);

    let mut lines: Vec<Line> = Vec::new();
    for (i, para) in profile.about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(para.as_str(), theme.secondary())));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[0],
    );

    if profile.stats.is_empty() {
        return;
    }
    let n = profile.stats.len() as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(chunks[1]);

    for (stat, card) in profile.stats.iter().zip(cards.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type())
            .border_style(theme.border())
            .style(theme.panel_bg());
        let text = vec![
            Line::from(Span::styled(
                stat.value.as_str(),
                Style::default()
                    .fg(theme.accent_violet)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label.as_str(), theme.muted())),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            *card,
        );
    }
}
