use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.section.icon()),
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent_violet)
            .add_modifier(Modifier::BOLD),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        theme.status_bar(),
    ));

    let hints = if state.editing_field().is_some() {
        "Tab next · Ctrl+Enter send · Esc leave"
    } else {
        "1-5 jump · ↑↓ scroll · t theme · ^B sidebar · q quit"
    };

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Sidebar => "NAV",
        FocusPanel::Content => "VIEW",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let tail = hints.width() + focus_name.len() + 5;
    let remaining = (area.width as usize).saturating_sub(used + tail);
    parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));
    if remaining > 0 {
        parts.push(Span::styled(format!("{} ", hints), theme.status_bar()));
    }
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(theme.accent_teal).bg(theme.bg_elevated),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line).style(theme.status_bar());
    frame.render_widget(paragraph, area);
}
