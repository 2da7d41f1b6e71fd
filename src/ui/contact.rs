use crate::app::state::*;
use crate::ui::layout::section_frame;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (title_area, body) = section_frame(area);
    frame.render_widget(
        Paragraph::new(Span::styled("Get In Touch", theme.heading())),
        title_area,
    );

    let direction = if body.width >= 70 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let socials_len = state.config.profile.socials.len() as u16;
    let first = match direction {
        Direction::Horizontal => Constraint::Percentage(40),
        Direction::Vertical => Constraint::Length(socials_len + 1),
    };
    let chunks = Layout::default()
        .direction(direction)
        .spacing(2)
        .constraints([first, Constraint::Min(0)])
        .split(body);

    render_socials(frame, chunks[0], state, theme);
    render_form(frame, chunks[1], state, theme);
}

fn render_socials(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::Content;
    let lines: Vec<Line> = state
        .config
        .profile
        .socials
        .iter()
        .enumerate()
        .map(|(i, social)| {
            let selected = focused && state.content_cursor == i;
            let label_style = if selected {
                theme.selected()
            } else {
                theme.link()
            };
            Line::from(vec![
                Span::styled(format!("{:<10}", social.name), theme.title()),
                Span::styled(social.label(), label_style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.contact;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Send
            Constraint::Length(1), // Status
        ])
        .split(area);

    let editing = state.editing_field();
    for (field, rect) in FormField::ALL.iter().zip(rows.iter()) {
        let input = form.field(*field);
        let active = editing == Some(*field);
        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .title_style(if active { theme.title() } else { theme.muted() })
            .borders(Borders::ALL)
            .border_type(if active {
                theme.border_type_focused()
            } else {
                theme.border_type()
            })
            .border_style(if active {
                theme.border_focused()
            } else {
                theme.border()
            })
            .padding(Padding::horizontal(1))
            .style(theme.panel_bg());
        let inner = block.inner(*rect);
        let paragraph = Paragraph::new(input.text.as_str())
            .style(theme.text())
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, *rect);

        if active && inner.width > 0 && inner.height > 0 {
            let offset = input.text[..input.cursor].width() as u16;
            let row = (offset / inner.width).min(inner.height - 1);
            let col = offset % inner.width;
            frame.set_cursor_position((inner.x + col, inner.y + row));
        }
    }

    let send_index = state.config.profile.socials.len() + FormField::ALL.len();
    let send_selected = state.focus == FocusPanel::Content && state.content_cursor == send_index;
    let (label, style) = if form.submitting {
        ("[ Sending… ]", theme.muted())
    } else if send_selected {
        ("[ Send ✉ ]", theme.selected())
    } else {
        ("[ Send ✉ ]", theme.link().add_modifier(Modifier::BOLD))
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(label, style),
            Span::styled("   Ctrl+Enter sends from any field", theme.muted()),
        ])),
        rows[3],
    );

    let status = match &form.status {
        Some(SubmitStatus::Sent) => Some(Span::styled(
            "✔ Message sent. Thanks for reaching out!",
            theme.success(),
        )),
        Some(SubmitStatus::Failed(err)) => {
            Some(Span::styled(format!("✘ Could not send: {}", err), theme.error()))
        }
        Some(SubmitStatus::Invalid(err)) => Some(Span::styled(format!("✘ {}", err), theme.error())),
        None => None,
    };
    if let Some(span) = status {
        frame.render_widget(Paragraph::new(Line::from(span)), rows[4]);
    }
}
