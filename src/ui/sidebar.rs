use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if area.width == 0 {
        return;
    }
    let focused = state.focus == FocusPanel::Sidebar;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        })
        .style(theme.panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let labels = state.sidebar.shows_labels();
    let mut lines: Vec<Line> = Vec::with_capacity(SidebarState::ITEM_COUNT + 2);

    // Monogram, then a spacer, so items start at FIRST_ROW
    let monogram: String = state
        .config
        .profile
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    let title = if labels {
        format!(" {} {}", monogram, state.config.profile.name)
    } else {
        format!(" {}", monogram)
    };
    lines.push(Line::from(Span::styled(title, theme.heading())));
    lines.push(Line::from(""));

    for section in Section::ALL {
        let row = section.index();
        let active = state.section == section;
        let mut style = if active {
            Style::default()
                .fg(theme.accent_violet)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.secondary()
        };
        if focused && state.sidebar.cursor == row {
            style = theme.selected();
        }
        let marker = if active { "▎" } else { " " };
        let text = if labels {
            format!("{}{} {}", marker, section.icon(), section.label())
        } else {
            format!("{}{}", marker, section.icon())
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let dark = state.theme().is_dark();
    let (icon, label) = if dark {
        ("☀", "Light mode")
    } else {
        ("☾", "Dark mode")
    };
    let mut style = Style::default().fg(theme.accent_amber);
    if focused && state.sidebar.cursor == SidebarState::THEME_ROW {
        style = theme.selected();
    }
    let text = if labels {
        format!(" {} {}", icon, label)
    } else {
        format!(" {}", icon)
    };
    lines.push(Line::from(Span::styled(text, style)));

    frame.render_widget(Paragraph::new(lines), inner);
}
