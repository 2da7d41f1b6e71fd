use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Drifts through the accent colors along the name, one step per tick.
fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 5] = [
        (167.0, 139.0, 250.0), // violet
        (100.0, 170.0, 230.0), // blue
        (80.0, 200.0, 210.0),  // teal
        (220.0, 150.0, 180.0), // pink
        (230.0, 180.0, 80.0),  // amber
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.15 - tick as f64 * 0.05).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let profile = &state.config.profile;
    let tick = state.tick_count;

    // Letter-spaced logo line
    let logo: String = profile
        .name
        .chars()
        .flat_map(|c| [c, ' '])
        .collect::<String>()
        .trim_end()
        .to_string();
    let logo_spans: Vec<Span> = logo
        .chars()
        .enumerate()
        .map(|(c, ch)| {
            if ch == ' ' {
                Span::raw(" ")
            } else {
                Span::styled(
                    ch.to_string(),
                    Style::default()
                        .fg(wave_color(c as u16, tick))
                        .add_modifier(Modifier::BOLD),
                )
            }
        })
        .collect();

    let links = home_links(profile);
    let focused = state.focus == FocusPanel::Content;
    let mut link_spans: Vec<Span> = Vec::new();
    for (i, (label, _)) in links.iter().enumerate() {
        if i > 0 {
            link_spans.push(Span::raw("   "));
        }
        let style = if focused && state.content_cursor == i {
            theme.selected()
        } else {
            theme.link().add_modifier(Modifier::BOLD)
        };
        link_spans.push(Span::styled(format!("[ {} ↗ ]", label), style));
    }
    let logo_line = Line::from(logo_spans);
    let links_line = Line::from(link_spans);

    let widest_phrase = state
        .config
        .hero
        .phrases
        .iter()
        .map(|p| p.width())
        .max()
        .unwrap_or(0) as u16
        + 1;
    let block_w = [logo_line.width() as u16, links_line.width() as u16, widest_phrase]
        .into_iter()
        .max()
        .unwrap_or(0)
        .min(area.width);

    // The heading is left-aligned at a fixed offset so it does not shift
    // sideways while it types.
    let pad = block_w.saturating_sub(widest_phrase) / 2;
    let caret = if state.hero.caret.visible() { "▌" } else { " " };
    let heading = Line::from(vec![
        Span::raw(" ".repeat(usize::from(pad))),
        Span::styled(state.hero.text.clone(), theme.heading()),
        Span::styled(caret, Style::default().fg(theme.accent_teal)),
    ])
    .left_aligned();

    let lines = vec![
        logo_line,
        Line::from(""),
        heading,
        Line::from(""),
        links_line,
        Line::from(""),
        Line::from(Span::styled("↓ scroll", theme.muted())),
    ];

    let total_h = lines.len() as u16;
    let x = area.x + area.width.saturating_sub(block_w) / 2;
    let y = area.y + area.height.saturating_sub(total_h) / 3;
    let block_area = Rect::new(x, y, block_w, total_h.min(area.height));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, block_area);
}
