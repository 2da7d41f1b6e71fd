use crate::config::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Colors for one theme mode. Widgets take styles from here rather than
/// hard-coding colors so the `t` toggle restyles everything at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub bg_elevated: Color,
    pub border_dim: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent_violet: Color,
    pub accent_teal: Color,
    pub accent_amber: Color,
    pub accent_rose: Color,
    pub accent_green: Color,
    pub particle: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(13, 13, 20),
            bg_elevated: Color::Rgb(24, 24, 36),
            border_dim: Color::Rgb(55, 55, 75),
            text_primary: Color::Rgb(230, 230, 240),
            text_secondary: Color::Rgb(165, 165, 185),
            text_muted: Color::Rgb(105, 105, 125),
            accent_violet: Color::Rgb(167, 139, 250),
            accent_teal: Color::Rgb(80, 200, 210),
            accent_amber: Color::Rgb(230, 180, 80),
            accent_rose: Color::Rgb(240, 95, 110),
            accent_green: Color::Rgb(90, 210, 130),
            particle: Color::Rgb(210, 210, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 248, 252),
            bg_elevated: Color::Rgb(234, 234, 242),
            border_dim: Color::Rgb(200, 200, 215),
            text_primary: Color::Rgb(24, 24, 36),
            text_secondary: Color::Rgb(70, 70, 92),
            text_muted: Color::Rgb(135, 135, 155),
            accent_violet: Color::Rgb(109, 40, 217),
            accent_teal: Color::Rgb(13, 148, 136),
            accent_amber: Color::Rgb(180, 110, 10),
            accent_rose: Color::Rgb(220, 38, 38),
            accent_green: Color::Rgb(22, 150, 70),
            particle: Color::Rgb(80, 80, 140),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg)
    }

    pub fn panel_bg(&self) -> Style {
        Style::default().bg(self.bg_elevated)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border_dim)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent_teal)
    }

    pub fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused(&self) -> BorderType {
        BorderType::Thick
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent_violet)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn link(&self) -> Style {
        Style::default().fg(self.accent_teal)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent_teal)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.accent_rose)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.accent_green)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.bg_elevated)
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Mix `fg` over `bg` at `alpha` (0.0 to 1.0). Terminals have no alpha, so
/// translucency is faked by blending toward the background.
pub fn blend(bg: Color, fg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (bg, fg) {
        (Color::Rgb(br, bgr, bb), Color::Rgb(fr, fgr, fb)) => {
            let mix = |b: u8, f: u8| (f32::from(b) + (f32::from(f) - f32::from(b)) * alpha).round() as u8;
            Color::Rgb(mix(br, fr), mix(bgr, fgr), mix(bb, fb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#E11D48"), Some(Color::Rgb(0xE1, 0x1D, 0x48)));
        assert_eq!(parse_hex("0ea5e9"), Some(Color::Rgb(0x0E, 0xA5, 0xE9)));
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GG0000"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }

    #[test]
    fn test_blend() {
        let bg = Color::Rgb(0, 0, 0);
        let fg = Color::Rgb(200, 100, 50);
        assert_eq!(blend(bg, fg, 0.0), bg);
        assert_eq!(blend(bg, fg, 1.0), fg);
        assert_eq!(blend(bg, fg, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Reset, fg, 0.3), fg);
    }

    #[test]
    fn test_modes_differ() {
        assert_ne!(Theme::for_mode(ThemeMode::Dark), Theme::for_mode(ThemeMode::Light));
    }
}
