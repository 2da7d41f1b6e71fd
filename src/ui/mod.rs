mod about;
mod contact;
mod home;
mod layout;
mod particles;
mod projects;
mod sidebar;
mod status_bar;
mod tech_stack;
pub mod theme;

use crate::app::state::{AppState, Section};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = Theme::for_mode(state.theme());
    frame.render_widget(Block::default().style(theme.base()), area);

    let app_layout = layout::compute_layout(area, state.sidebar.width_cols());

    particles::render(frame, app_layout.content, state, &theme);
    match state.section {
        Section::Home => home::render(frame, app_layout.content, state, &theme),
        Section::About => about::render(frame, app_layout.content, state, &theme),
        Section::TechStack => tech_stack::render(frame, app_layout.content, state, &theme),
        Section::Projects => projects::render(frame, app_layout.content, state, &theme),
        Section::Contact => contact::render(frame, app_layout.content, state, &theme),
    }
    sidebar::render(frame, app_layout.sidebar, state, &theme);
    status_bar::render(frame, app_layout.status_bar, state, &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::typewriter::{Frame as TypeFrame, Mode};
    use crate::app::state::FormField;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state(width: u16, height: u16) -> AppState {
        let mut s = AppState::new(AppConfig::default());
        s.resize(width, height);
        s.start();
        s
    }

    #[test]
    fn test_home_shows_typed_heading() {
        let mut s = state(100, 30);
        s.hero.apply_frame(
            0,
            TypeFrame {
                text: "Hi, I'm".into(),
                phrase_index: 0,
                mode: Mode::Typing,
            },
        );
        let screen = draw(&s, 100, 30);
        assert!(screen.contains("Hi, I'm"));
        assert!(screen.contains("GitHub"));
        assert!(screen.contains("Home (1/5)"));
    }

    #[test]
    fn test_every_section_renders() {
        let mut s = state(100, 30);
        let expected = ["", "About Me", "Tech Stack", "Projects", "Get In Touch"];
        for (section, title) in Section::ALL.into_iter().zip(expected) {
            s.set_section(section);
            let screen = draw(&s, 100, 30);
            assert!(screen.contains(title), "{:?}", section);
        }
    }

    #[test]
    fn test_expanded_sidebar_shows_labels() {
        let mut s = state(100, 30);
        s.set_sidebar_open(true);
        s.tick(Duration::from_millis(400));
        let screen = draw(&s, 100, 30);
        assert!(screen.contains("Tech Stack"));
        assert!(screen.contains("Light mode"));
    }

    #[test]
    fn test_contact_form_and_errors() {
        let mut s = state(100, 30);
        s.set_section(Section::Contact);
        s.focus_field(FormField::Name);
        s.contact.name.insert_char('Z');
        s.submit_contact();
        let screen = draw(&s, 100, 30);
        assert!(screen.contains("Email is required"));
        assert!(screen.contains("github.com/izaanaamir"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for (w, h) in [(1, 1), (10, 4), (30, 8)] {
            let mut s = state(w, h);
            for section in Section::ALL {
                s.set_section(section);
                draw(&s, w, h);
            }
        }
    }
}
