use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::HeroFrame { generation, frame } => {
            if state.hero.apply_frame(generation, frame) {
                state.dirty = true;
            } else {
                tracing::trace!(generation, "dropped stale hero frame");
            }
            vec![]
        }
        AppEvent::CaretBlink { generation } => {
            if state.hero.blink(generation) {
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::ContactSent => {
            state.contact_sent();
            vec![]
        }
        AppEvent::ContactFailed { error } => {
            tracing::warn!(%error, "contact submission failed");
            state.contact_failed(error);
            vec![]
        }
        AppEvent::Tick => {
            let dt = state.config.ui.tick_rate();
            state.tick(dt);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.resize(w, h);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Char('b') => {
                state.toggle_sidebar();
                return vec![];
            }
            _ => {}
        }
    }

    // A focused form field captures typing
    if let Some(field) = state.editing_field() {
        return handle_field_key(state, field, key);
    }

    state.status_message = None;

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('t') => {
            state.toggle_theme();
            return vec![];
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            return Section::from_index(index)
                .map(|section| state.set_section(section))
                .unwrap_or_default();
        }
        KeyCode::PageDown => return state.next_section(),
        KeyCode::PageUp => return state.prev_section(),
        KeyCode::Tab | KeyCode::BackTab => {
            let next = match state.focus {
                FocusPanel::Sidebar => FocusPanel::Content,
                FocusPanel::Content => FocusPanel::Sidebar,
            };
            state.set_focus(next);
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Sidebar => handle_sidebar_key(state, key),
        FocusPanel::Content => handle_content_key(state, key),
    }
}

fn handle_sidebar_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.move_sidebar_cursor(-1);
            vec![]
        }
        KeyCode::Down => {
            state.move_sidebar_cursor(1);
            vec![]
        }
        KeyCode::Enter => {
            let actions = state.activate_sidebar_item(state.sidebar.cursor);
            if state.sidebar.cursor != SidebarState::THEME_ROW {
                state.set_focus(FocusPanel::Content);
            }
            actions
        }
        KeyCode::Right | KeyCode::Esc => {
            state.set_focus(FocusPanel::Content);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_content_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.next_section(),
        KeyCode::Up | KeyCode::Char('k') => state.prev_section(),
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_content_cursor(1);
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_content_cursor(-1);
            vec![]
        }
        KeyCode::Home => state.set_section(Section::Home),
        KeyCode::End => state.set_section(Section::Contact),
        KeyCode::Enter => state.activate_content(),
        KeyCode::Char('d') => state.open_project_demo(),
        KeyCode::Esc => {
            state.set_focus(FocusPanel::Sidebar);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_field_key(state: &mut AppState, field: FormField, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.set_focus(FocusPanel::Sidebar);
            vec![]
        }
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => state.submit_contact(),
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            state.move_content_cursor(1);
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.move_content_cursor(-1);
            vec![]
        }
        KeyCode::Backspace => {
            let input = state.contact.field_mut(field);
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.contact.field_mut(field).delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.contact.field_mut(field).move_left();
            vec![]
        }
        KeyCode::Right => {
            state.contact.field_mut(field).move_right();
            vec![]
        }
        KeyCode::Home => {
            state.contact.field_mut(field).move_home();
            vec![]
        }
        KeyCode::End => {
            state.contact.field_mut(field).move_end();
            vec![]
        }
        KeyCode::Char(c) => {
            let input = state.contact.field_mut(field);
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'w' => input.delete_word_back(),
                    'u' => input.clear(),
                    _ => {}
                }
            } else {
                input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let over_sidebar = mouse.column < state.sidebar.width_cols();
    if over_sidebar != state.sidebar.hovered {
        state.sidebar.hovered = over_sidebar;
        let open = over_sidebar || state.focus == FocusPanel::Sidebar;
        state.set_sidebar_open(open);
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if over_sidebar => {
            match SidebarState::item_at_row(mouse.row) {
                Some(index) => {
                    state.dirty = true;
                    state.activate_sidebar_item(index)
                }
                None => vec![],
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let x = f32::from(mouse.column.saturating_sub(state.sidebar.width_cols()));
            let y = f32::from(mouse.row);
            if state.store.particles_visible.get() {
                if let Some(field) = state.particles.as_mut() {
                    field.push(x, y);
                    state.dirty = true;
                }
            }
            vec![]
        }
        MouseEventKind::Moved if !over_sidebar => {
            let x = f32::from(mouse.column - state.sidebar.width_cols());
            let y = f32::from(mouse.row);
            if state.store.particles_visible.get() {
                if let Some(field) = state.particles.as_mut() {
                    field.repulse(x, y);
                }
            }
            vec![]
        }
        MouseEventKind::ScrollDown if !over_sidebar => state.next_section(),
        MouseEventKind::ScrollUp if !over_sidebar => state.prev_section(),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::typewriter::{Frame, Mode};
    use crate::config::model::ThemeMode;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default());
        s.resize(100, 30);
        s.start();
        s
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, ctrl('c')), vec![Action::Quit]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut s = state();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handle_event(&mut s, AppEvent::Terminal(CEvent::Key(release))).is_empty());
    }

    #[test]
    fn test_number_keys_jump_sections() {
        let mut s = state();
        assert_eq!(
            handle_event(&mut s, key(KeyCode::Char('4'))),
            vec![Action::UnmountHero]
        );
        assert_eq!(s.section, Section::Projects);
        assert_eq!(
            handle_event(&mut s, key(KeyCode::Char('1'))),
            vec![Action::MountHero { generation: 1 }]
        );
    }

    #[test]
    fn test_arrows_scroll_between_sections() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Down));
        handle_event(&mut s, key(KeyCode::PageDown));
        assert_eq!(s.section, Section::TechStack);
        handle_event(&mut s, key(KeyCode::Up));
        assert_eq!(s.section, Section::About);
    }

    #[test]
    fn test_theme_key_notifies_subscribers() {
        let mut s = state();
        let mut rx = s.store.theme.subscribe();
        handle_event(&mut s, key(KeyCode::Char('t')));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Light);
    }

    #[test]
    fn test_stale_frame_after_remount_is_dropped() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Char('2')));
        handle_event(&mut s, key(KeyCode::Char('1')));
        let frame = Frame {
            text: "Hel".into(),
            phrase_index: 0,
            mode: Mode::Typing,
        };
        handle_event(
            &mut s,
            AppEvent::HeroFrame {
                generation: 0,
                frame: frame.clone(),
            },
        );
        assert_eq!(s.hero.text, "");
        handle_event(&mut s, AppEvent::HeroFrame { generation: 1, frame });
        assert_eq!(s.hero.text, "Hel");
    }

    #[test]
    fn test_ctrl_b_and_hover_open_sidebar() {
        let mut s = state();
        handle_event(&mut s, ctrl('b'));
        assert!(s.store.sidebar_open.get());
        handle_event(&mut s, ctrl('b'));
        assert!(!s.store.sidebar_open.get());

        handle_event(&mut s, mouse(MouseEventKind::Moved, 1, 10));
        assert!(s.sidebar.hovered);
        assert!(s.store.sidebar_open.get());
        handle_event(&mut s, mouse(MouseEventKind::Moved, 60, 10));
        assert!(!s.store.sidebar_open.get());
    }

    #[test]
    fn test_sidebar_click_selects_section() {
        let mut s = state();
        let row = SidebarState::FIRST_ROW + Section::Contact.index() as u16;
        handle_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 2, row));
        assert_eq!(s.section, Section::Contact);
    }

    #[test]
    fn test_click_in_content_pushes_particles() {
        let mut s = state();
        let before = s.particles.as_ref().unwrap().particles().len();
        handle_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        let after = s.particles.as_ref().unwrap().particles();
        assert_eq!(after.len(), before);
        let last = after.last().unwrap();
        assert_eq!((last.x, last.y), (35.0, 10.0));
    }

    #[test]
    fn test_form_typing_and_submit() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Char('5')));
        s.focus_field(FormField::Name);
        for c in "Ada".chars() {
            handle_event(&mut s, key(KeyCode::Char(c)));
        }
        handle_event(&mut s, key(KeyCode::Tab));
        // 't' and 'q' are plain text while a field has focus
        for c in "ada@tq.io".chars() {
            handle_event(&mut s, key(KeyCode::Char(c)));
        }
        handle_event(&mut s, key(KeyCode::Enter));
        for c in "hi".chars() {
            handle_event(&mut s, key(KeyCode::Char(c)));
        }
        assert_eq!(s.theme(), ThemeMode::Dark);
        assert_eq!(s.contact.email.text, "ada@tq.io");

        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.editing_field(), None);
        let actions = handle_event(&mut s, key(KeyCode::Enter));
        assert!(matches!(actions.as_slice(), [Action::SubmitContact(p)] if p.from_name == "Ada"));

        handle_event(
            &mut s,
            AppEvent::ContactFailed {
                error: "offline".into(),
            },
        );
        assert_eq!(s.contact.status, Some(SubmitStatus::Failed("offline".into())));
        assert_eq!(s.contact.message.text, "hi");
    }

    #[test]
    fn test_esc_leaves_field() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Char('5')));
        s.focus_field(FormField::Message);
        handle_event(&mut s, key(KeyCode::Esc));
        assert_eq!(s.focus, FocusPanel::Sidebar);
        assert_eq!(s.editing_field(), None);
    }

    #[test]
    fn test_tick_advances_sidebar() {
        let mut s = state();
        handle_event(&mut s, ctrl('b'));
        for _ in 0..10 {
            handle_event(&mut s, AppEvent::Tick);
        }
        assert_eq!(s.sidebar.width_cols(), 22);
    }

    #[test]
    fn test_zero_tick_rate_still_animates() {
        let mut cfg = AppConfig::default();
        cfg.ui.tick_rate_ms = 0;
        let mut s = AppState::new(cfg);
        s.resize(100, 30);
        s.start();
        s.set_sidebar_open(true);
        for _ in 0..40 {
            handle_event(&mut s, AppEvent::Tick);
        }
        assert_eq!(s.sidebar.width_cols(), 22);
    }

    #[test]
    fn test_pointer_motion_repulses_particles() {
        let mut s = state();
        // Sidebar is 5 columns wide, so this pushes particles at (33, 10).
        handle_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 38, 10));
        handle_event(&mut s, mouse(MouseEventKind::Moved, 40, 10));
        handle_event(&mut s, AppEvent::Tick);

        let field = s.particles.as_ref().unwrap();
        let pushed = &field.particles()[field.particles().len() - 4..];
        for p in pushed {
            assert!(p.x < 33.0, "x = {}", p.x);
        }
    }
}
