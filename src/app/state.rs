use crate::animation::caret::CaretBlink;
use crate::animation::tween::{Easing, Tween};
use crate::animation::typewriter::{Frame, Mode};
use crate::app::action::Action;
use crate::app::event::Generation;
use crate::app::store::UiStore;
use crate::config::model::{ProfileConfig, ThemeMode};
use crate::config::AppConfig;
use crate::contact::ContactPayload;
use crate::effects::particles::ParticleField;
use rand::RngExt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home = 0,
    About = 1,
    TechStack = 2,
    Projects = 3,
    Contact = 4,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::TechStack,
        Section::Projects,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::TechStack => "tech-stack",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::TechStack => "Tech Stack",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "⌂",
            Section::About => "☺",
            Section::TechStack => "λ",
            Section::Projects => "▣",
            Section::Contact => "✉",
        }
    }

    pub fn next(self) -> Section {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    pub fn prev(self) -> Section {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

/// What the hero heading currently shows.
#[derive(Debug)]
pub struct HeroView {
    /// `None` while unmounted; frames from other generations are dropped.
    pub generation: Option<Generation>,
    pub text: String,
    pub phrase_index: usize,
    pub mode: Mode,
    pub caret: CaretBlink,
}

impl HeroView {
    fn new(caret: CaretBlink) -> Self {
        Self {
            generation: None,
            text: String::new(),
            phrase_index: 0,
            mode: Mode::Typing,
            caret,
        }
    }

    fn mount(&mut self, generation: Generation) {
        self.generation = Some(generation);
        self.text.clear();
        self.phrase_index = 0;
        self.mode = Mode::Typing;
        self.caret.reset();
    }

    fn unmount(&mut self) {
        self.generation = None;
    }

    /// Apply a typewriter frame. Returns false for a stale generation.
    pub fn apply_frame(&mut self, generation: Generation, frame: Frame) -> bool {
        if self.generation != Some(generation) {
            return false;
        }
        self.text = frame.text;
        self.phrase_index = frame.phrase_index;
        self.mode = frame.mode;
        true
    }

    pub fn blink(&mut self, generation: Generation) -> bool {
        if self.generation != Some(generation) {
            return false;
        }
        self.caret.toggle();
        true
    }
}

#[derive(Debug)]
pub struct SidebarState {
    pub width: Tween,
    pub hovered: bool,
    /// Highlighted row: sections, then the theme toggle.
    pub cursor: usize,
    collapsed: u16,
    expanded: u16,
}

impl SidebarState {
    pub const ITEM_COUNT: usize = Section::ALL.len() + 1;
    pub const THEME_ROW: usize = Section::ALL.len();
    /// Terminal row of the first item; the rows above hold the monogram.
    pub const FIRST_ROW: u16 = 2;

    fn new(collapsed: u16, expanded: u16, transition: Duration) -> Self {
        Self {
            width: Tween::settled(f32::from(collapsed), transition, Easing::EaseInOut),
            hovered: false,
            cursor: 0,
            collapsed,
            expanded: expanded.max(collapsed),
        }
    }

    pub fn item_at_row(row: u16) -> Option<usize> {
        row.checked_sub(Self::FIRST_ROW)
            .map(usize::from)
            .filter(|i| *i < Self::ITEM_COUNT)
    }

    pub fn width_cols(&self) -> u16 {
        self.width.value().round() as u16
    }

    /// Labels are drawn once the sidebar is past the halfway point.
    pub fn shows_labels(&self) -> bool {
        let mid = (f32::from(self.collapsed) + f32::from(self.expanded)) / 2.0;
        self.width.value() >= mid
    }

    fn retarget(&mut self, open: bool) {
        let to = if open { self.expanded } else { self.collapsed };
        self.width.retarget(f32::from(to));
    }
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Sent,
    Failed(String),
    Invalid(String),
}

#[derive(Debug)]
pub struct ContactForm {
    pub name: InputState,
    pub email: InputState,
    pub message: InputState,
    pub submitting: bool,
    pub status: Option<SubmitStatus>,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: InputState::new(),
            email: InputState::new(),
            message: InputState::new(),
            submitting: false,
            status: None,
        }
    }

    pub fn field(&self, field: FormField) -> &InputState {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload::new(&self.name.text, &self.email.text, &self.message.text)
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Selectable rows of the contact section, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactItem {
    Social(usize),
    Field(FormField),
    Send,
}

/// Links on the hero: resume first, then the LinkedIn and GitHub socials.
pub fn home_links(profile: &ProfileConfig) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();
    if let Some(url) = &profile.resume_url {
        links.push(("Resume", url.clone()));
    }
    if let Some(link) = profile.social("LinkedIn") {
        links.push(("LinkedIn", link.url.clone()));
    }
    if let Some(link) = profile.social("GitHub") {
        links.push(("GitHub", link.url.clone()));
    }
    links
}

/// Particles hide once the contact section's top edge reaches the upper
/// half of the viewport.
pub fn particles_visible(contact_top: i32, viewport_height: u16) -> bool {
    contact_top as f32 > f32::from(viewport_height) * 0.5
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Sidebar,
    Content,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: UiStore,
    pub section: Section,
    pub focus: FocusPanel,
    pub content_cursor: usize,
    pub hero: HeroView,
    pub sidebar: SidebarState,
    pub contact: ContactForm,
    pub particles: Option<ParticleField>,
    pub particle_fade: Tween,
    particle_seed: u64,
    pub viewport: (u16, u16),
    next_generation: Generation,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let ui = &config.ui;
        let caret = CaretBlink::new(ui.caret_period());
        let sidebar = SidebarState::new(
            ui.sidebar_collapsed_width,
            ui.sidebar_expanded_width,
            Duration::from_millis(ui.sidebar_transition_ms),
        );
        let particle_fade = Tween::settled(
            1.0,
            Duration::from_millis(ui.particle_fade_ms),
            Easing::Linear,
        );
        let store = UiStore::new(ui.theme);
        Self {
            store,
            section: Section::Home,
            focus: FocusPanel::Content,
            content_cursor: 0,
            hero: HeroView::new(caret),
            sidebar,
            contact: ContactForm::new(),
            particles: None,
            particle_fade,
            particle_seed: rand::rng().random(),
            viewport: (80, 24),
            next_generation: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            config,
        }
    }

    pub fn allocate_generation(&mut self) -> Generation {
        let id = self.next_generation;
        self.next_generation += 1;
        id
    }

    pub fn theme(&self) -> ThemeMode {
        self.store.theme.get()
    }

    /// Mount the view for the initial section.
    pub fn start(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.section == Section::Home && self.hero.generation.is_none() {
            actions.push(self.mount_hero());
        }
        self.update_particle_visibility();
        actions
    }

    fn mount_hero(&mut self) -> Action {
        let generation = self.allocate_generation();
        self.hero.mount(generation);
        Action::MountHero { generation }
    }

    pub fn set_section(&mut self, section: Section) -> Vec<Action> {
        if section == self.section {
            return vec![];
        }
        let mut actions = Vec::new();
        if self.section == Section::Home {
            self.hero.unmount();
            actions.push(Action::UnmountHero);
        }
        tracing::debug!(from = self.section.id(), to = section.id(), "section change");
        self.section = section;
        self.content_cursor = 0;
        if section == Section::Home {
            actions.push(self.mount_hero());
        }
        self.update_particle_visibility();
        self.dirty = true;
        actions
    }

    pub fn next_section(&mut self) -> Vec<Action> {
        self.set_section(self.section.next())
    }

    pub fn prev_section(&mut self) -> Vec<Action> {
        self.set_section(self.section.prev())
    }

    fn update_particle_visibility(&mut self) {
        let height = self.content_size().1.max(1);
        let offset = Section::Contact.index() as i32 - self.section.index() as i32;
        let visible = particles_visible(offset * i32::from(height), height);
        if self.store.particles_visible.set(visible) {
            if visible {
                self.particle_fade = Tween::settled(1.0, self.fade_duration(), Easing::Linear);
            } else {
                self.particle_fade.retarget(0.0);
            }
        }
    }

    fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.config.ui.particle_fade_ms)
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        if self.store.sidebar_open.set(open) {
            self.sidebar.retarget(open);
            self.dirty = true;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.set_sidebar_open(!self.store.sidebar_open.get());
    }

    pub fn set_focus(&mut self, focus: FocusPanel) {
        self.focus = focus;
        let open = focus == FocusPanel::Sidebar || self.sidebar.hovered;
        self.set_sidebar_open(open);
        self.dirty = true;
    }

    pub fn move_sidebar_cursor(&mut self, delta: isize) {
        let max = SidebarState::ITEM_COUNT as isize - 1;
        self.sidebar.cursor = (self.sidebar.cursor as isize + delta).clamp(0, max) as usize;
        self.dirty = true;
    }

    /// Sections jump to their pane; the last row flips the theme.
    pub fn activate_sidebar_item(&mut self, index: usize) -> Vec<Action> {
        self.sidebar.cursor = index.min(SidebarState::ITEM_COUNT - 1);
        match Section::from_index(index) {
            Some(section) => self.set_section(section),
            None => {
                self.toggle_theme();
                vec![]
            }
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.store.toggle_theme();
        self.config.ui.theme = mode;
        self.status_message = Some(format!("Theme: {:?}", mode));
        self.dirty = true;
        mode
    }

    /// The content pane: right of the sidebar at its current animated
    /// width, above the status bar.
    pub fn content_size(&self) -> (u16, u16) {
        (
            self.viewport.0.saturating_sub(self.sidebar.width_cols()),
            self.viewport.1.saturating_sub(1),
        )
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.sync_particle_area();
        self.update_particle_visibility();
        self.dirty = true;
    }

    fn sync_particle_area(&mut self) {
        let (width, height) = self.content_size();
        if self.config.particles.enabled {
            match self.particles.as_mut() {
                Some(field) => field.resize(width, height),
                None => {
                    self.particles = Some(ParticleField::new(
                        self.config.particles.clone(),
                        width,
                        height,
                        self.particle_seed,
                    ))
                }
            }
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if !self.sidebar.width.is_done() {
            self.sidebar.width.advance(dt);
            self.sync_particle_area();
            self.dirty = true;
        }
        if !self.particle_fade.is_done() {
            self.particle_fade.advance(dt);
            self.dirty = true;
        }
        if self.particle_fade.value() > 0.0 {
            if let Some(field) = self.particles.as_mut() {
                field.advance(dt);
                self.dirty = true;
            }
        }
    }

    pub fn content_item_count(&self) -> usize {
        let profile = &self.config.profile;
        match self.section {
            Section::Home => home_links(profile).len(),
            Section::About => 0,
            Section::TechStack => profile.technologies.len(),
            Section::Projects => profile.projects.len(),
            Section::Contact => profile.socials.len() + FormField::ALL.len() + 1,
        }
    }

    pub fn move_content_cursor(&mut self, delta: isize) {
        let count = self.content_item_count();
        if count == 0 {
            self.content_cursor = 0;
            return;
        }
        let max = count as isize - 1;
        self.content_cursor = (self.content_cursor as isize + delta).clamp(0, max) as usize;
        self.dirty = true;
    }

    pub fn contact_item(&self, cursor: usize) -> Option<ContactItem> {
        let socials = self.config.profile.socials.len();
        if cursor < socials {
            return Some(ContactItem::Social(cursor));
        }
        match FormField::ALL.get(cursor - socials) {
            Some(field) => Some(ContactItem::Field(*field)),
            None if cursor == socials + FormField::ALL.len() => Some(ContactItem::Send),
            None => None,
        }
    }

    /// The form field under the cursor, if the user is typing into one.
    pub fn editing_field(&self) -> Option<FormField> {
        if self.section != Section::Contact || self.focus != FocusPanel::Content {
            return None;
        }
        match self.contact_item(self.content_cursor) {
            Some(ContactItem::Field(field)) => Some(field),
            _ => None,
        }
    }

    pub fn focus_field(&mut self, field: FormField) {
        let socials = self.config.profile.socials.len();
        if let Some(pos) = FormField::ALL.iter().position(|f| *f == field) {
            self.content_cursor = socials + pos;
            self.dirty = true;
        }
    }

    /// Enter on the selected item of the active section.
    pub fn activate_content(&mut self) -> Vec<Action> {
        let profile = &self.config.profile;
        let url = match self.section {
            Section::Home => home_links(profile)
                .get(self.content_cursor)
                .map(|(_, url)| url.clone()),
            Section::About => None,
            Section::TechStack => {
                return vec![];
            }
            Section::Projects => profile.projects.get(self.content_cursor).and_then(|p| {
                p.github.clone().or_else(|| p.demo.clone())
            }),
            Section::Contact => match self.contact_item(self.content_cursor) {
                Some(ContactItem::Social(i)) => profile.socials.get(i).map(|s| s.url.clone()),
                Some(ContactItem::Field(field)) => {
                    let next = match field {
                        FormField::Name => FormField::Email,
                        FormField::Email => FormField::Message,
                        FormField::Message => {
                            self.content_cursor += 1;
                            self.dirty = true;
                            return vec![];
                        }
                    };
                    self.focus_field(next);
                    return vec![];
                }
                Some(ContactItem::Send) => return self.submit_contact(),
                None => None,
            },
        };
        match url {
            Some(url) => {
                self.status_message = Some(format!("Opening {}", url));
                self.dirty = true;
                vec![Action::OpenLink { url }]
            }
            None => vec![],
        }
    }

    /// Demo link of the selected project.
    pub fn open_project_demo(&mut self) -> Vec<Action> {
        if self.section != Section::Projects {
            return vec![];
        }
        let demo = self
            .config
            .profile
            .projects
            .get(self.content_cursor)
            .and_then(|p| p.demo.clone());
        match demo {
            Some(url) => {
                self.status_message = Some(format!("Opening {}", url));
                self.dirty = true;
                vec![Action::OpenLink { url }]
            }
            None => {
                self.status_message = Some("No demo for this project".to_string());
                self.dirty = true;
                vec![]
            }
        }
    }

    pub fn submit_contact(&mut self) -> Vec<Action> {
        if self.contact.submitting {
            return vec![];
        }
        let payload = self.contact.payload();
        self.dirty = true;
        if let Err(e) = payload.validate() {
            self.contact.status = Some(SubmitStatus::Invalid(e.to_string()));
            return vec![];
        }
        self.contact.submitting = true;
        self.contact.status = None;
        vec![Action::SubmitContact(payload)]
    }

    pub fn contact_sent(&mut self) {
        self.contact.submitting = false;
        self.contact.status = Some(SubmitStatus::Sent);
        self.contact.reset();
        self.dirty = true;
    }

    pub fn contact_failed(&mut self, error: String) {
        self.contact.submitting = false;
        self.contact.status = Some(SubmitStatus::Failed(error));
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "{} ({}/{})",
            self.section.label(),
            self.section.index() + 1,
            Section::ALL.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut config = AppConfig::default();
        config.profile.resume_url = Some("https://example.com/resume.pdf".into());
        let mut s = AppState::new(config);
        s.resize(100, 30);
        s
    }

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Home.prev(), Section::Home);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::from_index(3), Some(Section::Projects));
        assert_eq!(Section::TechStack.id(), "tech-stack");
    }

    #[test]
    fn test_start_mounts_hero() {
        let mut s = state();
        assert_eq!(s.start(), vec![Action::MountHero { generation: 0 }]);
        assert_eq!(s.hero.generation, Some(0));
        assert!(s.start().is_empty());
    }

    #[test]
    fn test_leaving_home_unmounts_and_returning_remounts() {
        let mut s = state();
        s.start();
        assert_eq!(s.next_section(), vec![Action::UnmountHero]);
        assert_eq!(s.hero.generation, None);
        assert!(s.next_section().is_empty());
        assert_eq!(
            s.set_section(Section::Home),
            vec![Action::MountHero { generation: 1 }]
        );
        assert_eq!(s.hero.text, "");
    }

    #[test]
    fn test_stale_frames_are_ignored() {
        let mut s = state();
        s.start();
        let frame = Frame {
            text: "H".into(),
            phrase_index: 0,
            mode: Mode::Typing,
        };
        assert!(s.hero.apply_frame(0, frame.clone()));
        assert_eq!(s.hero.text, "H");

        s.set_section(Section::About);
        assert!(!s.hero.apply_frame(0, frame.clone()));
        s.set_section(Section::Home);
        assert!(!s.hero.apply_frame(0, frame));
        assert_eq!(s.hero.text, "");
        assert!(!s.hero.blink(0));
        assert!(s.hero.blink(1));
    }

    #[test]
    fn test_particles_hide_near_contact() {
        assert!(particles_visible(30, 30));
        assert!(particles_visible(16, 30));
        assert!(!particles_visible(15, 30));
        assert!(!particles_visible(0, 30));

        let mut s = state();
        s.start();
        s.set_section(Section::Projects);
        assert!(s.store.particles_visible.get());
        s.set_section(Section::Contact);
        assert!(!s.store.particles_visible.get());
        assert_eq!(s.particle_fade.target(), 0.0);

        s.tick(Duration::from_millis(600));
        assert_eq!(s.particle_fade.value(), 0.0);

        s.set_section(Section::About);
        assert!(s.store.particles_visible.get());
        assert_eq!(s.particle_fade.value(), 1.0);
    }

    #[test]
    fn test_sidebar_animates_between_widths() {
        let mut s = state();
        assert_eq!(s.sidebar.width_cols(), 5);
        s.set_sidebar_open(true);
        assert!(s.store.sidebar_open.get());
        s.tick(Duration::from_millis(150));
        let mid = s.sidebar.width_cols();
        assert!(mid > 5 && mid < 22, "{}", mid);
        s.tick(Duration::from_millis(200));
        assert_eq!(s.sidebar.width_cols(), 22);
        assert!(s.sidebar.shows_labels());
        s.toggle_sidebar();
        s.tick(Duration::from_millis(400));
        assert_eq!(s.sidebar.width_cols(), 5);
    }

    #[test]
    fn test_sidebar_rows_and_activation() {
        assert_eq!(SidebarState::item_at_row(0), None);
        assert_eq!(SidebarState::item_at_row(2), Some(0));
        assert_eq!(SidebarState::item_at_row(7), Some(SidebarState::THEME_ROW));
        assert_eq!(SidebarState::item_at_row(8), None);

        let mut s = state();
        s.start();
        assert_eq!(s.activate_sidebar_item(3), vec![Action::UnmountHero]);
        assert_eq!(s.section, Section::Projects);
        s.activate_sidebar_item(SidebarState::THEME_ROW);
        assert_eq!(s.theme(), ThemeMode::Light);
        assert_eq!(s.section, Section::Projects);
    }

    #[test]
    fn test_content_size_excludes_sidebar_and_status() {
        let s = state();
        assert_eq!(s.content_size(), (95, 29));
        let field = s.particles.as_ref().unwrap();
        assert_eq!(field.size(), (95.0, 29.0));
    }

    #[test]
    fn test_theme_toggle_updates_config() {
        let mut s = state();
        assert_eq!(s.theme(), ThemeMode::Dark);
        assert_eq!(s.toggle_theme(), ThemeMode::Light);
        assert_eq!(s.config.ui.theme, ThemeMode::Light);
    }

    #[test]
    fn test_home_links_and_activation() {
        let mut s = state();
        s.start();
        let links = home_links(&s.config.profile);
        assert_eq!(links.iter().map(|(l, _)| *l).collect::<Vec<_>>(), ["Resume", "LinkedIn", "GitHub"]);
        s.move_content_cursor(5);
        assert_eq!(s.content_cursor, 2);
        assert_eq!(
            s.activate_content(),
            vec![Action::OpenLink {
                url: "https://github.com/izaanaamir".into()
            }]
        );
    }

    #[test]
    fn test_contact_items_and_editing() {
        let mut s = state();
        s.set_section(Section::Contact);
        let socials = s.config.profile.socials.len();
        assert_eq!(s.content_item_count(), socials + 4);
        assert_eq!(s.contact_item(0), Some(ContactItem::Social(0)));
        assert_eq!(s.contact_item(socials), Some(ContactItem::Field(FormField::Name)));
        assert_eq!(s.contact_item(socials + 3), Some(ContactItem::Send));
        assert_eq!(s.contact_item(socials + 4), None);

        assert_eq!(s.editing_field(), None);
        s.focus_field(FormField::Name);
        assert_eq!(s.editing_field(), Some(FormField::Name));
        s.activate_content();
        assert_eq!(s.editing_field(), Some(FormField::Email));
    }

    #[test]
    fn test_submit_validates_then_locks() {
        let mut s = state();
        s.set_section(Section::Contact);
        assert!(s.submit_contact().is_empty());
        assert!(matches!(s.contact.status, Some(SubmitStatus::Invalid(_))));

        for c in "Ada".chars() {
            s.contact.name.insert_char(c);
        }
        for c in "ada@example.com".chars() {
            s.contact.email.insert_char(c);
        }
        for c in "Hello!".chars() {
            s.contact.message.insert_char(c);
        }
        let actions = s.submit_contact();
        assert_eq!(
            actions,
            vec![Action::SubmitContact(ContactPayload::new(
                "Ada",
                "ada@example.com",
                "Hello!"
            ))]
        );
        assert!(s.contact.submitting);
        assert!(s.submit_contact().is_empty());

        s.contact_sent();
        assert!(!s.contact.submitting);
        assert_eq!(s.contact.status, Some(SubmitStatus::Sent));
        assert!(s.contact.name.text.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut s = state();
        s.contact.name.insert_char('A');
        s.contact.submitting = true;
        s.contact_failed("relay down".into());
        assert_eq!(s.contact.status, Some(SubmitStatus::Failed("relay down".into())));
        assert_eq!(s.contact.name.text, "A");
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "héllo wörld".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "héllo ");
        input.move_home();
        input.move_right();
        input.delete_forward();
        assert_eq!(input.text, "hllo ");
        input.move_end();
        input.delete_back();
        assert_eq!(input.text, "hllo");
    }
}
