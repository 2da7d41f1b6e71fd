//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the portfolio renders out of the box.

use crate::animation::typewriter::TypewriterConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub hero: TypewriterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Who the portfolio is about and what it shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default = "default_about")]
    pub about: Vec<String>,
    #[serde(default = "default_stats")]
    pub stats: Vec<Stat>,
    #[serde(default = "default_technologies")]
    pub technologies: Vec<Technology>,
    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,
    #[serde(default = "default_socials")]
    pub socials: Vec<SocialLink>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            resume_url: None,
            about: default_about(),
            stats: default_stats(),
            technologies: default_technologies(),
            projects: default_projects(),
            socials: default_socials(),
        }
    }
}

impl ProfileConfig {
    pub fn social(&self, name: &str) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Accent as `#RRGGBB`.
    pub color: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Accent as `#RRGGBB`.
    #[serde(default = "default_accent")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Text shown next to the icon; falls back to the url.
    #[serde(default)]
    pub text: Option<String>,
}

impl SocialLink {
    pub fn label(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.url)
    }
}

/// Layout, theme and animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// One full on/off cycle of the hero caret.
    #[serde(default = "default_caret_period")]
    pub caret_period_ms: u64,
    #[serde(default = "default_sidebar_collapsed")]
    pub sidebar_collapsed_width: u16,
    #[serde(default = "default_sidebar_expanded")]
    pub sidebar_expanded_width: u16,
    #[serde(default = "default_sidebar_transition")]
    pub sidebar_transition_ms: u64,
    #[serde(default = "default_particle_fade")]
    pub particle_fade_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            tick_rate_ms: default_tick_rate(),
            caret_period_ms: default_caret_period(),
            sidebar_collapsed_width: default_sidebar_collapsed(),
            sidebar_expanded_width: default_sidebar_expanded(),
            sidebar_transition_ms: default_sidebar_transition(),
            particle_fade_ms: default_particle_fade(),
        }
    }
}

/// Floors for the timer periods. Zero or tiny values would flood the event
/// channel without moving any animation forward.
const MIN_TICK_RATE_MS: u64 = 10;
const MIN_CARET_PERIOD_MS: u64 = 100;

impl UiConfig {
    /// Period of the render tick, and the step every tween advances by.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    pub fn caret_period(&self) -> Duration {
        Duration::from_millis(self.caret_period_ms.max(MIN_CARET_PERIOD_MS))
    }
}

/// Decorative particle background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Upper bound on live particles, including pushed ones.
    #[serde(default = "default_particle_limit")]
    pub limit: usize,
    /// Cells per second.
    #[serde(default = "default_particle_speed")]
    pub speed: f32,
    /// Particles closer than this many cells are linked.
    #[serde(default = "default_link_distance")]
    pub link_distance: f32,
    #[serde(default = "default_min_opacity")]
    pub min_opacity: f32,
    #[serde(default = "default_max_opacity")]
    pub max_opacity: f32,
    /// How many particles a click adds.
    #[serde(default = "default_push_quantity")]
    pub push_quantity: usize,
    /// Particles within this many cells of the pointer are pushed away.
    #[serde(default = "default_repulse_distance")]
    pub repulse_distance: f32,
    /// How long a repulse push lasts before the particle drifts normally.
    #[serde(default = "default_repulse_secs")]
    pub repulse_secs: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: default_particle_limit(),
            speed: default_particle_speed(),
            link_distance: default_link_distance(),
            min_opacity: default_min_opacity(),
            max_opacity: default_max_opacity(),
            push_quantity: default_push_quantity(),
            repulse_distance: default_repulse_distance(),
            repulse_secs: default_repulse_secs(),
        }
    }
}

/// Email relay used by the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default = "default_relay_timeout")]
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: None,
            template_id: None,
            public_key: None,
            timeout_secs: default_relay_timeout(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_name() -> String {
    "izaanaamir".to_string()
}
fn default_about() -> Vec<String> {
    vec![
        "Hello! I'm a Backend Engineer specializing in cloud-native architectures and \
         scalable systems. With expertise in AWS, Python, and microservices, I craft robust \
         solutions that power modern applications. My journey began at Bilkent University \
         and has evolved into building enterprise-grade distributed systems."
            .to_string(),
        "Beyond development, I'm passionate about architecting serverless solutions and \
         implementing machine learning models in production environments. When I'm not \
         coding, you can find me exploring new technologies and contributing to open-source \
         projects."
            .to_string(),
    ]
}
fn default_stats() -> Vec<Stat> {
    [
        ("Years Experience", "3+"),
        ("Cloud Services", "15+"),
        ("GitHub Projects", "20+"),
        ("Coffee Cups", "∞"),
    ]
    .into_iter()
    .map(|(label, value)| Stat {
        label: label.into(),
        value: value.into(),
    })
    .collect()
}
fn default_technologies() -> Vec<Technology> {
    [
        ("Python", "#3776AB", "High-level programming language for general-purpose programming"),
        ("JavaScript", "#F7DF1E", "Dynamic programming language for web development"),
        ("AWS", "#FF9900", "Comprehensive cloud computing platform"),
        ("Google Cloud", "#4285F4", "Suite of cloud computing services"),
        ("Kubernetes", "#326CE5", "Container orchestration platform"),
        ("Docker", "#2496ED", "Platform for developing and deploying containerized applications"),
        ("PostgreSQL", "#336791", "Advanced open-source relational database"),
        ("MongoDB", "#47A248", "NoSQL database for modern applications"),
        ("Django", "#092E20", "High-level Python web framework"),
    ]
    .into_iter()
    .map(|(name, color, description)| Technology {
        name: name.into(),
        color: color.into(),
        description: description.into(),
    })
    .collect()
}
fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Blaze Chat".into(),
            description: "A real-time messaging application: create an account, start \
                          conversations, send messages and receive live updates."
                .into(),
            github: Some("https://github.com/izaanaamir/blaze-chat".into()),
            demo: None,
            tags: vec!["FastAPI".into(), "Alembic".into(), "SQLAlchemy".into()],
            color: "#E11D48".into(),
        },
        Project {
            title: "Collab Doc".into(),
            description: "Collaborative real-time document editing with authentication, \
                          document sharing and live notifications."
                .into(),
            github: Some("https://github.com/izaanaamir/collabdoc".into()),
            demo: None,
            tags: vec!["Django".into(), "WebSocket".into(), "PostgreSQL".into()],
            color: "#059669".into(),
        },
        Project {
            title: "WePrep".into(),
            description: "Video analysis platform pairing a Next.js frontend with a \
                          serverless backend on Lambda, DynamoDB and S3."
                .into(),
            github: Some("https://github.com/izaanaamir/weprep".into()),
            demo: Some("https://weprep.co".into()),
            tags: vec!["AWS Amplify".into(), "Next.js".into(), "LLM".into()],
            color: "#7C3AED".into(),
        },
        Project {
            title: "ExperliPROF".into(),
            description: "Streamlines teachers' work across multiple schools: planning, \
                          management and data extraction in one place."
                .into(),
            github: Some("https://github.com/izaanaamir/experliprof".into()),
            demo: None,
            tags: vec!["Django".into(), "Angular".into(), "MySQL".into()],
            color: "#0EA5E9".into(),
        },
    ]
}
fn default_socials() -> Vec<SocialLink> {
    [
        ("Email", "mailto:izaanleon@gmail.com", "izaanleon@gmail.com"),
        ("LinkedIn", "https://linkedin.com/in/izaanaamir", "linkedin.com/in/izaanaamir"),
        ("GitHub", "https://github.com/izaanaamir", "github.com/izaanaamir"),
        ("Instagram", "https://instagram.com/izaanaamir", "instagram.com/izaanaamir"),
    ]
    .into_iter()
    .map(|(name, url, text)| SocialLink {
        name: name.into(),
        url: url.into(),
        text: Some(text.into()),
    })
    .collect()
}
fn default_accent() -> String {
    "#A1A1AA".to_string()
}
fn default_tick_rate() -> u64 {
    50
}
fn default_caret_period() -> u64 {
    1000
}
fn default_sidebar_collapsed() -> u16 {
    5
}
fn default_sidebar_expanded() -> u16 {
    22
}
fn default_sidebar_transition() -> u64 {
    300
}
fn default_particle_fade() -> u64 {
    500
}
fn default_particle_limit() -> usize {
    50
}
fn default_particle_speed() -> f32 {
    2.0
}
fn default_link_distance() -> f32 {
    12.0
}
fn default_min_opacity() -> f32 {
    0.1
}
fn default_max_opacity() -> f32 {
    0.4
}
fn default_push_quantity() -> usize {
    4
}
fn default_repulse_distance() -> f32 {
    12.0
}
fn default_repulse_secs() -> f32 {
    0.4
}
fn default_relay_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}
fn default_relay_timeout() -> u64 {
    15
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/folio/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.hero, TypewriterConfig::default());
        assert_eq!(cfg.ui.theme, ThemeMode::Dark);
        assert_eq!(cfg.profile.projects.len(), 4);
        assert_eq!(cfg.particles.limit, 50);
        assert!(cfg.contact.service_id.is_none());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [hero]
            phrases = ["Rustacean"]
            hold_delay_ms = 500

            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.hero.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(cfg.hero.hold_delay_ms, 500);
        assert_eq!(cfg.hero.typing_delay_ms, 50);
        assert_eq!(cfg.ui.theme, ThemeMode::Light);
        assert_eq!(cfg.ui.sidebar_expanded_width, 22);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.profile.socials, cfg.profile.socials);
        assert_eq!(back.hero, cfg.hero);
    }

    #[test]
    fn test_zero_timings_are_floored() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 0
            caret_period_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.tick_rate(), Duration::from_millis(10));
        assert_eq!(cfg.ui.caret_period(), Duration::from_millis(100));
        assert_eq!(UiConfig::default().tick_rate(), Duration::from_millis(50));
        assert_eq!(UiConfig::default().caret_period(), Duration::from_millis(1000));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Light.toggled().is_dark());
    }
}
