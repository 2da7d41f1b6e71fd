pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, ContactConfig, LoggingConfig, ParticleConfig, ThemeMode};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

/// Write only `ui.theme`, keeping everything else in the file as the user
/// left it.
pub fn save_theme(theme: ThemeMode) -> Result<()> {
    save_theme_to(theme, &config_path())
}

pub fn save_theme_to(theme: ThemeMode, path: &std::path::Path) -> Result<()> {
    let mut doc: toml::Table = if path.exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?
    } else {
        toml::Table::new()
    };

    let ui = doc
        .entry("ui")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(ui) = ui else {
        anyhow::bail!("[ui] in {} is not a table", path.display());
    };
    let value = toml::Value::try_from(theme).with_context(|| "Failed to serialize theme")?;
    ui.insert("theme".to_string(), value);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(&doc).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
