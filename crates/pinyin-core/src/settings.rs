//! Global settings loaded from TOML, following the same OnceLock pattern as the table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub romanization: RomanizationSettings,
    pub table: TableSettings,
    pub expansion: ExpansionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomanizationSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    /// Compiled table to load instead of the embedded default.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionSettings {
    /// Combination count above which expansion logs a warning. Never a cap.
    pub warn_threshold: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.expansion.warn_threshold == 0 {
        return Err(SettingsError::InvalidValue {
            field: "expansion.warn_threshold".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.table.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "table.path".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
