// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast stacking and auto-dismiss timing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `MEETDECK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use meetdeck::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the settings file cannot be used.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// How many toasts are visible at once.
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,

    #[serde(default = "default_success_secs", skip_serializing_if = "Option::is_none")]
    pub success_secs: Option<u32>,

    #[serde(default = "default_info_secs", skip_serializing_if = "Option::is_none")]
    pub info_secs: Option<u32>,

    #[serde(default = "default_warning_secs", skip_serializing_if = "Option::is_none")]
    pub warning_secs: Option<u32>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            success_secs: default_success_secs(),
            info_secs: default_info_secs(),
            warning_secs: default_warning_secs(),
        }
    }
}

impl NotificationsConfig {
    /// Visible toast limit, clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE_TOASTS)
            .clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS)
    }

    #[must_use]
    pub fn success_duration(&self) -> Duration {
        clamp_secs(self.success_secs.unwrap_or(DEFAULT_SUCCESS_SECS))
    }

    #[must_use]
    pub fn info_duration(&self) -> Duration {
        clamp_secs(self.info_secs.unwrap_or(DEFAULT_INFO_SECS))
    }

    #[must_use]
    pub fn warning_duration(&self) -> Duration {
        clamp_secs(self.warning_secs.unwrap_or(DEFAULT_WARNING_SECS))
    }
}

fn clamp_secs(secs: u32) -> Duration {
    Duration::from_secs(u64::from(secs.clamp(MIN_DISMISS_SECS, MAX_DISMISS_SECS)))
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE_TOASTS)
}

fn default_success_secs() -> Option<u32> {
    Some(DEFAULT_SUCCESS_SECS)
}

fn default_info_secs() -> Option<u32> {
    Some(DEFAULT_INFO_SECS)
}

fn default_warning_secs() -> Option<u32> {
    Some(DEFAULT_WARNING_SECS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Falling back to default settings ({}): {err}", path.display());
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration under `base_dir`, or the resolved config directory
/// when `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            notifications: NotificationsConfig {
                max_visible: Some(5),
                success_secs: Some(2),
                info_secs: Some(4),
                warning_secs: Some(9),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[notifications]\nwarning_secs = 7\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.notifications.warning_secs, Some(7));
        assert_eq!(loaded.notifications.max_visible, Some(DEFAULT_MAX_VISIBLE_TOASTS));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn notification_values_are_clamped() {
        let section = NotificationsConfig {
            max_visible: Some(0),
            success_secs: Some(0),
            info_secs: Some(1_000),
            warning_secs: None,
        };
        assert_eq!(section.max_visible(), MIN_MAX_VISIBLE_TOASTS);
        assert_eq!(
            section.success_duration(),
            Duration::from_secs(u64::from(MIN_DISMISS_SECS))
        );
        assert_eq!(
            section.info_duration(),
            Duration::from_secs(u64::from(MAX_DISMISS_SECS))
        );
        assert_eq!(
            section.warning_duration(),
            Duration::from_secs(u64::from(DEFAULT_WARNING_SECS))
        );
    }

    #[test]
    fn save_with_override_is_read_back_by_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
