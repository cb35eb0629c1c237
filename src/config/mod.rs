// SPDX-License-Identifier: MPL-2.0
//! This module handles the configuration of the notification center,
//! loading and saving it from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Visible cap and default display time
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `TOAST_CENTER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_center::config;
//!
//! let (mut config, _warning) = config::load();
//! config.notifications.max_visible = Some(3);
//! config::save(&config).expect("Failed to save config");
//!
//! let settings = config.center_settings();
//! assert_eq!(settings.max_visible.value(), 3);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::notifications::{DisplayDuration, MaxVisible};
use crate::error::{Error, Result};
use crate::notifications::CenterSettings;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced when an existing settings file cannot be used.
pub const LOAD_ERROR_WARNING: &str = "Settings could not be loaded, using defaults";

// =============================================================================
// Section Structs
// =============================================================================

/// Notification center settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// How many toasts are shown at once (1 to 20).
    #[serde(
        default = "default_max_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible: Option<usize>,

    /// Display time in milliseconds when a toast has none of its own.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            default_duration_ms: default_duration_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    /// Builds center settings, clamping out-of-range values.
    #[must_use]
    pub fn center_settings(&self) -> CenterSettings {
        let section = &self.notifications;
        CenterSettings {
            max_visible: MaxVisible::new(section.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE)),
            default_duration: DisplayDuration::from_millis(
                section.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "failed to load settings");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            notifications: NotificationsConfig {
                max_visible: Some(3),
                default_duration_ms: Some(2500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications\nmax_visible = ").expect("write failed");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[notifications]\nmax_visible = 2\n").unwrap();
        assert_eq!(config.notifications.max_visible, Some(2));
        assert_eq!(
            config.notifications.default_duration_ms,
            Some(DEFAULT_DURATION_MS)
        );

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn center_settings_clamp_out_of_range_values() {
        let config = Config {
            notifications: NotificationsConfig {
                max_visible: Some(0),
                default_duration_ms: Some(0),
            },
        };
        let settings = config.center_settings();
        assert_eq!(settings.max_visible.value(), MIN_MAX_VISIBLE);
        assert!(settings.default_duration.is_persistent());

        let config = Config {
            notifications: NotificationsConfig {
                max_visible: Some(500),
                default_duration_ms: None,
            },
        };
        let settings = config.center_settings();
        assert_eq!(settings.max_visible.value(), MAX_MAX_VISIBLE);
        assert_eq!(
            settings.default_duration.as_millis(),
            DEFAULT_DURATION_MS
        );
    }

    #[test]
    fn default_config_matches_center_defaults() {
        assert_eq!(Config::default().center_settings(), CenterSettings::default());
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config::default();

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save failed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
