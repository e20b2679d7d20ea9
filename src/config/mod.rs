// SPDX-License-Identifier: MPL-2.0
//! This module handles the store's configuration, including loading and saving
//! it to a `toasts.toml` file.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOAST_STORE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_store::config::{self, Config};
//!
//! let (mut config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("Using default toast settings: {key}");
//! }
//!
//! config.toasts.limit = Some(5);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::toast::{RemoveDelay, ToastDuration, ToastLimit};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "ToastStore";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_STORE_CONFIG_DIR";

// =============================================================================
// Config Sections
// =============================================================================

/// Store configuration, persisted as TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[toasts]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastsConfig {
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: Option<u64>,
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: Option<u64>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            duration_ms: default_duration_ms(),
            remove_delay_ms: default_remove_delay_ms(),
        }
    }
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

fn default_limit() -> Option<usize> {
    Some(DEFAULT_TOAST_LIMIT)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_remove_delay_ms() -> Option<u64> {
    Some(DEFAULT_REMOVE_DELAY_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Validated store settings derived from a [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub limit: ToastLimit,
    pub duration: ToastDuration,
    pub remove_delay: RemoveDelay,
}

impl Settings {
    /// Returns settings with the given limit and defaults for the rest.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: ToastLimit::new(limit),
            ..Self::default()
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let toasts = &config.toasts;
        Self {
            limit: toasts.limit.map(ToastLimit::new).unwrap_or_default(),
            duration: toasts
                .duration_ms
                .map(ToastDuration::from_millis)
                .unwrap_or_default(),
            remove_delay: toasts
                .remove_delay_ms
                .map(RemoveDelay::from_millis)
                .unwrap_or_default(),
        }
    }
}

impl From<&Config> for BufferCapacity {
    fn from(config: &Config) -> Self {
        config
            .diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some("config-load-error".to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

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
        fs::create_dir_all(parent).map_err(|e| Error::Io(parent.to_path_buf(), e))?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toast::limit_bounds;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.toasts.limit = Some(5);
        config.toasts.duration_ms = Some(8_000);
        config.diagnostics.buffer_capacity = Some(200);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("toasts.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn load_from_missing_path_reports_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("absent.toml");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::Io(p, _)) if p == path));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("toasts.toml");
        fs::write(&path, "[toasts]\nlimit = 7\n").expect("failed to write config");

        let loaded = load_from_path(&path).expect("partial config should load");
        assert_eq!(loaded.toasts.limit, Some(7));
        assert_eq!(loaded.toasts.duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts\nlimit = ")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.toasts.remove_delay_ms = Some(250);

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.toasts.remove_delay_ms, Some(250));
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.toasts.limit = Some(0);
        config.toasts.duration_ms = Some(1);

        let settings = Settings::from(&config);
        assert_eq!(settings.limit.value(), limit_bounds::MIN);
        assert_eq!(settings.duration.as_millis(), MIN_TOAST_DURATION_MS);
    }

    #[test]
    fn settings_use_defaults_when_unset() {
        let mut config = Config::default();
        config.toasts.limit = None;
        config.toasts.remove_delay_ms = None;

        let settings = Settings::from(&config);
        assert_eq!(settings.limit.value(), DEFAULT_TOAST_LIMIT);
        assert_eq!(settings.remove_delay.as_millis(), DEFAULT_REMOVE_DELAY_MS);
    }

    #[test]
    fn buffer_capacity_follows_diagnostics_section() {
        let mut config = Config::default();
        assert_eq!(
            BufferCapacity::from(&config).value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );

        config.diagnostics.buffer_capacity = Some(1);
        assert_eq!(
            BufferCapacity::from(&config).value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn domain_bounds_match_config() {
        use crate::domain::diagnostics::buffer_capacity_bounds;
        use crate::domain::toast::{remove_delay_bounds, toast_duration_bounds};

        assert_eq!(limit_bounds::MIN, MIN_TOAST_LIMIT);
        assert_eq!(limit_bounds::MAX, MAX_TOAST_LIMIT);
        assert_eq!(limit_bounds::DEFAULT, DEFAULT_TOAST_LIMIT);
        assert_eq!(toast_duration_bounds::MIN, MIN_TOAST_DURATION_MS);
        assert_eq!(toast_duration_bounds::MAX, MAX_TOAST_DURATION_MS);
        assert_eq!(toast_duration_bounds::DEFAULT, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(remove_delay_bounds::MIN, MIN_REMOVE_DELAY_MS);
        assert_eq!(remove_delay_bounds::MAX, MAX_REMOVE_DELAY_MS);
        assert_eq!(remove_delay_bounds::DEFAULT, DEFAULT_REMOVE_DELAY_MS);
        assert_eq!(buffer_capacity_bounds::MIN, MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(buffer_capacity_bounds::MAX, MAX_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            buffer_capacity_bounds::DEFAULT,
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
