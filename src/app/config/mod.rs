// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded once at
//! startup from a `settings.toml` file. The file is never written back.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[timing]` - Splash dwell and screen transition durations
//! - `[camera]` - Simulated recognizer delays
//! - `[training]` - Simulated training pace
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `SIGNSPEAK_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use signspeak::app::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("splash dwell: {:?}", config.timing.splash_dwell());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Durations of the navigation shell.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default = "default_splash_dwell_ms")]
    pub splash_dwell_ms: u64,

    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_dwell_ms: DEFAULT_SPLASH_DWELL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn splash_dwell(&self) -> Duration {
        Duration::from_millis(
            self.splash_dwell_ms
                .clamp(MIN_SPLASH_DWELL_MS, MAX_SPLASH_DWELL_MS),
        )
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }
}

/// Simulated recognizer settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CameraConfig {
    #[serde(default = "default_detection_delay_ms")]
    pub detection_delay_ms: u64,

    #[serde(default = "default_commit_delay_ms")]
    pub commit_delay_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            detection_delay_ms: DEFAULT_DETECTION_DELAY_MS,
            commit_delay_ms: DEFAULT_COMMIT_DELAY_MS,
        }
    }
}

impl CameraConfig {
    #[must_use]
    pub fn detection_delay(&self) -> Duration {
        clamp_camera_delay(self.detection_delay_ms)
    }

    #[must_use]
    pub fn commit_delay(&self) -> Duration {
        clamp_camera_delay(self.commit_delay_ms)
    }
}

fn clamp_camera_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_CAMERA_DELAY_MS, MAX_CAMERA_DELAY_MS))
}

/// Simulated training settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrainingConfig {
    #[serde(default = "default_epoch_interval_ms")]
    pub epoch_interval_ms: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epoch_interval_ms: DEFAULT_EPOCH_INTERVAL_MS,
        }
    }
}

impl TrainingConfig {
    #[must_use]
    pub fn epoch_interval(&self) -> Duration {
        Duration::from_millis(
            self.epoch_interval_ms
                .clamp(MIN_EPOCH_INTERVAL_MS, MAX_EPOCH_INTERVAL_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub training: TrainingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_splash_dwell_ms() -> u64 {
    DEFAULT_SPLASH_DWELL_MS
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

fn default_detection_delay_ms() -> u64 {
    DEFAULT_DETECTION_DELAY_MS
}

fn default_commit_delay_ms() -> u64 {
    DEFAULT_COMMIT_DELAY_MS
}

fn default_epoch_interval_ms() -> u64 {
    DEFAULT_EPOCH_INTERVAL_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>()
        .map_err(|_| D::Error::custom(format!("invalid theme_mode: {}", raw)))
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
/// default config with an i18n key describing what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(err.i18n_key().to_string()));
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
// Tests
// =============================================================================
