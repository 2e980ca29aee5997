// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast auto-dismiss delay
//! - `[backend]` - Hosted gift store endpoint and refresh cadence
//! - `[payment]` - Bank transfer details shown to guests
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `GIFT_REGISTRY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gift_registry::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Write a copy to an explicit path
//! config.general.language = Some("pt-BR".to_string());
//! config::save_to_path(&config, std::path::Path::new("portable/settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::DismissTimeout;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Delay before a toast starts its exit animation (milliseconds).
    #[serde(
        default = "default_auto_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Returns the configured auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn auto_dismiss(&self) -> DismissTimeout {
        self.auto_dismiss_ms
            .map(DismissTimeout::new)
            .unwrap_or_default()
    }
}

/// Hosted gift store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Project URL of the hosted store (e.g., `https://xyz.supabase.co`).
    ///
    /// When absent the application runs against the bundled sample catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public (anonymous) API key sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    /// Interval between catalog refreshes (seconds).
    #[serde(
        default = "default_refresh_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl BackendConfig {
    /// Returns the refresh interval, never shorter than [`MIN_REFRESH_SECS`].
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        let secs = self
            .refresh_secs
            .unwrap_or(DEFAULT_REFRESH_SECS)
            .max(MIN_REFRESH_SECS);
        Duration::from_secs(secs)
    }

    /// Returns the URL and key when both are configured and non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        let key = self.anon_key.as_deref().filter(|k| !k.trim().is_empty())?;
        Some((url, key))
    }
}

/// Bank transfer details displayed on the payment panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentConfig {
    /// PIX key guests can copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,

    /// Name of the account holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,

    /// Bank name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Hosted gift store settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Bank transfer details.
    #[serde(default)]
    pub payment: PaymentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_DISMISS_MS)
}

fn default_refresh_secs() -> Option<u64> {
    Some(DEFAULT_REFRESH_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("pt-BR".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                auto_dismiss_ms: Some(4500),
            },
            backend: BackendConfig {
                url: Some("https://example.supabase.co".to_string()),
                anon_key: Some("public-anon-key".to_string()),
                refresh_secs: Some(60),
            },
            payment: PaymentConfig {
                pix_key: Some("noivos@example.com".to_string()),
                holder_name: Some("Jefferson".to_string()),
                bank: Some("Banco do Brasil".to_string()),
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
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
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
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.notifications.auto_dismiss_ms,
            Some(DEFAULT_AUTO_DISMISS_MS)
        );
        assert_eq!(config.backend.refresh_secs, Some(DEFAULT_REFRESH_SECS));
        assert!(config.backend.credentials().is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let config: Config = toml::from_str("[payment]\npix_key = \"abc\"\n").expect("parse");
        assert_eq!(config.payment.pix_key.as_deref(), Some("abc"));
        assert_eq!(
            config.notifications.auto_dismiss(),
            DismissTimeout::default()
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn refresh_interval_is_clamped_to_minimum() {
        let backend = BackendConfig {
            refresh_secs: Some(1),
            ..BackendConfig::default()
        };
        assert_eq!(
            backend.refresh_interval(),
            Duration::from_secs(MIN_REFRESH_SECS)
        );
    }

    #[test]
    fn credentials_require_both_url_and_key() {
        let mut backend = BackendConfig {
            url: Some("https://example.supabase.co".into()),
            ..BackendConfig::default()
        };
        assert!(backend.credentials().is_none());

        backend.anon_key = Some("   ".into());
        assert!(backend.credentials().is_none());

        backend.anon_key = Some("key".into());
        assert_eq!(
            backend.credentials(),
            Some(("https://example.supabase.co", "key"))
        );
    }
}
