// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! overlay preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_overlays::config::{self, Config, UnrecognizedClose};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Reject modals that are closed without an explicit answer
//! config.modal.unrecognized_close = UnrecognizedClose::Reject;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedOverlays";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub toast: ToastSettings,
    pub layer: LayerSettings,
    pub modal: ModalSettings,
    pub diagnostics: DiagnosticsSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// Auto-close delay applied when a toast does not set its own. `0` keeps toasts open.
    pub duration_ms: u64,
    /// Gap between a toast and the one stacked before it.
    pub offset: f32,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            offset: DEFAULT_TOAST_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    pub base: u64,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            base: DEFAULT_LAYER_BASE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalSettings {
    pub unrecognized_close: UnrecognizedClose,
}

/// What happens to a modal's pending result when it is hidden without
/// a cancel or confirm answer (for example through a close button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedClose {
    /// The result never settles.
    #[default]
    LeavePending,
    /// Treat the close as a cancellation.
    Reject,
    /// Treat the close as a confirmation.
    Resolve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSettings {
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

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
    fn save_and_load_round_trip_preserves_modal_policy() {
        let mut config = Config::default();
        config.modal.unrecognized_close = UnrecognizedClose::Reject;
        config.toast.duration_ms = 1_500;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[modal]\nunrecognized_close = \"resolve\"\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.modal.unrecognized_close, UnrecognizedClose::Resolve);
        assert_eq!(loaded.toast, ToastSettings::default());
        assert_eq!(loaded.layer.base, DEFAULT_LAYER_BASE);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_leaves_unrecognized_closes_pending() {
        let config = Config::default();
        assert_eq!(config.modal.unrecognized_close, UnrecognizedClose::LeavePending);
        assert_eq!(config.toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
    }
}
