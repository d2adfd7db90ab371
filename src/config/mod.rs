// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! viewer tuning parameters to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use media_overlay::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.description_collapse_chars = Some(150);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MediaOverlay";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Character count shown for a collapsed description.
    #[serde(default)]
    pub description_collapse_chars: Option<usize>,
    /// Overlay show animation duration in milliseconds.
    #[serde(default)]
    pub show_animation_ms: Option<u64>,
    /// Overlay hide animation duration in milliseconds.
    #[serde(default)]
    pub hide_animation_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description_collapse_chars: Some(DEFAULT_DESCRIPTION_COLLAPSE_CHARS),
            show_animation_ms: Some(DEFAULT_SHOW_ANIMATION_MS),
            hide_animation_ms: Some(DEFAULT_HIDE_ANIMATION_MS),
        }
    }
}

impl Config {
    /// Effective collapse threshold, clamped to the valid range.
    #[must_use]
    pub fn collapse_chars(&self) -> usize {
        self.description_collapse_chars
            .unwrap_or(DEFAULT_DESCRIPTION_COLLAPSE_CHARS)
            .clamp(
                MIN_DESCRIPTION_COLLAPSE_CHARS,
                MAX_DESCRIPTION_COLLAPSE_CHARS,
            )
    }

    /// Effective show animation duration, clamped to the valid range.
    #[must_use]
    pub fn show_duration(&self) -> Duration {
        let ms = self
            .show_animation_ms
            .unwrap_or(DEFAULT_SHOW_ANIMATION_MS)
            .clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS);
        Duration::from_millis(ms)
    }

    /// Effective hide animation duration, clamped to the valid range.
    #[must_use]
    pub fn hide_duration(&self) -> Duration {
        let ms = self
            .hide_animation_ms
            .unwrap_or(DEFAULT_HIDE_ANIMATION_MS)
            .clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS);
        Duration::from_millis(ms)
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
