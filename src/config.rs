// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Theme state is intentionally absent: the active theme is rebuilt from the
//! device color scheme on every launch and never persisted.
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config, SlideBinding};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.slide_binding = SlideBinding::PerSlide;
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCarousel";

/// How gallery slides bind to item images.
///
/// The app this gallery reproduces rendered `items[activeIndex].image` in
/// every slide, so all slides show the currently active image. `Faithful`
/// preserves that observable behavior; `PerSlide` binds each slide to its
/// own item's image instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideBinding {
    #[default]
    Faithful,
    PerSlide,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub slide_binding: SlideBinding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            slide_binding: SlideBinding::Faithful,
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
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!("malformed settings.toml, using defaults: {err}");
        Config::default()
    }))
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
    fn default_config_uses_faithful_binding() {
        let config = Config::default();
        assert_eq!(config.slide_binding, SlideBinding::Faithful);
        assert_eq!(config.language, None);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            language: Some("fr".to_string()),
            slide_binding: SlideBinding::PerSlide,
        };
        save_to_path(&config, &path).expect("save failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.language, Some("fr".to_string()));
        assert_eq!(loaded.slide_binding, SlideBinding::PerSlide);
    }

    #[test]
    fn slide_binding_serializes_as_kebab_case() {
        let config = Config {
            language: None,
            slide_binding: SlideBinding::PerSlide,
        };
        let toml_str = toml::to_string_pretty(&config).expect("serialize failed");
        assert!(toml_str.contains("per-slide"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "slide_binding = 42").expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.slide_binding, SlideBinding::Faithful);
    }

    #[test]
    fn missing_field_defaults_binding() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "language = \"en-US\"").expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.language, Some("en-US".to_string()));
        assert_eq!(loaded.slide_binding, SlideBinding::Faithful);
    }
}
