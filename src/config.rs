//!
//! This module defines the configuration structures and loading logic for barkit.
//! Configuration lives in `.barkit.toml` in the working directory, or in
//! `barkit/config.toml` under the user's config directory.

use crate::palette::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = ".barkit.toml";

/// File name inside the user config directory (`$XDG_CONFIG_HOME/barkit/`)
pub const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

/// Represents the complete configuration loaded from .barkit.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub workspaces: WorkspacesConfig,
    pub shell: ShellConfig,
    pub palette: PaletteConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Output format for command results (`text` or `json`)
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct WorkspacesConfig {
    /// Output name used when no screen is given on the command line
    pub screen: Option<String>,
}

/// Timing and layout of the tray menu and notification popup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ShellConfig {
    pub notification_timeout_ms: u64,
    pub notification_clear_delay_ms: u64,
    pub tray_menu_width: f64,
    pub bar_height: f64,
    pub spacing_small: f64,
    pub spacing_large: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: 5000,
            notification_clear_delay_ms: 300,
            tray_menu_width: 180.0,
            bar_height: 30.0,
            spacing_small: 4.0,
            spacing_large: 12.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PaletteConfig {
    pub variant: Variant,
    pub light: bool,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load and parse a specific config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        log::debug!("[barkit-config] Loaded config file: {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `.barkit.toml` in `dir` is tried,
    /// then the user config file, and finally the defaults are used.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let project = dir.join(CONFIG_FILE_NAME);
        if project.is_file() {
            return Self::from_file(&project);
        }

        if let Some(user) = user_configuration_path() {
            return Self::from_file(&user);
        }

        log::debug!("[barkit-config] No configuration file found, using defaults");
        Ok(Self::default())
    }
}

/// Discover the user-level configuration file in the platform config directory
fn user_configuration_path() -> Option<PathBuf> {
    use etcetera::{BaseStrategy, choose_base_strategy};

    match choose_base_strategy() {
        Ok(strategy) => {
            let path = strategy.config_dir().join("barkit").join(USER_CONFIG_FILE_NAME);
            if path.is_file() {
                Some(path)
            } else {
                log::debug!("[barkit-config] No user configuration found at: {}", path.display());
                None
            }
        }
        Err(e) => {
            log::debug!("[barkit-config] Failed to determine user config directory: {e}");
            None
        }
    }
}
