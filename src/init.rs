//!
//! This module provides initialization utilities for barkit, such as creating the default configuration file.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

/// Commented default configuration, matching `Config::default()`
pub const DEFAULT_CONFIG: &str = r#"# barkit configuration file

[global]
# Output format for the workspaces command (text or json)
# output-format = "text"

[workspaces]
# Output (monitor) name used when --screen is not given
# screen = "DP-1"

[shell]
# How long a notification popup stays visible
notification-timeout-ms = 5000
# Delay before a hidden notification is dropped
notification-clear-delay-ms = 300
# Tray menu placement below the bar
tray-menu-width = 180.0
bar-height = 30.0
spacing-small = 4.0
spacing-large = 12.0

[palette]
# Palette generator (dank16 or base16)
variant = "dank16"
# Generate a light palette
light = false
"#;

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was written, or `false` if it already exists and
/// `force` is not set.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &str, force: bool) -> Result<bool, InitError> {
    if Path::new(path).exists() && !force {
        return Ok(false);
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| InitError::IoError {
        source: e,
        path: path.to_string(),
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_default_config_matches_defaults() {
        assert_eq!(Config::from_toml_str(DEFAULT_CONFIG).unwrap(), Config::default());
    }
}
