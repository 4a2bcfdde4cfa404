//! Configuration model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
    /// Console configuration.
    pub console: ConsoleConfig,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory renamed files are written to.
    pub dir: PathBuf,
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Colorize console output.
    pub color: bool,
    /// Print a line per processed item.
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tnt_renamer")
}

/// Load configuration.
///
/// An explicit `path` must exist and parse. Without one, the default location
/// is tried and anything unusable there falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        return parse_config(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)));
    }

    let config_path = dirs_config_path().join("config.toml");
    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                }
            }
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}
