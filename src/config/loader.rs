//! Configuration loading and discovery for `hanabi-data.toml`
//!
//! Provides functions to find and load configuration.

use super::schema::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file searched for.
pub const CONFIG_FILE_NAME: &str = "hanabi-data.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse hanabi-data.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the color catalog path
    pub colors: Option<PathBuf>,
    /// Override the suit catalog path
    pub suits: Option<PathBuf>,
}

/// Find hanabi-data.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for hanabi-data.toml
/// 2. Check XDG_CONFIG_HOME/hanabi-data/hanabi-data.toml (or ~/.config/...)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find hanabi-data.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("hanabi-data").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find hanabi-data.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration (bundled catalogs, builtin note words).
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Configuration used when no hanabi-data.toml is found.
///
/// Relative paths resolve against the current directory.
pub fn default_config() -> Config {
    Config { base_dir: env::current_dir().unwrap_or_default(), ..Default::default() }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. Relative override
/// paths are taken relative to the current directory, not the config file.
pub fn merge_cli_overrides(config: &mut Config, overrides: &CliOverrides) {
    let cwd = env::current_dir().unwrap_or_default();

    if let Some(ref colors) = overrides.colors {
        config.catalog.colors = Some(resolve_path(&cwd, colors));
    }

    if let Some(ref suits) = overrides.suits {
        config.catalog.suits = Some(resolve_path(&cwd, suits));
    }
}

/// Resolve a path relative to a base directory.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the base directory.
pub fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
