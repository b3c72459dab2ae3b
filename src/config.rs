//! Configuration loading
//!
//! Reads `~/.config/toast-provider/config.toml`. Loading never fails: a
//! missing file gives defaults, an invalid one gives defaults plus a warning
//! for the caller to surface.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{ClassStyle, Config, KeysConfig, ToastPosition, ToastStyleConfig};

use crate::error::ToastError;

const CONFIG_DIR: &str = "toast-provider";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and an optional warning about why defaults were used
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match read_config_file(path) {
        Ok(contents) => contents,
        Err(ToastError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return ConfigResult::default();
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            let warning = config
                .keys
                .close_key()
                .is_none()
                .then(|| format!("Unknown close key '{}', using Esc", config.keys.close));
            ConfigResult { config, warning }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(e.to_string()),
        },
    }
}

fn read_config_file(path: &Path) -> Result<String, ToastError> {
    Ok(fs::read_to_string(path)?)
}

pub fn parse_config(content: &str) -> Result<Config, ToastError> {
    toml::from_str(content).map_err(|e| ToastError::InvalidConfig(e.message().to_string()))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
