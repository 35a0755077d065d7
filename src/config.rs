//! Configuration loading
//!
//! Reads `~/.config/aibubble/config.toml`. A missing file means defaults; a
//! malformed file also falls back to defaults but reports a warning.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{ClockStyle, Config, DisplayConfig, PersonaConfig};

const CONFIG_DIR: &str = "aibubble";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        log::debug!("No home directory, using default config");
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return ConfigResult::default();
        }
        Err(e) => {
            return with_warning(format!("Failed to read {}: {}", path.display(), e));
        }
    };

    match parse_config_toml(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => with_warning(format!("Invalid config {}: {}", path.display(), e)),
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

fn with_warning(warning: String) -> ConfigResult {
    log::warn!("{}", warning);
    ConfigResult {
        config: Config::default(),
        warning: Some(warning),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
