//! Configuration file loading
//!
//! Reads `~/.config/promptdeck/config.toml`. A missing file means defaults;
//! an unreadable or invalid file also means defaults, plus a warning for the
//! UI to show.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{ApiConfig, ChatConfig, ClipboardBackend, Config, SuggestConfig, UiConfig};

const CONFIG_DIR: &str = "promptdeck";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and an optional warning about the file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_config_from_path(path),
        None => match default_config_path() {
            Some(path) => load_config_from_path(&path),
            None => ConfigResult {
                config: Config::default(),
                warning: None,
            },
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config {}, using defaults", path.display())),
            }
        }
    }
}
