//! Persisted user preferences
//!
//! Settings the user changes from inside the app (theme, API key) live in
//! `~/.config/promptdeck/prefs.toml`, separate from the hand-edited config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PromptdeckError;
use crate::theme::ThemeKind;

const PREFS_DIR: &str = "promptdeck";
const PREFS_FILE: &str = "prefs.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(PREFS_DIR).join(PREFS_FILE))
}

/// Loaded preferences and an optional warning about the file
#[derive(Debug)]
pub struct PrefsResult {
    pub prefs: Prefs,
    pub warning: Option<String>,
}

/// Load preferences, falling back to empty ones on any problem
///
/// A missing file is not a problem; an unreadable or invalid one yields a
/// warning for the UI to show.
pub fn load_prefs(path: &Path) -> PrefsResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return PrefsResult {
                prefs: Prefs::default(),
                warning: None,
            };
        }
        Err(e) => {
            log::warn!("Could not read preferences {}: {}", path.display(), e);
            return PrefsResult {
                prefs: Prefs::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match toml::from_str(&contents) {
        Ok(prefs) => PrefsResult {
            prefs,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring invalid preferences {}: {}", path.display(), e);
            PrefsResult {
                prefs: Prefs::default(),
                warning: Some(format!(
                    "Invalid preferences {}, using defaults",
                    path.display()
                )),
            }
        }
    }
}

/// Write preferences, creating the parent directory if needed
pub fn save_prefs(path: &Path, prefs: &Prefs) -> Result<(), PromptdeckError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents =
        toml::to_string(prefs).map_err(|e| PromptdeckError::Preferences(e.to_string()))?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod prefs_tests;
