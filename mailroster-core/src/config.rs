//! Configuration management
//!
//! Optional `settings.json` in the mailroster directory:
//! ```json
//! {
//!   "display": { "clearScreen": true, "color": true }
//! }
//! ```
//! A missing or unparsable file means defaults. Environment variables win over
//! the file; command-line flags win over both (applied by the binary).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::result::Result;

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplaySettings {
    #[serde(default = "default_true")]
    clear_screen: bool,
    #[serde(default = "default_true")]
    color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Parse a boolean-ish environment value
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}

/// Mailroster configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Clear the terminal before each screen
    pub clear_screen: bool,
    /// Use colored output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
        }
    }
}

impl Config {
    /// Directory holding settings.json
    ///
    /// `MAILROSTER_DIR` if set, otherwise `~/.mailroster`.
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("MAILROSTER_DIR") {
            return Some(PathBuf::from(dir));
        }
        dirs::home_dir().map(|home| home.join(".mailroster"))
    }

    /// Load config from a directory, applying process environment overrides
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, |key| std::env::var(key).ok())
    }

    /// Load config from a directory with an explicit environment lookup
    ///
    /// Overrides:
    /// - `MAILROSTER_CLEAR_SCREEN`: true/false
    /// - `MAILROSTER_COLOR`: true/false
    /// - `NO_COLOR`: any non-empty value disables color
    pub fn load_with_env(dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let settings_path = dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            match serde_json::from_str(&content) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(path = %settings_path.display(), error = %e, "ignoring malformed settings file");
                    SettingsFile::default()
                }
            }
        } else {
            SettingsFile::default()
        };

        let mut config = Self {
            clear_screen: raw.display.clear_screen,
            color: raw.display.color,
        };

        if let Some(flag) = env("MAILROSTER_CLEAR_SCREEN").as_deref().and_then(parse_flag) {
            config.clear_screen = flag;
        }
        if let Some(flag) = env("MAILROSTER_COLOR").as_deref().and_then(parse_flag) {
            config.color = flag;
        }
        if env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }
}
