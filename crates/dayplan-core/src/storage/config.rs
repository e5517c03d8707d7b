//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Display names of the well-known categories ("Work", "Overtime")
//! - The default workday block applied by `default-work`
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

use super::data_dir;

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category name the default workday block is filed under.
    #[serde(default = "default_work_label")]
    pub work_label: String,
    /// Category name the legacy overtime accounting matches on.
    #[serde(default = "default_overtime_label")]
    pub overtime_label: String,
    /// Start of the default workday block, `HH:mm`.
    #[serde(default = "default_work_start")]
    pub default_work_start: String,
    /// End of the default workday block, `HH:mm`.
    #[serde(default = "default_work_end")]
    pub default_work_end: String,
}

fn default_work_label() -> String {
    "Work".to_string()
}
fn default_overtime_label() -> String {
    "Overtime".to_string()
}
fn default_work_start() -> String {
    "09:00".to_string()
}
fn default_work_end() -> String {
    "17:30".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_label: default_work_label(),
            overtime_label: default_overtime_label(),
            default_work_start: default_work_start(),
            default_work_end: default_work_end(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, or return defaults if the file is missing
    /// or unreadable.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load the configuration from disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let text = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, text).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}

/// Parse an `HH:mm` time into an (hour, minute) pair.
///
/// Hours up to 24 are accepted (24:00 is the end of the day).
pub fn parse_hhmm(text: &str) -> Option<(u32, u32)> {
    let (hour, minute) = text.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 24 || minute > 59 || (hour == 24 && minute != 0) {
        return None;
    }
    Some((hour, minute))
}
