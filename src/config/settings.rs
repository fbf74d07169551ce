//! Configuration settings for chatterbox.
//!
//! Settings are loaded from `config.yaml` in the data directory, or the
//! file named by `--config`.

use serde::{Deserialize, Serialize};

use crate::core::{DateFormats, DateTimeParser};
use crate::error::ChatterboxError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Accepted date formats.
    pub dates: DatesConfig,
    /// Data file names.
    pub storage: StorageConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Name used in the greeting.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Date formats, as chrono strftime specifiers, tried in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatesConfig {
    /// Formats with a time of day.
    pub date_time_formats: Vec<String>,
    /// Date-only formats (midnight).
    pub date_only_formats: Vec<String>,
    /// Format for showing parsed dates.
    pub display_format: String,
}

/// Data file names, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Task list file.
    #[serde(default = "default_task_file")]
    pub task_file: String,
    /// Tag association file.
    #[serde(default = "default_tag_file")]
    pub tag_file: String,
}

// Default value functions for serde
const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_bot_name() -> String {
    "Chatterbox".to_string()
}

fn default_task_file() -> String {
    "tasks.txt".to_string()
}

fn default_tag_file() -> String {
    "tags.yaml".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            bot_name: default_bot_name(),
        }
    }
}

impl Default for DatesConfig {
    fn default() -> Self {
        let formats = DateFormats::default();
        Self {
            date_time_formats: formats.date_time,
            date_only_formats: formats.date_only,
            display_format: formats.display,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            task_file: default_task_file(),
            tag_file: default_tag_file(),
        }
    }
}

impl ColorSetting {
    /// Apply this setting to `colored` for the rest of the process.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl DatesConfig {
    /// Build the date parser these settings describe.
    #[must_use]
    pub fn parser(&self) -> DateTimeParser {
        DateTimeParser::new(DateFormats {
            date_time: self.date_time_formats.clone(),
            date_only: self.date_only_formats.clone(),
            display: self.display_format.clone(),
        })
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ChatterboxError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChatterboxError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            ChatterboxError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
