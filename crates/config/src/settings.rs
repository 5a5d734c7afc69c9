//! Configuration structures for winkit settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use winkit_logger::LogLevel;
use winkit_theme::{Color, LineThickness, StyleTheme};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default theme for controls without an explicit one
    #[serde(default)]
    pub theme: ThemeSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Default theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Foreground color name (White, DarkBlue, ...)
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Background color name
    #[serde(default = "default_background")]
    pub background: String,

    /// Border thickness (none, single, double)
    #[serde(default = "default_thickness")]
    pub thickness: String,

    /// 13-character style code; overrides the fields above when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ThemeSettings {
    /// Build the theme these settings describe.
    pub fn to_style_theme(&self) -> Result<StyleTheme> {
        if let Some(code) = &self.code {
            return StyleTheme::from_code(code)
                .with_context(|| format!("Invalid theme code '{}'", code));
        }

        let foreground: Color = self
            .foreground
            .parse()
            .context("Invalid theme foreground")?;
        let background: Color = self
            .background
            .parse()
            .context("Invalid theme background")?;
        let thickness: LineThickness = self
            .thickness
            .parse()
            .context("Invalid theme thickness")?;

        Ok(StyleTheme::from_colors_with_thickness(
            foreground, background, thickness,
        ))
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl LoggingSettings {
    /// Parsed minimum level, falling back to the default on bad input.
    pub fn level(&self) -> LogLevel {
        self.min_level
            .parse()
            .or_else(|_| defaults::MIN_LOG_LEVEL.parse())
            .unwrap_or(LogLevel::Info)
    }

    /// Configured log file, or `winkit.log` in the cache directory.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(crate::get_cache_dir()?.join("winkit.log")),
        }
    }
}

// Default value functions for serde
fn default_foreground() -> String {
    defaults::FOREGROUND.to_string()
}

fn default_background() -> String {
    defaults::BACKGROUND.to_string()
}

fn default_thickness() -> String {
    defaults::THICKNESS.to_string()
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: default_background(),
            thickness: default_thickness(),
            code: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
