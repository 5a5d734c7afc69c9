//! Configuration management for winkit.
//!
//! Loads and saves a TOML config file in the XDG config directory.

mod settings;
mod xdg;

pub use settings::{Config, LoggingSettings, ThemeSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const FOREGROUND: &str = "White";
    pub const BACKGROUND: &str = "Black";
    pub const THICKNESS: &str = "Single";
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Creates the file with defaults if it does not exist and rewrites it
    /// when missing keys were filled in.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Validate config content, including the theme it selects.
    pub fn validate_content(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?;
        config.theme.to_style_theme()?;
        Ok(config)
    }
}
