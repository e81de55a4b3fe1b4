//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_COLOR_NAME};
use crate::export::ExportFormat;
use crate::generator::{builtin_presets, Preset};

/// Initial palette generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Offer the built-in presets when choosing initial colors
    #[serde(default = "default_true")]
    pub include_builtin_presets: bool,
    /// Extra presets defined by the user
    #[serde(default)]
    pub custom_presets: Vec<Preset>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_builtin_presets: true,
            custom_presets: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: ExportFormat,
    /// Name written into export headers and file names
    #[serde(default = "default_color_name")]
    pub color_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::default(),
            color_name: default_color_name(),
        }
    }
}

fn default_color_name() -> String {
    DEFAULT_COLOR_NAME.to_string()
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorGenerator/config.toml`
/// - macOS: `~/Library/Application Support/ColorGenerator/config.toml`
/// - Windows: `%APPDATA%\ColorGenerator\config.toml`
///
/// The `COLORGEN_CONFIG_DIR` environment variable overrides the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial palette generation
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
    /// Web server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `COLORGEN_CONFIG_DIR` wins when set; otherwise the platform config
    /// directory joined with `ColorGenerator`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Loads the config, falling back to defaults (with a warning) if the
    /// file is unreadable or invalid.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default configuration: {e:#}");
            Self::default()
        })
    }

    /// Parses and validates TOML configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let config_path = Self::config_file_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// - every custom preset has a non-empty name and valid colors
    /// - the export color name is not blank
    pub fn validate(&self) -> Result<()> {
        for preset in &self.generator.custom_presets {
            if preset.name.trim().is_empty() {
                anyhow::bail!("Custom preset names must not be empty");
            }
            preset
                .colors
                .validate()
                .context(format!("Custom preset '{}' is invalid", preset.name))?;
        }

        if self.export.color_name.trim().is_empty() {
            anyhow::bail!("Export color name must not be empty");
        }

        Ok(())
    }

    /// Presets available for initial selection: built-ins (when enabled)
    /// followed by custom presets.
    #[must_use]
    pub fn presets(&self) -> Vec<Preset> {
        let mut presets = if self.generator.include_builtin_presets {
            builtin_presets()
        } else {
            Vec::new()
        };
        presets.extend(self.generator.custom_presets.iter().cloned());
        presets
    }
}
