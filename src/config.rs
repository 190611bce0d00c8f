//! Configuration management for timekit
//!
//! This module handles loading, parsing, and validation of configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::datetime::{DEFAULT_DELAY_THRESHOLD_SECS, LOCAL_DATETIME_FORMAT};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub humanize: HumanizeConfig,
    pub report: ReportConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum severity that reaches the sink ("trace" through "error")
    pub level: String,
}

/// Humanized-delay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanizeConfig {
    /// Elapsed seconds beyond which an instant gets a relative phrase
    pub threshold_seconds: u64,
}

/// Error-report formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Apply path redactions to backtrace frames
    pub brief: bool,
    /// Head/tail frame count kept when truncating
    pub shownums: usize,
    /// Keep every frame instead of truncating
    pub show_all: bool,
    /// Path redaction pairs applied when `brief` is set
    pub redactions: Vec<Redaction>,
}

/// A single path redaction pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redaction {
    pub from: String,
    pub to: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        Self {
            threshold_seconds: DEFAULT_DELAY_THRESHOLD_SECS,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            brief: false,
            shownums: 3,
            show_all: true,
            redactions: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("timekit.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("timekit").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!(
                "Invalid logging level '{}': expected trace, debug, info, warn, error or off",
                self.logging.level
            );
        }

        if self.humanize.threshold_seconds > 86_400 {
            anyhow::bail!("humanize.threshold_seconds cannot exceed 86400 (24 hours)");
        }

        if self.report.shownums == 0 {
            anyhow::bail!("report.shownums must be at least 1");
        }

        for redaction in &self.report.redactions {
            if redaction.from.is_empty() {
                anyhow::bail!("report.redactions entries must have a non-empty 'from'");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Timekit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(LOCAL_DATETIME_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("timekit"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
