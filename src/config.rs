//! Configuration management for jenks.
//!
//! Configuration is optional: the library is fully usable with
//! [`Config::default`]. A JSON file can override the defaults, with
//! `validate` checking the result before use.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{JenksError, Result};
use crate::methods::Method;
use crate::palette::PALETTE_NAMES;

/// Classification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Number of classes to break values into
    #[serde(default = "default_classes")]
    pub classes: usize,

    /// Default classification method
    #[serde(default)]
    pub method: Method,

    /// Name of the built-in palette to color classes with
    #[serde(default = "default_palette")]
    pub palette: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Classification configuration
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate class count (the engine needs at least 2 classes)
        if self.classification.classes < 2 {
            return Err(JenksError::Config {
                message: format!(
                    "Class count must be at least 2, got {}",
                    self.classification.classes
                ),
            });
        }

        // Validate palette name
        if !PALETTE_NAMES.contains(&self.classification.palette.to_lowercase().as_str()) {
            return Err(JenksError::Config {
                message: format!(
                    "Unknown palette: {}. Must be one of: {}",
                    self.classification.palette,
                    PALETTE_NAMES.join(", ")
                ),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(JenksError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classification: ClassificationConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            classes: default_classes(),
            method: Method::default(),
            palette: default_palette(),
        }
    }
}

// Default value functions for serde
fn default_classes() -> usize {
    5
}

fn default_palette() -> String {
    "blue".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
