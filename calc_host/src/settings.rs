//! Host settings
//!
//! Versioned JSON settings file holding the calculator configuration and the
//! host's display width. Missing fields fall back to defaults.

use std::fs;
use std::path::Path;

use calc_core::{CalculatorConfig, ConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ten digits plus sign and separator
pub const DEFAULT_DISPLAY_WIDTH: usize = 12;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid calculator configuration: {0}")]
    Invalid(#[from] ConfigError),

    #[error("Display width must be at least 1")]
    InvalidWidth,
}

/// Serializable host settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    pub calculator: CalculatorConfig,
    /// Characters the rendered display keeps
    pub display_width: usize,
}

impl HostSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    /// Parses and validates settings from JSON text
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: HostSettings = serde_json::from_str(text)?;

        // Check version compatibility
        if settings.version != Self::CURRENT_VERSION {
            return Err(SettingsError::UnsupportedVersion(settings.version));
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes settings to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.display_width == 0 {
            return Err(SettingsError::InvalidWidth);
        }
        self.calculator.validate()?;
        Ok(())
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            calculator: CalculatorConfig::default(),
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}
