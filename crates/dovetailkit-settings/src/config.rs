//! Configuration for DovetailKit
//!
//! Configuration is organized into two sections:
//! - Display preferences (unit label, decimal places)
//! - Field defaults pre-filled into the layout form
//!
//! Every key is optional; missing keys fall back to the built-in defaults.

use crate::error::{ConfigError, SettingsError, SettingsResult};
pub use dovetailkit_core::units::MeasurementSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Most decimal places accepted for displayed values
pub const MAX_PRECISION: usize = 6;

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Unit label printed next to lengths
    pub unit: MeasurementSystem,
    /// Decimal places for tail widths and cut marks
    pub precision: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unit: MeasurementSystem::Metric,
            precision: 1,
        }
    }
}

/// Values pre-filled into the layout form.
///
/// The board length has no default and must always be given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub depth: f64,
    pub pin: f64,
    pub left_offset: f64,
    pub right_offset: f64,
    pub slope: f64,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            depth: 18.0,
            pin: 19.0,
            left_offset: 10.0,
            right_offset: 10.0,
            slope: 6.0,
        }
    }
}

impl FieldDefaults {
    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("depth", self.depth),
            ("pin", self.pin),
            ("left_offset", self.left_offset),
            ("right_offset", self.right_offset),
            ("slope", self.slope),
        ]
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Display preferences
    pub display: DisplaySettings,
    /// Layout form defaults
    pub defaults: FieldDefaults,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    /// Load the per-user config file when one exists, defaults otherwise
    pub fn load_or_default() -> SettingsResult<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.display.precision > MAX_PRECISION {
            return Err(SettingsError::InvalidSetting {
                key: "display.precision".to_string(),
                reason: format!("must be at most {}", MAX_PRECISION),
            });
        }

        for (name, value) in self.defaults.entries() {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("defaults.{}", name),
                    value: value.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Location of the per-user config file, e.g. `~/.config/dovetailkit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dovetailkit").join("config.toml"))
}
