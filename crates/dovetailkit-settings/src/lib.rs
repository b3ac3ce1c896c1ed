//! # DovetailKit Settings
//!
//! Read-only configuration for the DovetailKit front end: which unit label
//! to print, how many decimals to show, and the values pre-filled into the
//! layout form. Settings are loaded from a JSON or TOML file and never
//! written back.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, DisplaySettings, FieldDefaults, MAX_PRECISION};
pub use dovetailkit_core::units::MeasurementSystem;
pub use error::{ConfigError, SettingsError, SettingsResult};
