//! ModernRDL Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, EditorSettings, ItemDefaultSettings, PageSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
