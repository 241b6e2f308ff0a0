//! Error types for the settings crate.
//!
//! Load and save failures carry the configuration path so the caller can
//! report which file was ignored.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from locating, loading or saving the configuration file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file exists but could not be read, parsed or validated.
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: modernrdl_core::Error,
    },

    /// The configuration is invalid or the file could not be written.
    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: modernrdl_core::Error,
    },

    /// The directory holding the file could not be created.
    #[error("Cannot create config directory {}: {source}", .path.display())]
    ConfigDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SettingsError {
    /// Path of the file or directory involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Load { path, .. }
            | Self::Save { path, .. }
            | Self::ConfigDirectory { path, .. }
            | Self::Config(ConfigError::UnsupportedFormat { path }) => Some(path.as_path()),
            Self::Config(ConfigError::NoConfigDir { .. }) => None,
        }
    }
}

/// Errors resolving where and how the configuration is stored.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Only `.toml` and `.json` files are understood.
    #[error("Unsupported config format: {} (expected .toml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The platform has no per-user configuration directory.
    #[error("No configuration directory on {os}")]
    NoConfigDir { os: &'static str },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
