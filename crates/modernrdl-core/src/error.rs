//! Error handling for ModernRDL
//!
//! The unified error type used by the core and settings layers.
//! Project file errors live next to the codec in the designer crate.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A string did not name a known enum variant (page format, orientation, ...)
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// What was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A value is outside its valid range
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
