//! Errors raised while reading or writing project files.

use thiserror::Error;

/// Project file error
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The input is not JSON at all
    #[error("Invalid project file: {0}")]
    Parse(#[source] serde_json::Error),

    /// The top-level JSON value is not an object
    #[error("Invalid project file: expected a JSON object")]
    NotAnObject,

    /// One of the required top-level keys is absent
    #[error("Invalid project file: missing '{0}'")]
    MissingKey(&'static str),

    /// The JSON is well formed but does not describe a document
    #[error("Invalid project file: {0}")]
    Schema(#[source] serde_json::Error),

    /// A table's counts disagree with its extents or cells
    #[error("Invalid project file: table '{id}': {reason}")]
    InvalidTable { id: String, reason: String },

    #[error("Failed to serialize project: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Only files with the project extension are accepted
    #[error("Not a project file: {path} (expected .{expected})")]
    InvalidExtension { path: String, expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectError {
    /// True for errors caused by the file's content rather than by the filesystem.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::NotAnObject
                | Self::MissingKey(_)
                | Self::Schema(_)
                | Self::InvalidTable { .. }
        )
    }
}

pub type ProjectResult<T> = std::result::Result<T, ProjectError>;
