//! Project file codec.
//!
//! A project file is the literal current [`Document`] as pretty-printed
//! UTF-8 JSON, so reloading restores selection and edit state as well as
//! items and page settings.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;

use modernrdl_core::constants::PROJECT_EXTENSION;

use crate::error::{ProjectError, ProjectResult};
use crate::model::{Document, Item};

/// Top-level keys a project file must carry. `editingItemId` is optional.
pub const REQUIRED_KEYS: [&str; 3] = ["items", "selectedId", "page"];

/// Serializes a document to the project format.
pub fn to_json(doc: &Document) -> ProjectResult<String> {
    serde_json::to_string_pretty(doc).map_err(ProjectError::Serialize)
}

/// Parses and validates a project file.
///
/// Tables whose counts disagree with their extents or cells are rejected.
/// Derived data (page dimensions, zone heights, table sums) is repaired
/// after parsing.
pub fn from_json(text: &str) -> ProjectResult<Document> {
    let value: Value = serde_json::from_str(text).map_err(ProjectError::Parse)?;

    let obj = value.as_object().ok_or(ProjectError::NotAnObject)?;
    for key in REQUIRED_KEYS {
        if !obj.contains_key(key) {
            return Err(ProjectError::MissingKey(key));
        }
    }

    let mut doc: Document = serde_json::from_value(value).map_err(ProjectError::Schema)?;
    for table in doc.items.iter().filter_map(Item::as_table) {
        if let Some(reason) = table.shape_mismatch() {
            return Err(ProjectError::InvalidTable {
                id: table.id.clone(),
                reason,
            });
        }
    }
    if doc.normalize() {
        tracing::debug!("Repaired derived data in loaded project");
    }
    Ok(doc)
}

/// Writes a project file atomically.
///
/// The JSON goes to a temporary file in the target directory which is only
/// renamed over `path` once fully written.
pub fn save_to_file(doc: &Document, path: impl AsRef<Path>) -> ProjectResult<()> {
    let path = path.as_ref();
    let json = to_json(doc)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ProjectError::Io(e.error))?;

    Ok(())
}

/// Reads a project file. Paths without the project extension are rejected
/// before touching the filesystem.
pub fn load_from_file(path: impl AsRef<Path>) -> ProjectResult<Document> {
    let path = path.as_ref();
    check_extension(path)?;
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

/// Fails unless `path` ends in `.mrdl` (case-insensitive).
pub fn check_extension(path: &Path) -> ProjectResult<()> {
    let ok = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION));
    if ok {
        Ok(())
    } else {
        Err(ProjectError::InvalidExtension {
            path: path.display().to_string(),
            expected: PROJECT_EXTENSION,
        })
    }
}

/// Suggested name for an exported project: `project-<unix ms>.mrdl`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("project-{}.{}", now.timestamp_millis(), PROJECT_EXTENSION)
}
