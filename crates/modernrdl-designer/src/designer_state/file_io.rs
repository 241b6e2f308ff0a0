//! File I/O operations (save, load, new) for designer state.
//!
//! A successful load replaces the whole history with the loaded document.
//! A failed load leaves the document and history exactly as they were.

use std::path::Path;

use super::DesignerState;
use crate::error::ProjectResult;
use crate::model::{Document, Page};
use crate::serialization;

impl DesignerState {
    /// Serializes the visible document.
    pub fn save_to_string(&self) -> ProjectResult<String> {
        serialization::to_json(self.document())
    }

    /// Loads a project from JSON text.
    pub fn load_from_str(&mut self, text: &str) -> ProjectResult<()> {
        let doc = serialization::from_json(text).inspect_err(|e| {
            tracing::warn!("Rejected project: {}", e);
        })?;
        self.replace_document(doc);
        Ok(())
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> ProjectResult<()> {
        let path = path.as_ref();
        serialization::save_to_file(self.document(), path)?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!(
            "Saved {} ({} items)",
            path.display(),
            self.document().items.len()
        );
        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> ProjectResult<()> {
        let path = path.as_ref();
        let doc = serialization::load_from_file(path).inspect_err(|e| {
            tracing::warn!("Failed to load {}: {}", path.display(), e);
        })?;

        self.replace_document(doc);
        self.current_file_path = Some(path.to_path_buf());
        tracing::info!(
            "Loaded {} ({} items)",
            path.display(),
            self.document().items.len()
        );
        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.replace_document(Document::new(Page::from(&self.options.page)));
        self.current_file_path = None;
    }

    fn replace_document(&mut self, doc: Document) {
        self.history.reset(doc);
        self.active_tool = None;
        self.is_modified = false;
        self.viewport.reset();
        self.fit_to_page();
    }
}
