//! Designer state manager for UI integration.
//!
//! Owns the snapshot history of the [`Document`] and the [`Viewport`], and
//! turns user gestures into history transitions. Every mutation clones the
//! current snapshot, edits the clone and commits it; snapshots already in
//! the history are never touched.
//!
//! This module is split into submodules:
//! - `items`: Palette drops, move, transform, delete, replace
//! - `selection`: Selection and text editing
//! - `page`: Page settings and viewport gestures
//! - `file_io`: Save/load operations

mod file_io;
mod items;
mod page;
mod selection;

use modernrdl_core::Size;

use crate::history::History;
use crate::model::{Document, ItemKind, Page};
use crate::options::EditorOptions;
use crate::shortcuts::{resolve_shortcut, EditorAction, KeyChord};
use crate::viewport::Viewport;

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    history: History<Document>,
    viewport: Viewport,
    options: EditorOptions,
    /// Tool picked up from the palette and not yet dropped
    active_tool: Option<ItemKind>,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a designer with default options and an empty page fitted
    /// into a container of the given size.
    pub fn new(container: Size) -> Self {
        Self::with_options(EditorOptions::default(), container)
    }

    pub fn with_options(options: EditorOptions, container: Size) -> Self {
        let doc = Document::new(Page::from(&options.page));
        let viewport =
            Viewport::new(container.width, container.height).with_zoom_step(options.zoom_step);

        let mut state = Self {
            history: History::with_limit(doc, options.history_limit),
            viewport,
            options,
            active_tool: None,
            current_file_path: None,
            is_modified: false,
        };
        state.fit_to_page();
        state
    }

    /// The visible snapshot.
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn active_tool(&self) -> Option<ItemKind> {
        self.active_tool
    }

    /// True while a textbox overlay is open.
    pub fn is_text_editing(&self) -> bool {
        self.document().editing_item_id.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Steps back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.is_modified = true;
        tracing::debug!(
            "Undo: cursor {} of {}",
            self.history.cursor(),
            self.history.len()
        );
        true
    }

    /// Steps forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.is_modified = true;
        tracing::debug!(
            "Redo: cursor {} of {}",
            self.history.cursor(),
            self.history.len()
        );
        true
    }

    /// Applies a global keyboard shortcut. Returns the action taken, if any.
    pub fn handle_shortcut(&mut self, chord: &KeyChord) -> Option<EditorAction> {
        let action = resolve_shortcut(chord, self.is_text_editing())?;
        match action {
            EditorAction::DeleteSelected => {
                self.delete_selected();
            }
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
        }
        Some(action)
    }

    /// File stem of the current file, or "Untitled".
    pub fn design_name(&self) -> String {
        self.current_file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Title-bar name: file name or "Untitled", with `*` when modified.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());

        if self.is_modified {
            format!("{}*", name)
        } else {
            name
        }
    }

    /// Appends `doc` as a new undo step.
    fn commit(&mut self, doc: Document, action: &str) {
        self.history.commit(doc);
        self.is_modified = true;
        tracing::debug!(
            "{}: committed entry {} of {}",
            action,
            self.history.cursor(),
            self.history.len()
        );
    }

    /// Replaces the visible snapshot without creating an undo step.
    fn overwrite(&mut self, doc: Document, action: &str) {
        self.history.overwrite(doc);
        tracing::debug!("{}: overwrote entry {}", action, self.history.cursor());
    }

    /// Clone of the visible snapshot, to be edited and committed.
    fn working_copy(&self) -> Document {
        self.history.current().clone()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(Viewport::default().container_size())
    }
}
