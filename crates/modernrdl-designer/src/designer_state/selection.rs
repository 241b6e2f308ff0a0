//! Selection and in-place text editing for designer state.
//!
//! Selecting and entering edit mode overwrite the visible snapshot instead
//! of adding undo steps. Committed text is a regular undo step.

use modernrdl_core::Point;

use super::DesignerState;
use crate::model::Item;
use crate::text_overlay::{EditOutcome, SceneGraph, TextEditSession};

impl DesignerState {
    /// Selects an item, or clears the selection with `None`.
    pub fn select_item(&mut self, id: Option<&str>) -> bool {
        let doc = self.document();
        if doc.selected_id.as_deref() == id {
            return false;
        }
        if let Some(id) = id {
            if !doc.contains(id) {
                tracing::warn!("Selection ignored: no item {}", id);
                return false;
            }
        }

        let mut doc = self.working_copy();
        doc.selected_id = id.map(str::to_string);
        self.overwrite(doc, "Select");
        true
    }

    /// Enters text-edit mode on a textbox (which also becomes the
    /// selection), or leaves it with `None`.
    pub fn start_editing(&mut self, id: Option<&str>) -> bool {
        let mut doc = self.working_copy();
        match id {
            Some(id) => {
                match doc.item(id) {
                    Some(Item::Textbox(_)) => {}
                    Some(_) => {
                        tracing::debug!("Item {} has no editable text", id);
                        return false;
                    }
                    None => {
                        tracing::warn!("Edit ignored: no item {}", id);
                        return false;
                    }
                }
                doc.editing_item_id = Some(id.to_string());
                doc.selected_id = Some(id.to_string());
            }
            None => doc.editing_item_id = None,
        }

        self.overwrite(doc, "Start editing");
        true
    }

    /// Leaves text-edit mode.
    ///
    /// With `Some(text)` the text is written into the edited textbox as an
    /// undo step. The visible entry is first overwritten with edit mode
    /// cleared, so undoing restores the old text without reopening the
    /// overlay. With `None` edit mode is cleared and nothing else changes.
    pub fn finish_editing(&mut self, text: Option<String>) -> bool {
        let Some(editing_id) = self.document().editing_item_id.clone() else {
            return false;
        };

        let mut closed = self.working_copy();
        closed.editing_item_id = None;

        let Some(text) = text else {
            self.overwrite(closed, "Cancel editing");
            return true;
        };

        let mut doc = closed.clone();
        match doc.item_mut(&editing_id) {
            Some(Item::Textbox(textbox)) => {
                textbox.text = text;
            }
            _ => {
                tracing::warn!("Edited item {} is gone or not a textbox", editing_id);
                self.overwrite(closed, "Finish editing");
                return false;
            }
        }

        self.overwrite(closed, "Finish editing");
        self.commit(doc, "Edit text");
        true
    }

    /// Applies the outcome reported by the overlay.
    pub fn apply_edit_outcome(&mut self, outcome: EditOutcome) -> bool {
        self.finish_editing(outcome.into_text())
    }

    /// Opens an overlay for the item being edited, if it is a textbox.
    pub fn open_text_editor(
        &self,
        scene: &impl SceneGraph,
        container_origin: Point,
    ) -> Option<TextEditSession> {
        TextEditSession::begin(
            self.document(),
            scene,
            &self.viewport,
            container_origin,
            self.options.overlay,
        )
    }
}
