//! Item operations (drop, move, transform, replace, delete) for designer state.

use modernrdl_core::Point;

use super::DesignerState;
use crate::model::{generate_item_id, Item, ItemKind, Section, Table, Textbox, TransformAttrs};

impl DesignerState {
    /// A palette drag started. Unknown tool ids (e.g. "image") leave no
    /// active tool, so the following drop does nothing.
    pub fn begin_tool_drag(&mut self, tool_id: &str) -> bool {
        match tool_id.parse::<ItemKind>() {
            Ok(kind) => {
                self.active_tool = Some(kind);
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.active_tool = None;
                false
            }
        }
    }

    pub fn cancel_tool_drag(&mut self) {
        self.active_tool = None;
    }

    /// Drops the active tool at a container-relative pointer position.
    ///
    /// Returns the new item's id, or `None` when there is no active tool or
    /// the pointer position could not be resolved.
    pub fn drop_at(&mut self, pointer: Option<Point>) -> Option<String> {
        let Some(kind) = self.active_tool.take() else {
            tracing::debug!("Drop ignored: no active tool");
            return None;
        };
        let Some(pointer) = pointer else {
            tracing::debug!("Drop ignored: pointer position unavailable");
            return None;
        };

        let at = self.viewport.screen_to_document(pointer);
        Some(self.add_item(kind, at))
    }

    /// Creates an item of `kind` at a document-space position, selects it
    /// and commits. The section follows the drop height.
    pub fn add_item(&mut self, kind: ItemKind, at: Point) -> String {
        let mut doc = self.working_copy();
        let id = generate_item_id();
        let section = doc.page.section_at(at.y);
        let defaults = &self.options.items;

        let item = match kind {
            ItemKind::Textbox => {
                Item::Textbox(Textbox::from_defaults(id.clone(), at, section, defaults))
            }
            ItemKind::Table => Item::Table(Table::from_defaults(id.clone(), at, section, defaults)),
        };

        doc.items.push(item);
        doc.selected_id = Some(id.clone());
        doc.editing_item_id = None;
        self.commit(doc, &format!("Add {} in {}", kind, section));
        id
    }

    /// Moves an item's anchor. Used at the end of a drag.
    pub fn move_item(&mut self, id: &str, x: f64, y: f64) -> bool {
        let mut doc = self.working_copy();
        let Some(item) = doc.item_mut(id) else {
            tracing::warn!("Move ignored: no item {}", id);
            return false;
        };

        item.set_position(x, y);
        self.commit(doc, "Move item");
        true
    }

    /// Merges geometry from a transform gesture into an item.
    pub fn transform_item(&mut self, id: &str, attrs: &TransformAttrs) -> bool {
        if attrs.is_empty() {
            return false;
        }

        let mut doc = self.working_copy();
        let Some(item) = doc.item_mut(id) else {
            tracing::warn!("Transform ignored: no item {}", id);
            return false;
        };

        item.apply_transform(attrs);
        self.commit(doc, "Transform item");
        true
    }

    /// Replaces the item with the same id, as sent by the properties panel.
    pub fn change_item(&mut self, mut updated: Item) -> bool {
        let mut doc = self.working_copy();
        let Some(slot) = doc.item_mut(updated.id()) else {
            tracing::warn!("Change ignored: no item {}", updated.id());
            return false;
        };

        if let Item::Table(table) = &mut updated {
            if table.normalize() {
                tracing::debug!("Repaired table {} on change", table.id);
            }
        }
        *slot = updated;
        self.commit(doc, "Change item");
        true
    }

    /// Moves an item to another section without changing its position.
    pub fn set_item_section(&mut self, id: &str, section: Section) -> bool {
        let mut doc = self.working_copy();
        let Some(item) = doc.item_mut(id) else {
            tracing::warn!("Section change ignored: no item {}", id);
            return false;
        };
        if item.section() == section {
            return false;
        }

        item.set_section(section);
        self.commit(doc, "Set section");
        true
    }

    /// Removes the selected item and clears selection and editing.
    pub fn delete_selected(&mut self) -> bool {
        let mut doc = self.working_copy();
        let Some(selected) = doc.selected_id.take() else {
            return false;
        };

        doc.items.retain(|item| item.id() != selected);
        doc.editing_item_id = None;
        self.commit(doc, "Delete item");
        true
    }

    /// Drag-bound function for an item node.
    ///
    /// `proposed` is the absolute (container-relative) position the drag
    /// wants; the result keeps the item's rotated box on the page. Unknown
    /// ids pass through unchanged.
    pub fn drag_bound_for(&self, id: &str, proposed: Point) -> Point {
        let doc = self.document();
        let Some(item) = doc.item(id) else {
            return proposed;
        };

        let anchor = self.viewport.document_to_screen(item.position());
        self.viewport
            .clamp_item_to_page(doc.page.size(), &item.bounds(), anchor, proposed)
    }
}
