use serde::{Deserialize, Serialize};

use super::{Item, Page};

/// The unit placed under history.
///
/// Item order is z-order: later items render on top.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub items: Vec<Item>,
    pub selected_id: Option<String>,
    #[serde(default)]
    pub editing_item_id: Option<String>,
    pub page: Page,
}

impl Document {
    pub fn new(page: Page) -> Self {
        Self {
            items: Vec::new(),
            selected_id: None,
            editing_item_id: None,
            page,
        }
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_id.as_deref().and_then(|id| self.item(id))
    }

    pub fn editing_item(&self) -> Option<&Item> {
        self.editing_item_id.as_deref().and_then(|id| self.item(id))
    }

    /// Repairs derived data after deserialization: page dimensions, zone
    /// heights and table sums. Returns true when anything had to change.
    pub fn normalize(&mut self) -> bool {
        let mut changed = self.page.repair();
        for item in &mut self.items {
            if let Item::Table(table) = item {
                changed |= table.normalize();
            }
        }
        changed
    }
}
