//! Document model.
//!
//! The canonical, serializable representation of a design. Items form a
//! closed sum type discriminated by the `type` field on the wire; every
//! mutator matches on the variant rather than probing for fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use modernrdl_core::{Bounds, Point, Size};

mod document;
mod page;
mod table;
mod textbox;

pub use document::Document;
pub use page::{Page, PageSettingsPatch};
pub use table::Table;
pub use textbox::Textbox;

/// Vertical zone of the page an item was dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    #[default]
    Body,
    Footer,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Body => write!(f, "body"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// Kind of item a palette tool creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Textbox,
    Table,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Textbox => write!(f, "textbox"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "textbox" => Ok(Self::Textbox),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown tool kind: {}", s)),
        }
    }
}

/// Generates a new opaque item id.
pub fn generate_item_id() -> String {
    format!("item_{}", uuid::Uuid::new_v4().simple())
}

/// Partial geometry update coming from a drag or transform gesture.
///
/// Unset fields are left untouched. Fields that do not exist on a variant
/// are folded into the ones that do (tables have no scale, so scaling a
/// table resizes its rows and columns).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformAttrs {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl TransformAttrs {
    /// Attributes reported by the scene graph when a transform gesture ends.
    pub fn transform_end(x: f64, y: f64, rotation: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            rotation: Some(rotation),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = Some(scale_x);
        self.scale_y = Some(scale_y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A shape placed on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Textbox(Textbox),
    Table(Table),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Textbox(t) => &t.id,
            Item::Table(t) => &t.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Textbox(_) => ItemKind::Textbox,
            Item::Table(_) => ItemKind::Table,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Item::Textbox(t) => Point::new(t.x, t.y),
            Item::Table(t) => Point::new(t.x, t.y),
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        match self {
            Item::Textbox(t) => {
                t.x = x;
                t.y = y;
            }
            Item::Table(t) => {
                t.x = x;
                t.y = y;
            }
        }
    }

    pub fn rotation(&self) -> f64 {
        match self {
            Item::Textbox(t) => t.rotation,
            Item::Table(t) => t.rotation,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Item::Textbox(t) => t.section,
            Item::Table(t) => t.section,
        }
    }

    pub fn set_section(&mut self, section: Section) {
        match self {
            Item::Textbox(t) => t.section = section,
            Item::Table(t) => t.section = section,
        }
    }

    /// On-page size with scale applied.
    pub fn effective_size(&self) -> Size {
        match self {
            Item::Textbox(t) => t.effective_size(),
            Item::Table(t) => Size::new(t.width, t.height),
        }
    }

    /// Axis-aligned bounding box in document space, rotation included.
    pub fn bounds(&self) -> Bounds {
        let p = self.position();
        let size = self.effective_size();
        Bounds::of_rotated_rect(p.x, p.y, size.width, size.height, self.rotation())
    }

    pub fn apply_transform(&mut self, attrs: &TransformAttrs) {
        match self {
            Item::Textbox(t) => t.apply_transform(attrs),
            Item::Table(t) => t.apply_transform(attrs),
        }
    }

    pub fn as_textbox(&self) -> Option<&Textbox> {
        match self {
            Item::Textbox(t) => Some(t),
            Item::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Item::Table(t) => Some(t),
            Item::Textbox(_) => None,
        }
    }
}

impl From<Textbox> for Item {
    fn from(t: Textbox) -> Self {
        Item::Textbox(t)
    }
}

impl From<Table> for Item {
    fn from(t: Table) -> Self {
        Item::Table(t)
    }
}
