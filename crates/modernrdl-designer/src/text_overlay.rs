//! In-place text editing overlay.
//!
//! While a textbox is being edited, a plain text input is laid over the
//! rendered node. The overlay rectangle is a pure function of the node's
//! transform and the viewport, and is recomputed whenever either changes.
//! The draft text stays local to the [`TextEditSession`] until the edit is
//! committed or cancelled.

use modernrdl_core::Point;

use crate::model::{Document, Item};
use crate::options::OverlayStyle;
use crate::shortcuts::{Key, KeyChord};
use crate::viewport::Viewport;

/// Transform of one rendered node, in document space.
///
/// `width` / `height` are unscaled; the rendered size is `width * scale_x`
/// by `height * scale_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Read access to the render surface.
pub trait SceneGraph {
    /// Transform of the node rendering item `id`, if one exists.
    fn node_transform(&self, id: &str) -> Option<NodeTransform>;
}

/// Scene graph that reads transforms straight from a document.
///
/// Used when no renderer is attached (tests, command-line tools).
#[derive(Debug, Clone, Copy)]
pub struct DocumentScene<'a> {
    doc: &'a Document,
}

impl<'a> DocumentScene<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }
}

impl SceneGraph for DocumentScene<'_> {
    fn node_transform(&self, id: &str) -> Option<NodeTransform> {
        let transform = match self.doc.item(id)? {
            Item::Textbox(t) => NodeTransform {
                x: t.x,
                y: t.y,
                rotation: t.rotation,
                scale_x: t.scale_x,
                scale_y: t.scale_y,
                width: t.width,
                height: t.height,
            },
            Item::Table(t) => NodeTransform {
                x: t.x,
                y: t.y,
                rotation: t.rotation,
                scale_x: 1.0,
                scale_y: 1.0,
                width: t.width,
                height: t.height,
            },
        };
        Some(transform)
    }
}

/// Placement and styling of the overlay input, in page (window) pixels.
///
/// The overlay rotates about its top-left corner, like the node it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees
    pub rotation: f64,
    pub font_size: f64,
    pub padding: f64,
    pub line_height: f64,
}

impl OverlayRect {
    /// CSS `transform` value; pair with `transform-origin: left top`.
    pub fn css_transform(&self) -> String {
        format!("rotate({}deg)", self.rotation)
    }
}

/// Computes where the overlay goes.
///
/// `container_origin` is the position of the drawing surface inside the
/// window. Size and font size follow both the node scale and the viewport
/// scale so the overlay covers exactly what is rendered.
pub fn overlay_rect(
    node: &NodeTransform,
    viewport: &Viewport,
    container_origin: Point,
    style: &OverlayStyle,
) -> OverlayRect {
    let scale = viewport.scale();
    let screen = viewport.document_to_screen(Point::new(node.x, node.y));

    OverlayRect {
        left: container_origin.x + screen.x,
        top: container_origin.y + screen.y,
        width: node.width * node.scale_x * scale,
        height: node.height * node.scale_y * scale,
        rotation: node.rotation,
        font_size: style.base_font_size * node.scale_y * scale,
        padding: style.padding,
        line_height: style.line_height,
    }
}

/// How an editing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Keep the draft
    Commit(String),
    /// Discard the draft
    Cancel,
}

impl EditOutcome {
    /// The text to hand to `finish_editing`.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Commit(text) => Some(text),
            Self::Cancel => None,
        }
    }
}

/// An open overlay over the textbox being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEditSession {
    item_id: String,
    draft: String,
    overlay: OverlayRect,
    container_origin: Point,
    style: OverlayStyle,
}

impl TextEditSession {
    /// Opens an overlay for the document's editing item.
    ///
    /// Returns `None` when nothing is being edited, the editing item is not
    /// a textbox, or the scene has no node for it.
    pub fn begin(
        doc: &Document,
        scene: &impl SceneGraph,
        viewport: &Viewport,
        container_origin: Point,
        style: OverlayStyle,
    ) -> Option<Self> {
        let textbox = doc.editing_item()?.as_textbox()?;
        let node = scene.node_transform(&textbox.id)?;

        Some(Self {
            item_id: textbox.id.clone(),
            draft: textbox.text.clone(),
            overlay: overlay_rect(&node, viewport, container_origin, &style),
            container_origin,
            style,
        })
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn overlay(&self) -> &OverlayRect {
        &self.overlay
    }

    /// Recomputes the overlay after the node or the viewport changed.
    /// Returns false when the node no longer exists.
    pub fn reposition(&mut self, scene: &impl SceneGraph, viewport: &Viewport) -> bool {
        match scene.node_transform(&self.item_id) {
            Some(node) => {
                self.overlay = overlay_rect(&node, viewport, self.container_origin, &self.style);
                true
            }
            None => false,
        }
    }

    /// Enter without Shift commits, Escape cancels. Everything else is typing.
    pub fn handle_key(&self, chord: &KeyChord) -> Option<EditOutcome> {
        match chord.key {
            Key::Enter if !chord.shift => Some(EditOutcome::Commit(self.draft.clone())),
            Key::Escape => Some(EditOutcome::Cancel),
            _ => None,
        }
    }

    /// Focus left the overlay.
    pub fn blur(self) -> EditOutcome {
        EditOutcome::Commit(self.draft)
    }
}
