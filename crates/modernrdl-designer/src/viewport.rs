//! Viewport and coordinate transformation for the design surface.
//!
//! Handles conversion between screen coordinates (pointer events, overlay
//! placement) and document coordinates (item positions). Manages zoom and
//! pan. The viewport is view state only: it is never part of a history
//! snapshot and undo/redo leave it alone.

use std::fmt;

use modernrdl_core::constants::ZOOM_STEP;
use modernrdl_core::geometry::{document_to_screen, screen_to_document};
use modernrdl_core::{clamp_to_page, zoom_offset_about, Bounds, Point, Size};

/// Direction of one zoom notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a direction: scrolling up (negative delta)
    /// zooms in. A zero delta has no direction.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Represents the viewport transformation state (scale and translation).
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    container_width: f64,
    container_height: f64,
    zoom_step: f64,
    pan_mode: bool,
}

impl Viewport {
    /// Creates a viewport at 1:1 with the document origin at the container origin.
    pub fn new(container_width: f64, container_height: f64) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            container_width,
            container_height,
            zoom_step: ZOOM_STEP,
            pan_mode: false,
        }
    }

    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        if zoom_step > 1.0 {
            self.zoom_step = zoom_step;
        }
        self
    }

    pub fn container_size(&self) -> Size {
        Size::new(self.container_width, self.container_height)
    }

    /// Sets the container dimensions (typically called when the window resizes).
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        self.container_width = width;
        self.container_height = height;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Scales the page so it occupies `margin` of the container and centers it.
    pub fn fit_page(&mut self, page: Size, margin: f64) {
        if page.width <= 0.0 || page.height <= 0.0 {
            return;
        }
        if self.container_width <= 0.0 || self.container_height <= 0.0 {
            return;
        }

        let scale_x = self.container_width * margin / page.width;
        let scale_y = self.container_height * margin / page.height;
        self.scale = scale_x.min(scale_y);

        self.offset_x = (self.container_width - page.width * self.scale) / 2.0;
        self.offset_y = (self.container_height - page.height * self.scale) / 2.0;
        tracing::debug!("Viewport fitted to page: {}", self);
    }

    /// Zooms one notch while keeping the document point under the pointer fixed.
    ///
    /// The scale is not clamped in either direction.
    pub fn zoom_at_pointer(&mut self, pointer: Point, direction: ZoomDirection) {
        let new_scale = match direction {
            ZoomDirection::In => self.scale * self.zoom_step,
            ZoomDirection::Out => self.scale / self.zoom_step,
        };

        let offset = zoom_offset_about(pointer, self.offset(), self.scale, new_scale);
        self.scale = new_scale;
        self.offset_x = offset.x;
        self.offset_y = offset.y;
    }

    /// Enables or disables pan mode (the explicit pan modifier).
    pub fn set_pan_mode(&mut self, active: bool) {
        self.pan_mode = active;
    }

    pub fn is_pan_mode(&self) -> bool {
        self.pan_mode
    }

    /// Pans by a screen-space delta. Ignored unless pan mode is active.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        if !self.pan_mode {
            return false;
        }
        self.offset_x += dx;
        self.offset_y += dy;
        true
    }

    /// Drag bound for the surface itself: the proposed translation while
    /// panning, otherwise the current one, so an item drag never moves the view.
    pub fn drag_bound(&self, proposed: Point) -> Point {
        if self.pan_mode {
            proposed
        } else {
            self.offset()
        }
    }

    /// Converts a screen (container-relative) position to document space.
    pub fn screen_to_document(&self, screen: Point) -> Point {
        screen_to_document(screen, self.offset(), self.scale)
    }

    /// Converts a document position to screen (container-relative) space.
    pub fn document_to_screen(&self, doc: Point) -> Point {
        document_to_screen(doc, self.offset(), self.scale)
    }

    /// Drag-bound function for items.
    ///
    /// `bounds` is the item's bounding box in document space and `anchor`
    /// its current absolute (screen) position; `proposed` is where the drag
    /// wants the anchor to go. Returns the clamped absolute position.
    pub fn clamp_item_to_page(
        &self,
        page: Size,
        bounds: &Bounds,
        anchor: Point,
        proposed: Point,
    ) -> Point {
        let anchor_doc = self.screen_to_document(anchor);
        let proposed_doc = self.screen_to_document(proposed);
        let clamped = clamp_to_page(bounds, anchor_doc, proposed_doc, page);
        self.document_to_screen(clamped)
    }

    /// Resets to 1:1 with no translation and pan mode off.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.pan_mode = false;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Offset: ({:.1}, {:.1})",
            self.scale, self.offset_x, self.offset_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
