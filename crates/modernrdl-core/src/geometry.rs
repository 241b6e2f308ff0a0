//! Document-space geometry.
//!
//! Pure functions used by the viewport and the item editing controller:
//! page clamping, zoom-about-pointer math and conversion between screen
//! space and document space. All angles are in degrees, y grows downwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in either document or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Vector from `other` to `self`.
    pub fn delta_from(&self, other: &Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    /// Rotates the point about the origin.
    pub fn rotated(&self, degrees: f64) -> Self {
        if degrees.abs() < 1e-9 {
            return *self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Width and height of a page, container or shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// True when the box lies inside `[0, page.width] x [0, page.height]`.
    pub fn is_within(&self, page: Size) -> bool {
        const EPS: f64 = 1e-9;
        self.x >= -EPS
            && self.y >= -EPS
            && self.right() <= page.width + EPS
            && self.bottom() <= page.height + EPS
    }

    /// Bounding box of a `width x height` rectangle rotated by `rotation`
    /// degrees about its top-left anchor at `(x, y)`.
    ///
    /// This matches how the scene graph rotates nodes: the anchor stays put
    /// and the rest of the shape swings around it.
    pub fn of_rotated_rect(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ];

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for corner in corners {
            let p = corner.rotated(rotation);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Self::new(x + min_x, y + min_y, max_x - min_x, max_y - min_y)
    }
}

/// Recomputes a proposed anchor position so that `bounds` stays on the page.
///
/// `bounds` is the item's current bounding box and `anchor` the node's
/// current position, both in document space. The offset between the two is
/// preserved, so rotated shapes whose box does not start at the anchor are
/// clamped by their visible extent. On an axis where the box is larger than
/// the page, the box is pinned to the page origin.
pub fn clamp_to_page(bounds: &Bounds, anchor: Point, proposed: Point, page: Size) -> Point {
    let (offset_x, offset_y) = bounds.origin().delta_from(&anchor);

    let box_x = clamp_axis(proposed.x + offset_x, bounds.width, page.width);
    let box_y = clamp_axis(proposed.y + offset_y, bounds.height, page.height);

    Point::new(box_x - offset_x, box_y - offset_y)
}

fn clamp_axis(start: f64, extent: f64, limit: f64) -> f64 {
    if extent > limit {
        0.0
    } else {
        start.clamp(0.0, limit - extent)
    }
}

/// Translation that keeps the document point under `pointer` fixed when
/// the scale changes from `scale` to `new_scale`.
///
/// ```text
/// doc        = (pointer - offset) / scale
/// new_offset = pointer - doc * new_scale
/// ```
pub fn zoom_offset_about(pointer: Point, offset: Point, scale: f64, new_scale: f64) -> Point {
    let doc = screen_to_document(pointer, offset, scale);
    Point::new(pointer.x - doc.x * new_scale, pointer.y - doc.y * new_scale)
}

/// Screen position to document position for a translation + uniform scale.
pub fn screen_to_document(screen: Point, offset: Point, scale: f64) -> Point {
    Point::new((screen.x - offset.x) / scale, (screen.y - offset.y) / scale)
}

/// Document position to screen position for a translation + uniform scale.
pub fn document_to_screen(doc: Point, offset: Point, scale: f64) -> Point {
    Point::new(doc.x * scale + offset.x, doc.y * scale + offset.y)
}
