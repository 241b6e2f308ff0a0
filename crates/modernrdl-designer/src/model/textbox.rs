use serde::{Deserialize, Serialize};

use modernrdl_core::{Point, Size};

use super::{Section, TransformAttrs};
use crate::options::ItemDefaults;

fn unit_scale() -> f64 {
    1.0
}

/// A rounded, filled box holding a single editable string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Textbox {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Rotation angle in degrees about the top-left anchor
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub section: Section,
    pub width: f64,
    pub height: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
    pub fill: String,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub text: String,
}

impl Textbox {
    pub fn from_defaults(
        id: String,
        position: Point,
        section: Section,
        defaults: &ItemDefaults,
    ) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            rotation: 0.0,
            section,
            width: defaults.textbox_width,
            height: defaults.textbox_height,
            scale_x: 1.0,
            scale_y: 1.0,
            fill: defaults.textbox_fill.clone(),
            corner_radius: defaults.textbox_corner_radius,
            text: defaults.textbox_text.clone(),
        }
    }

    pub fn effective_size(&self) -> Size {
        Size::new(self.width * self.scale_x, self.height * self.scale_y)
    }

    pub fn apply_transform(&mut self, attrs: &TransformAttrs) {
        if let Some(x) = attrs.x {
            self.x = x;
        }
        if let Some(y) = attrs.y {
            self.y = y;
        }
        if let Some(rotation) = attrs.rotation {
            self.rotation = rotation;
        }
        if let Some(sx) = attrs.scale_x {
            self.scale_x = sx;
        }
        if let Some(sy) = attrs.scale_y {
            self.scale_y = sy;
        }
        if let Some(w) = attrs.width {
            self.width = w;
        }
        if let Some(h) = attrs.height {
            self.height = h;
        }
    }
}
