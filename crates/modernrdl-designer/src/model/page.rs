use serde::{Deserialize, Serialize};

use modernrdl_core::{Orientation, PageFormat, Size};

use super::Section;
use crate::options::PageDefaults;

/// Page settings of a design.
///
/// `width` and `height` are serialized for consumers of the project file but
/// are always derived from `format` and `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub format: PageFormat,
    pub orientation: Orientation,
    pub header_height: f64,
    pub footer_height: f64,
}

/// Partial page update from the properties panel.
///
/// `width` / `height` are accepted so that a form can send every field it
/// shows, but they are ignored: dimensions follow format and orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageSettingsPatch {
    pub format: Option<PageFormat>,
    pub orientation: Option<Orientation>,
    pub header_height: Option<f64>,
    pub footer_height: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl PageSettingsPatch {
    pub fn orientation(orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            ..Self::default()
        }
    }

    pub fn format(format: PageFormat) -> Self {
        Self {
            format: Some(format),
            ..Self::default()
        }
    }
}

impl Page {
    pub fn new(
        format: PageFormat,
        orientation: Orientation,
        header_height: f64,
        footer_height: f64,
    ) -> Self {
        let size = format.dimensions(orientation);
        Self {
            width: size.width,
            height: size.height,
            format,
            orientation,
            header_height: header_height.max(0.0),
            footer_height: footer_height.max(0.0),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Re-derives width and height. Returns true if they were out of date.
    pub fn recompute_dimensions(&mut self) -> bool {
        let size = self.format.dimensions(self.orientation);
        let changed = size != self.size();
        self.width = size.width;
        self.height = size.height;
        changed
    }

    /// Restores the page invariants after deserialization: zone heights are
    /// clamped to zero and the dimensions re-derived. Returns true if
    /// anything changed.
    pub fn repair(&mut self) -> bool {
        let zones = (self.header_height, self.footer_height);
        self.header_height = non_negative(self.header_height);
        self.footer_height = non_negative(self.footer_height);
        let resized = self.recompute_dimensions();
        resized || zones != (self.header_height, self.footer_height)
    }

    /// Merges a patch and re-derives the dimensions.
    pub fn apply(&mut self, patch: &PageSettingsPatch) {
        if let Some(format) = patch.format {
            self.format = format;
        }
        if let Some(orientation) = patch.orientation {
            self.orientation = orientation;
        }
        if let Some(h) = patch.header_height {
            self.header_height = h.max(0.0);
        }
        if let Some(h) = patch.footer_height {
            self.footer_height = h.max(0.0);
        }
        if patch.width.is_some() || patch.height.is_some() {
            tracing::debug!("Ignoring explicit page size, dimensions follow format and orientation");
        }
        self.recompute_dimensions();
    }

    /// Top edge of the footer zone.
    pub fn footer_top(&self) -> f64 {
        self.height - self.footer_height
    }

    /// Section for a drop at document-space `y`.
    ///
    /// The zone boundaries belong to the body: `y == header_height` and
    /// `y == height - footer_height` both classify as body.
    pub fn section_at(&self, y: f64) -> Section {
        if y < self.header_height {
            Section::Header
        } else if y > self.footer_top() {
            Section::Footer
        } else {
            Section::Body
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::from(&PageDefaults::default())
    }
}

impl From<&PageDefaults> for Page {
    fn from(d: &PageDefaults) -> Self {
        Self::new(d.format, d.orientation, d.header_height, d.footer_height)
    }
}
