//! Page formats and orientation.
//!
//! Page dimensions are never stored independently: they are always derived
//! from a `(PageFormat, Orientation)` pair through [`PageFormat::dimensions`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::Size;

/// Paper format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageFormat {
    /// ISO A4, 210 x 297 mm
    A4,
    /// US Letter, 8.5 x 11 in
    Letter,
}

impl PageFormat {
    /// Portrait dimensions at 96 DPI (short edge first).
    pub fn portrait_size(self) -> Size {
        match self {
            Self::A4 => Size::new(794.0, 1123.0),
            Self::Letter => Size::new(816.0, 1056.0),
        }
    }

    /// Dimensions for the given orientation. Landscape swaps the edges.
    pub fn dimensions(self, orientation: Orientation) -> Size {
        let size = self.portrait_size();
        match orientation {
            Orientation::Portrait => size,
            Orientation::Landscape => Size::new(size.height, size.width),
        }
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A4 => write!(f, "A4"),
            Self::Letter => write!(f, "Letter"),
        }
    }
}

impl FromStr for PageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "letter" => Ok(Self::Letter),
            _ => Err(Error::UnknownVariant {
                kind: "page format",
                value: s.to_string(),
            }),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Portrait
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(Error::UnknownVariant {
                kind: "orientation",
                value: s.to_string(),
            }),
        }
    }
}
