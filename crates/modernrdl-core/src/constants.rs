//! Editor-wide defaults.
//!
//! Sizes are in document units (CSS pixels at 96 DPI).

/// Multiplicative zoom step for one wheel notch.
pub const ZOOM_STEP: f64 = 1.05;

/// Fraction of the visible container the page occupies after a fit.
pub const FIT_MARGIN: f64 = 0.9;

/// Font size of the text overlay at scale 1.
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Inner padding of the text overlay.
pub const OVERLAY_PADDING: f64 = 10.0;

/// Line height of the text overlay, relative to the font size.
pub const OVERLAY_LINE_HEIGHT: f64 = 1.5;

pub const TEXTBOX_WIDTH: f64 = 150.0;
pub const TEXTBOX_HEIGHT: f64 = 100.0;
pub const TEXTBOX_CORNER_RADIUS: f64 = 10.0;
pub const TEXTBOX_FILL: &str = "#28a745";
pub const TEXTBOX_PLACEHOLDER: &str = "Double-click to edit";

pub const TABLE_ROWS: usize = 3;
pub const TABLE_COLUMNS: usize = 3;
pub const TABLE_CELL_WIDTH: f64 = 100.0;
pub const TABLE_CELL_HEIGHT: f64 = 30.0;
pub const TABLE_CELL_TEXT: &str = "Cell";

/// Upper bound on rows and on columns of a single table.
pub const TABLE_MAX_DIMENSION: usize = 1000;

pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;
pub const DEFAULT_FOOTER_HEIGHT: f64 = 50.0;

/// Extension of project files, without the dot.
pub const PROJECT_EXTENSION: &str = "mrdl";
