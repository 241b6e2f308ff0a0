//! Editor options consumed by the designer.
//!
//! These mirror the user-facing configuration but live here so the editing
//! engine has no dependency on how settings are persisted.

use modernrdl_core::constants::*;
use modernrdl_core::{Orientation, PageFormat};

/// Defaults applied when an item is dropped from the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefaults {
    pub textbox_width: f64,
    pub textbox_height: f64,
    pub textbox_fill: String,
    pub textbox_corner_radius: f64,
    pub textbox_text: String,
    pub table_rows: usize,
    pub table_columns: usize,
    pub table_cell_width: f64,
    pub table_cell_height: f64,
    pub table_cell_text: String,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            textbox_width: TEXTBOX_WIDTH,
            textbox_height: TEXTBOX_HEIGHT,
            textbox_fill: TEXTBOX_FILL.to_string(),
            textbox_corner_radius: TEXTBOX_CORNER_RADIUS,
            textbox_text: TEXTBOX_PLACEHOLDER.to_string(),
            table_rows: TABLE_ROWS,
            table_columns: TABLE_COLUMNS,
            table_cell_width: TABLE_CELL_WIDTH,
            table_cell_height: TABLE_CELL_HEIGHT,
            table_cell_text: TABLE_CELL_TEXT.to_string(),
        }
    }
}

/// Page used for a new design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDefaults {
    pub format: PageFormat,
    pub orientation: Orientation,
    pub header_height: f64,
    pub footer_height: f64,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            header_height: DEFAULT_HEADER_HEIGHT,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }
}

/// Styling of the in-place text overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub base_font_size: f64,
    pub padding: f64,
    pub line_height: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            base_font_size: BASE_FONT_SIZE,
            padding: OVERLAY_PADDING,
            line_height: OVERLAY_LINE_HEIGHT,
        }
    }
}

/// Everything the designer needs to know about user preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub zoom_step: f64,
    pub fit_margin: f64,
    /// Maximum number of history entries, 0 keeps everything.
    pub history_limit: usize,
    pub overlay: OverlayStyle,
    pub items: ItemDefaults,
    pub page: PageDefaults,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            fit_margin: FIT_MARGIN,
            history_limit: 0,
            overlay: OverlayStyle::default(),
            items: ItemDefaults::default(),
            page: PageDefaults::default(),
        }
    }
}
