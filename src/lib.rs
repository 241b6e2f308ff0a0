//! # ModernRDL
//!
//! Editing engine for a paged report designer: textboxes and tables laid
//! out on a page with header, body and footer zones.
//!
//! ## Architecture
//!
//! ModernRDL is organized as a workspace with multiple crates:
//!
//! 1. **modernrdl-core** - Geometry, page formats, constants, error type
//! 2. **modernrdl-designer** - Document model, undo/redo, viewport, text overlay, project files
//! 3. **modernrdl-settings** - Editor configuration and its persistence
//! 4. **modernrdl** - Logging setup, configuration bridge and the command-line tool

use std::fmt;

pub use modernrdl_core::{
    clamp_to_page, Bounds, Error, Orientation, PageFormat, Point, Result, Size,
};
pub use modernrdl_designer as designer;
pub use modernrdl_designer::{
    export_file_name, DesignerState, Document, EditorOptions, Item, ItemKind, ProjectError,
    Section, Viewport,
};
pub use modernrdl_settings::{Config, SettingsError};

use modernrdl_designer::{ItemDefaults, OverlayStyle, PageDefaults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Builds the designer's options from the user configuration.
pub fn editor_options(config: &Config) -> EditorOptions {
    let editor = &config.editor;
    let defaults = &config.defaults;
    let page = &config.page;

    EditorOptions {
        zoom_step: editor.zoom_step,
        fit_margin: editor.fit_margin,
        history_limit: editor.history_limit,
        overlay: OverlayStyle {
            base_font_size: editor.base_font_size,
            padding: editor.overlay_padding,
            line_height: editor.overlay_line_height,
        },
        items: ItemDefaults {
            textbox_width: defaults.textbox_width,
            textbox_height: defaults.textbox_height,
            textbox_fill: defaults.textbox_fill.clone(),
            textbox_corner_radius: defaults.textbox_corner_radius,
            textbox_text: defaults.textbox_text.clone(),
            table_rows: defaults.table_rows,
            table_columns: defaults.table_columns,
            table_cell_width: defaults.table_cell_width,
            table_cell_height: defaults.table_cell_height,
            table_cell_text: defaults.table_cell_text.clone(),
        },
        page: PageDefaults {
            format: page.format,
            orientation: page.orientation,
            header_height: page.header_height,
            footer_height: page.footer_height,
        },
    }
}

/// Item counts of a project, for the command-line summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectSummary {
    pub textboxes: usize,
    pub tables: usize,
    pub header: usize,
    pub body: usize,
    pub footer: usize,
}

impl ProjectSummary {
    pub fn of(doc: &Document) -> Self {
        let mut summary = Self::default();
        for item in &doc.items {
            match item.kind() {
                ItemKind::Textbox => summary.textboxes += 1,
                ItemKind::Table => summary.tables += 1,
            }
            match item.section() {
                Section::Header => summary.header += 1,
                Section::Body => summary.body += 1,
                Section::Footer => summary.footer += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.textboxes + self.tables
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items ({} textboxes, {} tables) | header {} | body {} | footer {}",
            self.total(),
            self.textboxes,
            self.tables,
            self.header,
            self.body,
            self.footer
        )
    }
}
