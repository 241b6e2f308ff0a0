//! Configuration and settings management for ModernRDL
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor behaviour (zoom step, fit margin, text overlay, history size)
//! - Defaults for newly dropped items
//! - Page settings for new designs

use modernrdl_core::constants::*;
use modernrdl_core::{Error, Orientation, PageFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Supported on-disk formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> std::result::Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Editor behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Factor applied per wheel notch
    pub zoom_step: f64,
    /// Fraction of the container the page occupies after fitting
    pub fit_margin: f64,
    /// Overlay font size at scale 1
    pub base_font_size: f64,
    pub overlay_padding: f64,
    pub overlay_line_height: f64,
    /// Maximum undo entries, 0 for unlimited
    pub history_limit: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            fit_margin: FIT_MARGIN,
            base_font_size: BASE_FONT_SIZE,
            overlay_padding: OVERLAY_PADDING,
            overlay_line_height: OVERLAY_LINE_HEIGHT,
            history_limit: 0,
        }
    }
}

/// Properties of newly dropped items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefaultSettings {
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

impl Default for ItemDefaultSettings {
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

/// Page of a new design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub format: PageFormat,
    pub orientation: Orientation,
    pub header_height: f64,
    pub footer_height: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            header_height: DEFAULT_HEADER_HEIGHT,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }
}

fn default_recent_files_count() -> usize {
    10
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recent files list, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    #[serde(default = "default_recent_files_count")]
    pub recent_files_count: usize,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub defaults: ItemDefaultSettings,
    #[serde(default)]
    pub page: PageSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            recent_files_count: default_recent_files_count(),
            editor: EditorSettings::default(),
            defaults: ItemDefaultSettings::default(),
            page: PageSettings::default(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/modernrdl/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir {
            os: std::env::consts::OS,
        })?;
        Ok(dir.join("modernrdl").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).map_err(|e| Error::other(e.to_string()))?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?,
            ConfigFormat::Toml => toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let format = ConfigFormat::from_path(path).map_err(|e| Error::other(e.to_string()))?;
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
        };

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Loads `path`, or returns the defaults when it does not exist yet.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        ConfigFormat::from_path(path)?;
        Self::load_from_file(path).map_err(|source| SettingsError::Load {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves to `path`, creating its directory first.
    pub fn save_creating_dirs(&self, path: &Path) -> SettingsResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| SettingsError::ConfigDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        self.save_to_file(path).map_err(|source| SettingsError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let editor = &self.editor;
        if !(editor.zoom_step > 1.0) || !editor.zoom_step.is_finite() {
            return Err(Error::invalid_value("editor.zoom_step", "must be > 1"));
        }
        if !(editor.fit_margin > 0.0 && editor.fit_margin <= 1.0) {
            return Err(Error::invalid_value(
                "editor.fit_margin",
                "must be in (0, 1]",
            ));
        }
        if !(editor.base_font_size > 0.0) {
            return Err(Error::invalid_value("editor.base_font_size", "must be > 0"));
        }
        if editor.overlay_padding < 0.0 {
            return Err(Error::invalid_value("editor.overlay_padding", "must be >= 0"));
        }
        if !(editor.overlay_line_height > 0.0) {
            return Err(Error::invalid_value(
                "editor.overlay_line_height",
                "must be > 0",
            ));
        }

        let defaults = &self.defaults;
        if !(defaults.textbox_width > 0.0 && defaults.textbox_height > 0.0) {
            return Err(Error::invalid_value(
                "defaults.textbox_width/height",
                "must be > 0",
            ));
        }
        if defaults.table_rows == 0 || defaults.table_columns == 0 {
            return Err(Error::invalid_value(
                "defaults.table_rows/columns",
                "must be > 0",
            ));
        }
        if !(defaults.table_cell_width > 0.0 && defaults.table_cell_height > 0.0) {
            return Err(Error::invalid_value(
                "defaults.table_cell_width/height",
                "must be > 0",
            ));
        }

        let page = &self.page;
        let size = page.format.dimensions(page.orientation);
        if page.header_height < 0.0 || page.footer_height < 0.0 {
            return Err(Error::invalid_value(
                "page.header_height/footer_height",
                "must be >= 0",
            ));
        }
        if page.header_height + page.footer_height > size.height {
            return Err(Error::invalid_value(
                "page.header_height/footer_height",
                format!("header and footer exceed the page height ({})", size.height),
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.recent_files_count);
    }
}
