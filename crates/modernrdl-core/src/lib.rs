//! # ModernRDL Core
//!
//! Core types and pure utilities shared by the ModernRDL crates:
//! page formats, document/screen geometry and the unified error type.
//! Nothing in this crate holds state.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod page_format;

pub use error::{Error, Result};
pub use geometry::{
    clamp_to_page, document_to_screen, screen_to_document, zoom_offset_about, Bounds, Point, Size,
};
pub use page_format::{Orientation, PageFormat};
