//! # ModernRDL Designer
//!
//! Editing engine for paged report layouts. It owns the design document,
//! the undo/redo history over it, the pan/zoom viewport of the design
//! surface and the bridge to the in-place text editor. Rendering is left to
//! the host: it draws [`Document`] snapshots and forwards gestures to
//! [`DesignerState`].
//!
//! ## Core Components
//!
//! - **Model**: Textbox and table items, page settings, selection
//! - **History**: Snapshot undo/redo with overwrite commits
//! - **Designer state**: Gesture handlers that produce new snapshots
//! - **Viewport**: Scale and translation, screen/document conversion, page clamping
//! - **Text overlay**: Placement and key handling of the text editor overlay
//! - **Serialization**: The `.mrdl` project file format
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── History<Document> (snapshots + cursor)
//!   │     └── Document (items, selection, editing item, page)
//!   └── Viewport (view only, never in history)
//!
//! TextEditSession ── SceneGraph (node transforms from the renderer)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use modernrdl_core::{Point, Size};
//! use modernrdl_designer::{DesignerState, ItemKind};
//!
//! let mut state = DesignerState::new(Size::new(1200.0, 800.0));
//! let id = state.add_item(ItemKind::Textbox, Point::new(100.0, 300.0));
//!
//! assert_eq!(state.document().selected_id.as_deref(), Some(id.as_str()));
//! assert!(state.undo());
//! assert!(state.document().items.is_empty());
//! ```

pub mod designer_state;
pub mod error;
pub mod history;
pub mod model;
pub mod options;
pub mod serialization;
pub mod shortcuts;
pub mod text_overlay;
pub mod viewport;

pub use designer_state::DesignerState;
pub use error::{ProjectError, ProjectResult};
pub use history::History;
pub use model::{
    generate_item_id, Document, Item, ItemKind, Page, PageSettingsPatch, Section, Table,
    Textbox, TransformAttrs,
};
pub use options::{EditorOptions, ItemDefaults, OverlayStyle, PageDefaults};
pub use serialization::export_file_name;
pub use shortcuts::{resolve_shortcut, EditorAction, Key, KeyChord};
pub use text_overlay::{
    overlay_rect, DocumentScene, EditOutcome, NodeTransform, OverlayRect, SceneGraph,
    TextEditSession,
};
pub use viewport::{Viewport, ZoomDirection};
