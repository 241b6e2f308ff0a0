use modernrdl_core::{Orientation, Point, Size};
use modernrdl_designer::designer_state::DesignerState;
use modernrdl_designer::error::ProjectError;
use modernrdl_designer::model::{ItemKind, PageSettingsPatch, Section, TransformAttrs};
use modernrdl_designer::serialization;
use tempfile::TempDir;

fn populated_state() -> DesignerState {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let textbox = state.add_item(ItemKind::Textbox, Point::new(40.0, 30.0));
    state.transform_item(&textbox, &TransformAttrs::default().with_rotation(12.5));
    state.add_item(ItemKind::Table, Point::new(40.0, 300.0));
    state.change_page_settings(&PageSettingsPatch::orientation(Orientation::Landscape));
    state.start_editing(Some(&textbox));
    state
}

#[test]
fn test_save_load_round_trip_in_memory() {
    let state = populated_state();
    let json = state.save_to_string().unwrap();

    let mut loaded = DesignerState::default();
    loaded.load_from_str(&json).unwrap();
    assert_eq!(loaded.document(), state.document());
    // Selection and edit state come back too
    assert!(loaded.document().editing_item_id.is_some());
}

#[test]
fn test_load_resets_history() {
    let json = populated_state().save_to_string().unwrap();

    let mut state = DesignerState::default();
    state.add_item(ItemKind::Textbox, Point::new(0.0, 200.0));
    state.add_item(ItemKind::Textbox, Point::new(0.0, 300.0));
    state.load_from_str(&json).unwrap();

    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history().cursor(), 0);
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}

#[test]
fn test_load_without_page_leaves_state_untouched() {
    let mut state = populated_state();
    let before = state.document().clone();
    let history_len = state.history().len();

    let err = state
        .load_from_str(r#"{"items":[],"selectedId":null}"#)
        .unwrap_err();
    assert!(matches!(err, ProjectError::MissingKey("page")));
    assert!(err.is_format_error());

    assert_eq!(state.document(), &before);
    assert_eq!(state.history().len(), history_len);
}

const A4_PAGE: &str = r#""page":{"width":794,"height":1123,"format":"A4","orientation":"portrait","headerHeight":80,"footerHeight":50}"#;

#[test]
fn test_load_rejects_oversized_table_counts() {
    let mut state = populated_state();
    let before = state.document().clone();

    let json = format!(
        r#"{{"items":[{{"type":"table","id":"t","x":0,"y":200,"width":100,"height":30,"rowCount":1,"columnCount":2305843009213693952,"columnWidths":[100],"rowHeights":[30],"tableData":[["a"]]}}],"selectedId":null,{}}}"#,
        A4_PAGE
    );
    let err = state.load_from_str(&json).unwrap_err();
    assert!(matches!(err, ProjectError::InvalidTable { .. }));
    assert!(err.is_format_error());
    assert_eq!(state.document(), &before);
}

#[test]
fn test_load_rejects_ragged_table_data() {
    let json = format!(
        r#"{{"items":[{{"type":"table","id":"t","x":0,"y":200,"width":200,"height":60,"rowCount":2,"columnCount":2,"columnWidths":[100,100],"rowHeights":[30,30],"tableData":[["a","b"],["c"]]}}],"selectedId":null,{}}}"#,
        A4_PAGE
    );
    let mut state = DesignerState::default();
    let err = state.load_from_str(&json).unwrap_err();
    assert!(matches!(err, ProjectError::InvalidTable { ref id, .. } if id == "t"));
}

#[test]
fn test_load_clamps_negative_zone_heights() {
    let json = r#"{"items":[],"selectedId":null,"page":{"width":794,"height":1123,"format":"A4","orientation":"portrait","headerHeight":-40,"footerHeight":-10}}"#;
    let mut state = DesignerState::default();
    state.load_from_str(json).unwrap();

    let page = &state.document().page;
    assert_eq!((page.header_height, page.footer_height), (0.0, 0.0));
    assert_eq!(page.section_at(0.0), Section::Body);
}

#[test]
fn test_load_malformed_json() {
    let mut state = DesignerState::default();
    let err = state.load_from_str("{\"items\": [").unwrap_err();
    assert!(matches!(err, ProjectError::Parse(_)));
}

#[test]
fn test_project_file_shape() {
    let json = populated_state().save_to_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(value["page"]["width"], 1123.0);
    assert_eq!(value["page"]["orientation"], "landscape");
    assert_eq!(value["page"]["format"], "A4");
    assert_eq!(value["items"][0]["type"], "textbox");
    assert_eq!(value["items"][0]["section"], "header");
    assert_eq!(value["items"][1]["type"], "table");
    assert_eq!(value["items"][1]["columnWidths"][0], 100.0);
    assert_eq!(value["items"][1]["tableData"][2][2], "Cell");
}

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invoice.mrdl");

    let mut state = populated_state();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "invoice.mrdl");
    assert_eq!(state.design_name(), "invoice");

    let mut loaded = DesignerState::default();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.document(), state.document());
    assert_eq!(loaded.current_file_path.as_deref(), Some(path.as_path()));

    loaded.add_item(ItemKind::Textbox, Point::new(0.0, 500.0));
    assert_eq!(loaded.display_name(), "invoice.mrdl*");
}

#[test]
fn test_load_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design.json");
    std::fs::write(&path, populated_state().save_to_string().unwrap()).unwrap();

    let mut state = DesignerState::default();
    let err = state.load_from_file(&path).unwrap_err();
    assert!(matches!(err, ProjectError::InvalidExtension { .. }));
    assert!(state.current_file_path.is_none());
}

#[test]
fn test_failed_save_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.mrdl");

    let mut state = populated_state();
    let err = state.save_to_file(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
    assert!(!path.exists());
    assert!(state.is_modified);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.mrdl");
    std::fs::write(&path, "old contents").unwrap();

    serialization::save_to_file(populated_state().document(), &path).unwrap();
    let doc = serialization::load_from_file(&path).unwrap();
    assert_eq!(doc.items.len(), 2);

    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_new_design_resets_everything() {
    let mut state = populated_state();
    state.new_design();
    assert!(state.document().items.is_empty());
    assert_eq!(state.history().len(), 1);
    assert!(state.current_file_path.is_none());
    assert_eq!(state.display_name(), "Untitled");
    assert_eq!(state.design_name(), "Untitled");
}
