use modernrdl_core::{Orientation, PageFormat, Point, Size};
use modernrdl_designer::designer_state::DesignerState;
use modernrdl_designer::model::{
    Item, ItemKind, PageSettingsPatch, Section, TransformAttrs,
};
use modernrdl_designer::shortcuts::{EditorAction, Key, KeyChord};

fn state() -> DesignerState {
    DesignerState::new(Size::new(1200.0, 800.0))
}

#[test]
fn test_designer_state_new() {
    let state = state();
    let doc = state.document();
    assert!(doc.items.is_empty());
    assert!(doc.selected_id.is_none());
    assert!(doc.editing_item_id.is_none());
    assert_eq!(doc.page.size(), Size::new(794.0, 1123.0));
    assert!(!state.can_undo());
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "Untitled");
}

#[test]
fn test_drop_sections() {
    let mut state = state();
    let header = state.add_item(ItemKind::Textbox, Point::new(10.0, 50.0));
    let footer = state.add_item(ItemKind::Textbox, Point::new(10.0, 1100.0));
    let body = state.add_item(ItemKind::Textbox, Point::new(10.0, 500.0));

    let doc = state.document();
    assert_eq!(doc.item(&header).map(Item::section), Some(Section::Header));
    assert_eq!(doc.item(&footer).map(Item::section), Some(Section::Footer));
    assert_eq!(doc.item(&body).map(Item::section), Some(Section::Body));
}

#[test]
fn test_section_boundaries_are_body() {
    let mut state = state();
    let top = state.add_item(ItemKind::Textbox, Point::new(0.0, 80.0));
    let bottom = state.add_item(ItemKind::Textbox, Point::new(0.0, 1073.0));
    let doc = state.document();
    assert_eq!(doc.item(&top).map(Item::section), Some(Section::Body));
    assert_eq!(doc.item(&bottom).map(Item::section), Some(Section::Body));
}

#[test]
fn test_add_selects_new_item_and_is_undoable() {
    let mut state = state();
    let id = state.add_item(ItemKind::Table, Point::new(20.0, 200.0));

    assert_eq!(state.document().selected_id.as_deref(), Some(id.as_str()));
    assert_eq!(state.history().len(), 2);
    assert!(state.is_modified);
    assert_eq!(state.display_name(), "Untitled*");

    let table = state
        .document()
        .item(&id)
        .and_then(Item::as_table)
        .cloned()
        .unwrap();
    assert_eq!((table.width, table.height), (300.0, 90.0));
    assert_eq!(table.column_widths, vec![100.0; 3]);
    assert_eq!(table.row_heights, vec![30.0; 3]);
    assert_eq!(table.table_data, vec![vec!["Cell".to_string(); 3]; 3]);

    assert!(state.undo());
    assert!(state.document().items.is_empty());
    assert!(state.redo());
    assert!(state.document().contains(&id));
}

#[test]
fn test_drop_needs_tool_and_pointer() {
    let mut state = state();
    assert!(state.drop_at(Some(Point::new(600.0, 400.0))).is_none());

    assert!(!state.begin_tool_drag("image"));
    assert!(state.drop_at(Some(Point::new(600.0, 400.0))).is_none());

    assert!(state.begin_tool_drag("textbox"));
    assert!(state.drop_at(None).is_none());
    assert!(state.document().items.is_empty());
    // The tool is consumed by the failed drop
    assert!(state.active_tool().is_none());
}

#[test]
fn test_drop_converts_pointer_to_document_space() {
    let mut state = state();
    let pointer = state.viewport().document_to_screen(Point::new(100.0, 300.0));

    assert!(state.begin_tool_drag("textbox"));
    let id = state.drop_at(Some(pointer)).unwrap();
    let pos = state.document().item(&id).unwrap().position();
    assert!((pos.x - 100.0).abs() < 1e-6);
    assert!((pos.y - 300.0).abs() < 1e-6);
}

#[test]
fn test_select_is_not_undo_tracked() {
    let mut state = state();
    let a = state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));
    let b = state.add_item(ItemKind::Textbox, Point::new(10.0, 400.0));
    let len = state.history().len();

    assert!(state.select_item(Some(&a)));
    assert_eq!(state.history().len(), len);
    assert_eq!(state.document().selected_id.as_deref(), Some(a.as_str()));

    assert!(!state.select_item(Some("missing")));
    assert!(state.select_item(None));
    assert!(state.document().selected_id.is_none());

    // Undo goes back past both drops' state, not through selections
    assert!(state.undo());
    assert!(!state.document().contains(&b));
}

#[test]
fn test_move_and_transform() {
    let mut state = state();
    let id = state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));

    assert!(state.move_item(&id, 40.0, 250.0));
    assert_eq!(
        state.document().item(&id).unwrap().position(),
        Point::new(40.0, 250.0)
    );

    let attrs = TransformAttrs::transform_end(45.0, 260.0, 15.0, 2.0, 0.5);
    assert!(state.transform_item(&id, &attrs));
    let textbox = state.document().item(&id).and_then(Item::as_textbox).cloned().unwrap();
    assert_eq!((textbox.x, textbox.y, textbox.rotation), (45.0, 260.0, 15.0));
    assert_eq!((textbox.scale_x, textbox.scale_y), (2.0, 0.5));

    assert!(!state.move_item("missing", 0.0, 0.0));
    assert!(!state.transform_item(&id, &TransformAttrs::default()));
}

#[test]
fn test_table_transform_keeps_sums() {
    let mut state = state();
    let id = state.add_item(ItemKind::Table, Point::new(10.0, 200.0));

    let attrs = TransformAttrs::default().with_scale(2.0, 1.0);
    assert!(state.transform_item(&id, &attrs));
    let table = state.document().item(&id).and_then(Item::as_table).cloned().unwrap();
    assert_eq!(table.width, 600.0);
    assert_eq!(table.width, table.column_widths.iter().sum::<f64>());
    assert!(table.is_consistent());
}

#[test]
fn test_delete_selected() {
    let mut state = state();
    assert!(!state.delete_selected());

    let id = state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));
    assert!(state.delete_selected());
    assert!(!state.document().contains(&id));
    assert!(state.document().selected_id.is_none());
    assert!(state.document().editing_item_id.is_none());

    assert!(state.undo());
    assert!(state.document().contains(&id));
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let mut state = state();
    state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));
    state.add_item(ItemKind::Textbox, Point::new(10.0, 300.0));
    assert!(state.undo());
    assert!(state.can_redo());

    state.add_item(ItemKind::Table, Point::new(10.0, 400.0));
    assert!(!state.can_redo());
    assert_eq!(state.history().len(), 3);
}

#[test]
fn test_change_item_replaces_by_id() {
    let mut state = state();
    let id = state.add_item(ItemKind::Table, Point::new(10.0, 200.0));

    let mut table = state.document().item(&id).and_then(Item::as_table).cloned().unwrap();
    table.set_cell(0, 0, "Name");
    table.column_count = 4;
    assert!(state.change_item(Item::Table(table)));

    let table = state.document().item(&id).and_then(Item::as_table).cloned().unwrap();
    assert_eq!(table.cell(0, 0), Some("Name"));
    assert!(table.is_consistent());
    assert_eq!(table.width, 400.0);
}

#[test]
fn test_set_item_section() {
    let mut state = state();
    let id = state.add_item(ItemKind::Textbox, Point::new(10.0, 500.0));
    assert!(state.set_item_section(&id, Section::Footer));
    assert_eq!(state.document().item(&id).map(Item::section), Some(Section::Footer));
    assert!(!state.set_item_section(&id, Section::Footer));
}

#[test]
fn test_page_orientation_swaps_dimensions() {
    let mut state = state();
    let patch = PageSettingsPatch::orientation(Orientation::Landscape);
    assert!(state.change_page_settings(&patch));
    assert_eq!(state.document().page.size(), Size::new(1123.0, 794.0));

    let patch = PageSettingsPatch {
        format: Some(PageFormat::Letter),
        width: Some(10.0),
        height: Some(10.0),
        ..PageSettingsPatch::default()
    };
    assert!(state.change_page_settings(&patch));
    assert_eq!(state.document().page.size(), Size::new(1056.0, 816.0));

    assert!(state.undo());
    assert_eq!(state.document().page.format, PageFormat::A4);
}

#[test]
fn test_drag_bound_keeps_item_on_page() {
    let mut state = state();
    let id = state.add_item(ItemKind::Textbox, Point::new(100.0, 200.0));

    let proposed = state.viewport().document_to_screen(Point::new(-500.0, -500.0));
    let bound = state.drag_bound_for(&id, proposed);
    let doc = state.viewport().screen_to_document(bound);
    assert!(doc.x.abs() < 1e-6);
    assert!(doc.y.abs() < 1e-6);

    let free = Point::new(3.0, 4.0);
    assert_eq!(state.drag_bound_for("missing", free), free);
}

#[test]
fn test_shortcuts() {
    let mut state = state();
    let id = state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));

    assert_eq!(
        state.handle_shortcut(&KeyChord::plain(Key::Delete)),
        Some(EditorAction::DeleteSelected)
    );
    assert!(!state.document().contains(&id));

    assert_eq!(
        state.handle_shortcut(&KeyChord::ctrl(Key::Char('z'))),
        Some(EditorAction::Undo)
    );
    assert!(state.document().contains(&id));

    assert_eq!(
        state.handle_shortcut(&KeyChord::ctrl(Key::Char('y'))),
        Some(EditorAction::Redo)
    );
    assert!(!state.document().contains(&id));
}

#[test]
fn test_shortcuts_suppressed_while_editing() {
    let mut state = state();
    let id = state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));
    assert!(state.start_editing(Some(&id)));

    assert_eq!(state.handle_shortcut(&KeyChord::plain(Key::Backspace)), None);
    assert!(state.document().contains(&id));
}

#[test]
fn test_wheel_zoom_and_pan() {
    let mut state = state();
    let scale = state.viewport().scale();
    assert!(state.zoom_with_wheel(Point::new(600.0, 400.0), -1.0));
    assert!(state.viewport().scale() > scale);
    assert!(!state.zoom_with_wheel(Point::new(600.0, 400.0), 0.0));

    let offset = state.viewport().offset();
    assert!(!state.pan_view(10.0, 10.0));
    state.set_pan_mode(true);
    assert!(state.pan_view(10.0, 10.0));
    assert_eq!(state.viewport().offset(), offset.offset(10.0, 10.0));

    // View changes never touch the history
    assert_eq!(state.history().len(), 1);
}
