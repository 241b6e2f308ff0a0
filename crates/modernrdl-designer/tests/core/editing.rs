use modernrdl_core::{Point, Size};
use modernrdl_designer::designer_state::DesignerState;
use modernrdl_designer::model::{Item, ItemKind};
use modernrdl_designer::text_overlay::EditOutcome;

fn text_of(state: &DesignerState, id: &str) -> String {
    state
        .document()
        .item(id)
        .and_then(Item::as_textbox)
        .map(|t| t.text.clone())
        .unwrap()
}

fn editing_textbox() -> (DesignerState, String) {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let id = state.add_item(ItemKind::Textbox, Point::new(50.0, 300.0));
    assert!(state.start_editing(Some(&id)));
    (state, id)
}

#[test]
fn test_start_editing_is_overwrite() {
    let (state, id) = editing_textbox();
    assert_eq!(state.document().editing_item_id.as_deref(), Some(id.as_str()));
    assert_eq!(state.history().len(), 2);
    assert!(state.is_text_editing());
}

#[test]
fn test_tables_are_not_text_editable() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let id = state.add_item(ItemKind::Table, Point::new(50.0, 300.0));
    assert!(!state.start_editing(Some(&id)));
    assert!(!state.start_editing(Some("missing")));
    assert!(state.document().editing_item_id.is_none());
}

#[test]
fn test_finish_editing_commits_text() {
    let (mut state, id) = editing_textbox();
    let old = text_of(&state, &id);

    assert!(state.finish_editing(Some("Hello".to_string())));
    assert_eq!(text_of(&state, &id), "Hello");
    assert!(state.document().editing_item_id.is_none());
    assert_eq!(state.history().len(), 3);

    // One undo brings back the old text without reopening the editor
    assert!(state.undo());
    assert_eq!(text_of(&state, &id), old);
    assert!(state.document().editing_item_id.is_none());

    assert!(state.redo());
    assert_eq!(text_of(&state, &id), "Hello");
}

#[test]
fn test_cancel_editing_keeps_text() {
    let (mut state, id) = editing_textbox();
    let old = text_of(&state, &id);

    assert!(state.apply_edit_outcome(EditOutcome::Cancel));
    assert_eq!(text_of(&state, &id), old);
    assert!(state.document().editing_item_id.is_none());
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_finish_without_editing_is_noop() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    state.add_item(ItemKind::Textbox, Point::new(50.0, 300.0));
    assert!(!state.finish_editing(Some("x".to_string())));
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_deleting_edited_item_clears_editing() {
    let (mut state, _) = editing_textbox();
    assert!(state.delete_selected());
    assert!(state.document().editing_item_id.is_none());
}
