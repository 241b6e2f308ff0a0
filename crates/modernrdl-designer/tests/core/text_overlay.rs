use modernrdl_core::{Point, Size};
use modernrdl_designer::designer_state::DesignerState;
use modernrdl_designer::model::{ItemKind, TransformAttrs};
use modernrdl_designer::shortcuts::{Key, KeyChord};
use modernrdl_designer::text_overlay::{DocumentScene, EditOutcome, SceneGraph};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_document_scene_reports_item_transforms() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let textbox = state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));
    let table = state.add_item(ItemKind::Table, Point::new(10.0, 400.0));
    state.transform_item(&textbox, &TransformAttrs::default().with_scale(2.0, 3.0));

    let scene = DocumentScene::new(state.document());
    let node = scene.node_transform(&textbox).unwrap();
    assert_eq!((node.scale_x, node.scale_y), (2.0, 3.0));
    assert_eq!((node.width, node.height), (150.0, 100.0));

    let node = scene.node_transform(&table).unwrap();
    assert_eq!((node.scale_x, node.scale_y), (1.0, 1.0));
    assert_eq!((node.width, node.height), (300.0, 90.0));

    assert!(scene.node_transform("missing").is_none());
}

#[test]
fn test_no_session_without_editing_textbox() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    state.add_item(ItemKind::Textbox, Point::new(10.0, 200.0));

    let doc = state.document().clone();
    let scene = DocumentScene::new(&doc);
    assert!(state.open_text_editor(&scene, Point::default()).is_none());
}

#[test]
fn test_overlay_matches_node_on_screen() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let id = state.add_item(ItemKind::Textbox, Point::new(100.0, 200.0));
    state.transform_item(
        &id,
        &TransformAttrs::default().with_rotation(90.0).with_scale(1.0, 2.0),
    );
    state.start_editing(Some(&id));

    let doc = state.document().clone();
    let scene = DocumentScene::new(&doc);
    let origin = Point::new(0.0, 64.0);
    let session = state.open_text_editor(&scene, origin).unwrap();

    let scale = state.viewport().scale();
    let screen = state.viewport().document_to_screen(Point::new(100.0, 200.0));
    let rect = session.overlay();
    assert!(approx(rect.left, screen.x));
    assert!(approx(rect.top, screen.y + 64.0));
    assert!(approx(rect.width, 150.0 * scale));
    assert!(approx(rect.height, 200.0 * scale));
    assert!(approx(rect.font_size, 16.0 * 2.0 * scale));
    assert_eq!(rect.css_transform(), "rotate(90deg)");
    assert_eq!(session.item_id(), id);
}

#[test]
fn test_overlay_follows_zoom() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let id = state.add_item(ItemKind::Textbox, Point::new(100.0, 200.0));
    state.start_editing(Some(&id));

    let doc = state.document().clone();
    let scene = DocumentScene::new(&doc);
    let mut session = state.open_text_editor(&scene, Point::default()).unwrap();
    let width = session.overlay().width;

    state.zoom_with_wheel(Point::new(600.0, 400.0), -1.0);
    assert!(session.reposition(&scene, state.viewport()));
    assert!(approx(session.overlay().width, width * 1.05));
}

#[test]
fn test_enter_commits_draft_through_state() {
    let mut state = DesignerState::new(Size::new(1200.0, 800.0));
    let id = state.add_item(ItemKind::Textbox, Point::new(100.0, 200.0));
    state.start_editing(Some(&id));

    let doc = state.document().clone();
    let scene = DocumentScene::new(&doc);
    let mut session = state.open_text_editor(&scene, Point::default()).unwrap();
    session.set_draft("Quarterly report");

    assert!(session.handle_key(&KeyChord::plain(Key::Enter).with_shift()).is_none());
    let outcome = session.handle_key(&KeyChord::plain(Key::Enter)).unwrap();
    assert_eq!(outcome, EditOutcome::Commit("Quarterly report".to_string()));

    assert!(state.apply_edit_outcome(outcome));
    let text = state
        .document()
        .item(&id)
        .and_then(|i| i.as_textbox())
        .map(|t| t.text.clone());
    assert_eq!(text.as_deref(), Some("Quarterly report"));
    assert!(!state.is_text_editing());
}
