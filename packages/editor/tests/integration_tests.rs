//! Integration tests for editor crate

use folio_editor::{
    add_block, delete_block, CanvasEvent, EditSession, EditorOptions, FieldEvent, FieldMode, FileStore, Key,
    TextField, UploadError, UploadState,
};
use folio_model::{BlockContent, BlockKind, DocumentType, Registry, SequentialIds};
use folio_templates::{Catalog, DocumentTemplate};

fn blank_case_study() -> EditSession {
    let template = DocumentTemplate::blank(DocumentType::CaseStudy);
    EditSession::from_template(&template, SequentialIds::from_seed("it"), EditorOptions::default())
}

#[test]
fn test_stat_card_after_blank_case_study_heading() {
    let mut session = blank_case_study();
    let heading = session.active_page().unwrap().blocks[0].id.clone();

    let seed = Registry::lookup(BlockKind::StatCard).unwrap().seed();
    session.add_block(&seed, Some(&heading)).unwrap();

    let page = session.active_page().unwrap();
    assert_eq!(page.blocks.len(), 2);

    match &page.blocks[0].content {
        BlockContent::Heading(h) => assert_eq!(h.text, "Case Study Title"),
        other => panic!("expected heading, got {:?}", other),
    }
    match &page.blocks[1].content {
        BlockContent::StatCard(card) => {
            assert_eq!(card.value, "0");
            assert_eq!(card.label, "Label");
        }
        other => panic!("expected stat card, got {:?}", other),
    }
}

#[test]
fn test_failed_upload_leaves_image_empty() {
    let mut session = blank_case_study();
    let image = session
        .add_block(&Registry::lookup(BlockKind::Image).unwrap().seed(), None)
        .unwrap();

    let mut failing = |_: &[u8], _: &str| -> Result<String, UploadError> {
        Err(UploadError::Backend("storage unavailable".to_string()))
    };
    assert!(!session.upload(&mut failing, &image, b"\x89PNG", "photo.png"));

    let block = session.active_page().unwrap().block(&image).unwrap();
    match &block.content {
        BlockContent::Image(content) => assert!(content.image_url.is_none()),
        other => panic!("expected image, got {:?}", other),
    }
    assert!(matches!(session.upload_state(&image), UploadState::Failed(_)));
    assert_eq!(session.take_notifications().len(), 1);
}

#[test]
fn test_click_empty_ends_edit_and_clears_selection() {
    let mut session = blank_case_study();
    let heading = session.active_page().unwrap().blocks[0].id.clone();

    session.handle(CanvasEvent::ClickBlock {
        block_id: heading.clone(),
    });
    session.handle(CanvasEvent::StartEdit {
        block_id: heading.clone(),
    });
    assert_eq!(session.canvas().editing(), Some(heading.as_str()));

    session.handle(CanvasEvent::ClickEmpty);
    let canvas = session.canvas();
    assert_eq!(canvas.editing(), None);
    assert_eq!(canvas.selected(), None);
}

#[test]
fn test_add_then_delete_is_identity() {
    let template = Catalog::bundled().get("client-case-study").unwrap();
    let mut ids = SequentialIds::from_seed("x");
    let document = folio_templates::instantiate(template, &mut ids);

    for page in &document.pages {
        for kind in BlockKind::ALL {
            let mut edited = page.clone();
            let id = add_block(&mut edited, &Registry::lookup(kind).unwrap().seed(), None, &mut ids);
            delete_block(&mut edited, &id);
            assert_eq!(&edited, page);
        }
    }
}

#[test]
fn test_duplicate_is_independent_of_original() {
    let mut session = blank_case_study();
    let original = session.active_page().unwrap().blocks[0].id.clone();

    let copy = session.duplicate_block(&original).unwrap();
    assert_ne!(copy, original);

    let patch = serde_json::json!({ "text": "Changed" }).as_object().unwrap().clone();
    assert!(session.update_block(&copy, patch, None));

    let page = session.active_page().unwrap();
    match (&page.block(&original).unwrap().content, &page.block(&copy).unwrap().content) {
        (BlockContent::Heading(a), BlockContent::Heading(b)) => {
            assert_eq!(a.text, "Case Study Title");
            assert_eq!(b.text, "Changed");
        }
        other => panic!("expected two headings, got {:?}", other),
    }
}

#[test]
fn test_reorder_preserves_ids() {
    let mut session = blank_case_study();
    for kind in [BlockKind::Paragraph, BlockKind::Quote, BlockKind::Divider] {
        session.add_block(&Registry::lookup(kind).unwrap().seed(), None);
    }

    let mut before = session.active_page().unwrap().block_ids().iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert!(session.reorder_blocks(0, 3));
    assert!(!session.reorder_blocks(2, 2));

    let mut after = session.active_page().unwrap().block_ids().iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_ne!(before, after);

    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_update_touches_only_one_field() {
    let mut session = blank_case_study();
    let card = session
        .add_block(&Registry::lookup(BlockKind::StatCard).unwrap().seed(), None)
        .unwrap();
    let before = session.active_page().unwrap().clone();

    let patch = serde_json::json!({ "value": "42%" }).as_object().unwrap().clone();
    assert!(session.update_block(&card, patch, None));

    let after = session.active_page().unwrap();
    assert_eq!(after.blocks[0], before.blocks[0]);
    match (&before.block(&card).unwrap().content, &after.block(&card).unwrap().content) {
        (BlockContent::StatCard(old), BlockContent::StatCard(new)) => {
            assert_eq!(new.value, "42%");
            assert_eq!(new.label, old.label);
            assert_eq!(new.description, old.description);
        }
        other => panic!("expected stat cards, got {:?}", other),
    }
}

#[test]
fn test_text_field_commit_flows_into_session() {
    let mut session = blank_case_study();
    let heading = session.active_page().unwrap().blocks[0].id.clone();

    let mut field = TextField::begin("text", FieldMode::SingleLine, "Case Study Title");
    field.stage("Acme Rollout");

    let FieldEvent::Committed(patch) = field.commit_key(Key::Enter) else {
        panic!("expected a commit");
    };
    assert!(session.update_block(&heading, patch, None));

    session.undo();
    match &session.active_page().unwrap().blocks[0].content {
        BlockContent::Heading(h) => assert_eq!(h.text, "Case Study Title"),
        other => panic!("expected heading, got {:?}", other),
    }
}

#[test]
fn test_file_store_session_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::new(dir.path());

    let mut session = blank_case_study();
    session.add_block(&Registry::lookup(BlockKind::Chart).unwrap().seed(), None);
    let id = session.save(&mut store).expect("save should succeed");

    let mut reopened = EditSession::open(folio_model::Document::new("tmp", "Tmp", DocumentType::Proposal));
    assert!(reopened.load(&store, &id));
    assert_eq!(reopened.document(), session.document());
    Ok(())
}
