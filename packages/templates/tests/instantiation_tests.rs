//! Template instantiation properties

use folio_model::{BlockContent, BlockKind, DocumentType, SequentialIds};
use folio_templates::{instantiate, Catalog, DocumentTemplate, TemplateSelector};
use std::collections::HashSet;
use std::io::Write;

#[test]
fn test_two_instantiations_share_no_block_ids() {
    let template = Catalog::bundled().get("brand-presentation").unwrap();
    let mut ids = SequentialIds::from_seed("session");

    let first = instantiate(template, &mut ids);
    let second = instantiate(template, &mut ids);

    let first_ids: HashSet<_> = first.block_ids().into_iter().collect();
    let second_ids: HashSet<_> = second.block_ids().into_iter().collect();
    assert!(first_ids.is_disjoint(&second_ids));

    // Same content, different identity
    for (a, b) in first.pages.iter().zip(&second.pages) {
        let a_content: Vec<_> = a.blocks.iter().map(|b| &b.content).collect();
        let b_content: Vec<_> = b.blocks.iter().map(|b| &b.content).collect();
        assert_eq!(a_content, b_content);
    }
}

#[test]
fn test_mutating_instance_leaves_template_untouched() {
    let template = DocumentTemplate::blank(DocumentType::CaseStudy);
    let snapshot = template.clone();

    let mut doc = instantiate(&template, &mut SequentialIds::from_seed("a"));
    if let BlockContent::Heading(h) = &mut doc.pages[0].blocks[0].content {
        h.text = "Acme Rebrand".to_string();
    }

    assert_eq!(template, snapshot);

    let fresh = instantiate(&template, &mut SequentialIds::from_seed("b"));
    match &fresh.pages[0].blocks[0].content {
        BlockContent::Heading(h) => assert_eq!(h.text, "Case Study Title"),
        other => panic!("unexpected content {:?}", other),
    }
}

#[test]
fn test_selector_instantiates_catalog_template() {
    let catalog = Catalog::bundled();
    let mut selector = TemplateSelector::for_type(catalog, DocumentType::CaseStudy);

    let doc = selector
        .double_click("client-case-study", &mut SequentialIds::from_seed("cs"))
        .expect("template is listed");

    assert_eq!(doc.title, "Client Case Study");
    assert_eq!(doc.pages.len(), 2);
    let first_page_kinds: Vec<_> = doc.pages[0].blocks.iter().filter_map(|b| b.kind()).collect();
    assert_eq!(
        first_page_kinds,
        vec![BlockKind::Heading, BlockKind::Paragraph, BlockKind::ChallengeSolution]
    );
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = Catalog::bundled().to_json().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.templates.len(), Catalog::bundled().templates.len());
}
