//! # Template Instantiation
//!
//! Converts static blueprints into live documents:
//!
//! 1. every page blueprint becomes a page with a fresh id and the
//!    blueprint's background (or the default background)
//! 2. every seed of every section becomes a block with a fresh id and a
//!    deep copy of the seed's content and style
//! 3. sections are concatenated in blueprint order and then forgotten
//!
//! The returned document shares nothing with the template, so two
//! instantiations of the same template can be mutated independently.

use crate::{DocumentTemplate, PageBlueprint};
use folio_model::{Block, Document, IdGenerator, Page};
use tracing::debug;

/// Instantiate a whole template into a new document
pub fn instantiate(template: &DocumentTemplate, ids: &mut dyn IdGenerator) -> Document {
    let mut document = Document::new(ids.next_id(), template.name.clone(), template.document_type);

    for blueprint in &template.pages {
        document.pages.push(instantiate_page(blueprint, ids));
    }

    debug!(
        template_id = %template.id,
        document_id = %document.id,
        pages = document.pages.len(),
        blocks = document.block_count(),
        "Instantiated template"
    );

    document
}

/// Instantiate a single page blueprint (used when adding a page to an
/// existing document)
pub fn instantiate_page(blueprint: &PageBlueprint, ids: &mut dyn IdGenerator) -> Page {
    let mut page = Page::new(ids.next_id(), blueprint.name.clone());
    if let Some(background) = &blueprint.background {
        page.background = background.clone();
    }

    for section in &blueprint.sections {
        for seed in &section.default_blocks {
            page.blocks.push(Block::from_seed(ids.next_id(), seed));
        }
    }

    page
}
