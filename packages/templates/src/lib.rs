//! # Folio Templates
//!
//! Static seed data for new documents, and the algorithm that turns a
//! template into a live, independently mutable [`Document`].
//!
//! ```text
//! DocumentTemplate ─▶ PageBlueprint* ─▶ SectionBlueprint* ─▶ BlockSeed*
//!        │ instantiate()
//!        ▼
//! Document ─▶ Page* ─▶ Block*   (sections flattened, fresh ids everywhere)
//! ```
//!
//! Section constraints (`allowedBlockTypes`, `requiredBlockTypes`,
//! `maxBlocks`) describe how a template was authored. They are checked by
//! `folio-linter`, not by the editor: once instantiated, pages are freeform.
//!
//! [`Document`]: folio_model::Document

mod blueprint;
mod catalog;
mod error;
mod instantiate;
mod selector;

pub use blueprint::{DocumentTemplate, PageBlueprint, SectionBlueprint, TemplateCategory};
pub use catalog::{Catalog, CATALOG_VERSION};
pub use error::TemplateError;
pub use instantiate::{instantiate, instantiate_page};
pub use selector::TemplateSelector;
