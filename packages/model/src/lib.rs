//! # Folio Model
//!
//! Data model for the Folio document builder.
//!
//! ```text
//! Document ──▶ Page* ──▶ Block*
//!                │         ├─ id      (stable for the block's lifetime)
//!                │         ├─ content (payload keyed by block kind)
//!                │         └─ style?  (alignment / width)
//!                └─ background (solid | gradient | image + overlay)
//! ```
//!
//! The model is plain data. Editing operations live in `folio-editor`,
//! template seeds in `folio-templates`.
//!
//! Block content is a closed sum type ([`BlockContent`]) so every consumer
//! that matches on it is checked for exhaustiveness. Documents written by a
//! newer version may carry kinds this build does not know; those load as
//! [`BlockContent::Unsupported`] and round-trip their raw JSON untouched.

mod block;
mod content;
mod error;
mod id_generator;
mod page;
mod registry;
mod style;

pub use block::{Block, BlockSeed};
pub use content::{
    BlockContent, BlockKind, BulletListContent, CalloutContent, CalloutVariant, ChallengeSolutionContent,
    ChartContent, ChartPoint, ChartType, ContentPatch, CtaContent, DividerContent, DividerVariant,
    HeadingContent, IdentityCardContent, ImageContent, ParagraphContent, QuoteContent, ResultsGridContent,
    SpecRow, SpecTableContent, Stat, StatCardContent, StatGridContent,
};
pub use error::ModelError;
pub use id_generator::{seed_for, IdGenerator, SequentialIds};
pub use page::{Background, Document, DocumentType, Overlay, Page};
pub use registry::{BlockCategory, BlockTemplate, Registry};
pub use style::{Alignment, BlockStyle, Width};
