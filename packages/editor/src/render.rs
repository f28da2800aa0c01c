//! # Renderer Dispatch
//!
//! Routes each block to the renderer for its kind. The match over
//! [`BlockContent`] is exhaustive, so adding a kind fails to compile until
//! every renderer handles it. Content that this build cannot read goes to
//! [`BlockRenderer::unsupported`], which draws an inert placeholder.

use folio_model::{
    Block, BlockContent, BlockKind, BulletListContent, CalloutContent, ChallengeSolutionContent, ChartContent,
    CtaContent, DividerContent, HeadingContent, IdentityCardContent, ImageContent, ParagraphContent,
    QuoteContent, ResultsGridContent, SpecTableContent, StatCardContent, StatGridContent,
};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Which renderer a block goes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "kebab-case")]
pub enum RenderTarget {
    Kind { kind: BlockKind },
    Unsupported { kind: String },
}

pub fn dispatch(block: &Block) -> RenderTarget {
    match block.kind() {
        Some(kind) => RenderTarget::Kind { kind },
        None => RenderTarget::Unsupported {
            kind: block.type_name().to_string(),
        },
    }
}

/// One method per block kind. `block` gives access to the id and style.
pub trait BlockRenderer {
    type Output;

    fn heading(&mut self, block: &Block, content: &HeadingContent) -> Self::Output;
    fn paragraph(&mut self, block: &Block, content: &ParagraphContent) -> Self::Output;
    fn bullet_list(&mut self, block: &Block, content: &BulletListContent) -> Self::Output;
    fn stat_card(&mut self, block: &Block, content: &StatCardContent) -> Self::Output;
    fn stat_grid(&mut self, block: &Block, content: &StatGridContent) -> Self::Output;
    fn image(&mut self, block: &Block, content: &ImageContent) -> Self::Output;
    fn chart(&mut self, block: &Block, content: &ChartContent) -> Self::Output;
    fn spec_table(&mut self, block: &Block, content: &SpecTableContent) -> Self::Output;
    fn quote(&mut self, block: &Block, content: &QuoteContent) -> Self::Output;
    fn callout(&mut self, block: &Block, content: &CalloutContent) -> Self::Output;
    fn divider(&mut self, block: &Block, content: &DividerContent) -> Self::Output;
    fn cta(&mut self, block: &Block, content: &CtaContent) -> Self::Output;
    fn identity_card(&mut self, block: &Block, content: &IdentityCardContent) -> Self::Output;
    fn challenge_solution(&mut self, block: &Block, content: &ChallengeSolutionContent) -> Self::Output;
    fn results_grid(&mut self, block: &Block, content: &ResultsGridContent) -> Self::Output;

    /// Placeholder for content this build cannot render. Must not fail.
    fn unsupported(&mut self, block: &Block, kind: &str, raw: &Value) -> Self::Output;
}

pub fn render_block<R: BlockRenderer + ?Sized>(renderer: &mut R, block: &Block) -> R::Output {
    match &block.content {
        BlockContent::Heading(c) => renderer.heading(block, c),
        BlockContent::Paragraph(c) => renderer.paragraph(block, c),
        BlockContent::BulletList(c) => renderer.bullet_list(block, c),
        BlockContent::StatCard(c) => renderer.stat_card(block, c),
        BlockContent::StatGrid(c) => renderer.stat_grid(block, c),
        BlockContent::Image(c) => renderer.image(block, c),
        BlockContent::Chart(c) => renderer.chart(block, c),
        BlockContent::SpecTable(c) => renderer.spec_table(block, c),
        BlockContent::Quote(c) => renderer.quote(block, c),
        BlockContent::Callout(c) => renderer.callout(block, c),
        BlockContent::Divider(c) => renderer.divider(block, c),
        BlockContent::Cta(c) => renderer.cta(block, c),
        BlockContent::IdentityCard(c) => renderer.identity_card(block, c),
        BlockContent::ChallengeSolution(c) => renderer.challenge_solution(block, c),
        BlockContent::ResultsGrid(c) => renderer.results_grid(block, c),
        BlockContent::Unsupported { kind, raw } => {
            warn!(block_id = %block.id, kind = %kind, "Rendering placeholder for unsupported block");
            renderer.unsupported(block, kind, raw)
        }
    }
}

/// Render every block of a page in order
pub fn render_blocks<'a, R, I>(renderer: &mut R, blocks: I) -> Vec<R::Output>
where
    R: BlockRenderer + ?Sized,
    I: IntoIterator<Item = &'a Block>,
{
    blocks.into_iter().map(|block| render_block(renderer, block)).collect()
}
