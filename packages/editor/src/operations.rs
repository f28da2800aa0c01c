//! # Page Operations
//!
//! The five block operations the canvas issues against a page.
//!
//! ## Semantics
//!
//! ### Not-found
//! - References to missing blocks come from stale UI state, so they are
//!   no-ops rather than errors
//! - A missing anchor for `AddBlock` appends at the end
//!
//! ### UpdateBlock
//! - Shallow merge: each patch key replaces one content field
//! - A patch that does not fit the block's kind leaves the page untouched
//! - An empty patch, or one that changes nothing, is a no-op
//!
//! ### DuplicateBlock
//! - Deep copy placed right after the original, under a fresh id
//!
//! ### ReorderBlocks
//! - Both indices are clamped to the block range
//! - Only order changes; the set of ids is preserved

use folio_model::{Block, BlockSeed, BlockStyle, ContentPatch, IdGenerator, ModelError, Page};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serializable form of a page operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum PageOp {
    /// Insert a new block after `after`, or at the end
    AddBlock {
        seed: BlockSeed,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after: Option<String>,
    },

    /// Merge partial content and style into a block
    UpdateBlock {
        block_id: String,
        #[serde(default)]
        content: ContentPatch,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<BlockStyle>,
    },

    /// Remove a block
    DeleteBlock { block_id: String },

    /// Copy a block and insert the copy after it
    DuplicateBlock { block_id: String },

    /// Move the block at `from` to `to`
    ReorderBlocks { from: usize, to: usize },
}

/// What an operation did to the page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpOutcome {
    /// Whether the page changed
    pub changed: bool,

    /// Id of the block created by add/duplicate
    pub created: Option<String>,
}

impl OpOutcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            created: None,
        }
    }

    fn created(id: String) -> Self {
        Self {
            changed: true,
            created: Some(id),
        }
    }
}

impl PageOp {
    /// Apply to a page. Only a content patch that does not fit its block
    /// can fail; not-found references are reported as unchanged.
    pub fn apply(&self, page: &mut Page, ids: &mut dyn IdGenerator) -> Result<OpOutcome, ModelError> {
        match self {
            PageOp::AddBlock { seed, after } => Ok(OpOutcome::created(add_block(page, seed, after.as_deref(), ids))),

            PageOp::UpdateBlock {
                block_id,
                content,
                style,
            } => {
                if update_block(page, block_id, content, style.as_ref())? {
                    Ok(OpOutcome::changed())
                } else {
                    Ok(OpOutcome::unchanged())
                }
            }

            PageOp::DeleteBlock { block_id } => match delete_block(page, block_id) {
                Some(_) => Ok(OpOutcome::changed()),
                None => Ok(OpOutcome::unchanged()),
            },

            PageOp::DuplicateBlock { block_id } => match duplicate_block(page, block_id, ids) {
                Some(id) => Ok(OpOutcome::created(id)),
                None => Ok(OpOutcome::unchanged()),
            },

            PageOp::ReorderBlocks { from, to } => {
                if reorder_blocks(page, *from, *to) {
                    Ok(OpOutcome::changed())
                } else {
                    Ok(OpOutcome::unchanged())
                }
            }
        }
    }

    /// Short label for history entries
    pub fn describe(&self) -> &'static str {
        match self {
            PageOp::AddBlock { .. } => "Add block",
            PageOp::UpdateBlock { .. } => "Edit block",
            PageOp::DeleteBlock { .. } => "Delete block",
            PageOp::DuplicateBlock { .. } => "Duplicate block",
            PageOp::ReorderBlocks { .. } => "Move block",
        }
    }
}

/// Draw an id from the generator that is not already used on the page
fn fresh_id(page: &Page, ids: &mut dyn IdGenerator) -> String {
    let id = ids.next_id();
    if page.block(&id).is_none() {
        return id;
    }

    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", id, n);
        if page.block(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

/// Insert a block built from `seed`; returns the new block's id
pub fn add_block(page: &mut Page, seed: &BlockSeed, after: Option<&str>, ids: &mut dyn IdGenerator) -> String {
    let id = fresh_id(page, ids);
    let block = Block::from_seed(id.clone(), seed);

    let index = match after {
        Some(anchor) => match page.position(anchor) {
            Some(pos) => pos + 1,
            None => {
                debug!(anchor = %anchor, "Anchor block not found, appending");
                page.blocks.len()
            }
        },
        None => page.blocks.len(),
    };

    page.blocks.insert(index, block);
    id
}

/// Merge a content patch and optional style into a block.
///
/// Returns `Ok(false)` when the block does not exist or nothing would change.
pub fn update_block(
    page: &mut Page,
    block_id: &str,
    content: &ContentPatch,
    style: Option<&BlockStyle>,
) -> Result<bool, ModelError> {
    let Some(block) = page.block_mut(block_id) else {
        debug!(block_id = %block_id, "Update of missing block ignored");
        return Ok(false);
    };

    if content.is_empty() && style.is_none() {
        return Ok(false);
    }

    // Patch a copy so a failed merge leaves the block as it was
    let mut next = block.content.clone();
    if !content.is_empty() {
        next.apply_patch(content)?;
    }

    let mut next_style = block.style.clone();
    if let Some(partial) = style {
        next_style.get_or_insert_with(BlockStyle::default).merge(partial);
    }

    if next == block.content && next_style == block.style {
        debug!(block_id = %block_id, "Update left block unchanged");
        return Ok(false);
    }

    block.content = next;
    block.style = next_style;
    Ok(true)
}

/// Remove a block; returns it if it existed
pub fn delete_block(page: &mut Page, block_id: &str) -> Option<Block> {
    match page.position(block_id) {
        Some(pos) => Some(page.blocks.remove(pos)),
        None => {
            debug!(block_id = %block_id, "Delete of missing block ignored");
            None
        }
    }
}

/// Insert a deep copy right after the original; returns the copy's id
pub fn duplicate_block(page: &mut Page, block_id: &str, ids: &mut dyn IdGenerator) -> Option<String> {
    let Some(pos) = page.position(block_id) else {
        debug!(block_id = %block_id, "Duplicate of missing block ignored");
        return None;
    };

    let id = fresh_id(page, ids);
    let copy = page.blocks[pos].duplicate(id.clone());
    page.blocks.insert(pos + 1, copy);
    Some(id)
}

/// Move the block at `from` to `to`; returns whether the order changed
pub fn reorder_blocks(page: &mut Page, from: usize, to: usize) -> bool {
    if page.blocks.is_empty() {
        return false;
    }

    let last = page.blocks.len() - 1;
    let (from, to) = (from.min(last), to.min(last));
    if from == to {
        return false;
    }

    let block = page.blocks.remove(from);
    page.blocks.insert(to, block);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{BlockContent, BlockKind, SequentialIds};
    use serde_json::json;

    fn page_with(kinds: &[BlockKind]) -> Page {
        let mut page = Page::new("p", "Page");
        let mut ids = SequentialIds::from_seed("init");
        for kind in kinds {
            add_block(&mut page, &BlockSeed::of_kind(*kind), None, &mut ids);
        }
        page
    }

    fn kinds(page: &Page) -> Vec<BlockKind> {
        page.blocks.iter().filter_map(|b| b.kind()).collect()
    }

    #[test]
    fn test_op_serialization() {
        let op = PageOp::UpdateBlock {
            block_id: "b1".to_string(),
            content: json!({ "text": "Hello" }).as_object().unwrap().clone(),
            style: None,
        };

        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            json!({ "op": "update-block", "blockId": "b1", "content": { "text": "Hello" } })
        );

        let back: PageOp = serde_json::from_value(value).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn test_add_after_anchor() {
        let mut page = page_with(&[BlockKind::Heading, BlockKind::Paragraph]);
        let anchor = page.blocks[0].id.clone();

        add_block(
            &mut page,
            &BlockSeed::of_kind(BlockKind::Divider),
            Some(&anchor),
            &mut SequentialIds::from_seed("x"),
        );

        assert_eq!(kinds(&page), vec![BlockKind::Heading, BlockKind::Divider, BlockKind::Paragraph]);
    }

    #[test]
    fn test_add_with_missing_anchor_appends() {
        let mut page = page_with(&[BlockKind::Heading]);
        add_block(
            &mut page,
            &BlockSeed::of_kind(BlockKind::Quote),
            Some("gone"),
            &mut SequentialIds::from_seed("x"),
        );

        assert_eq!(kinds(&page), vec![BlockKind::Heading, BlockKind::Quote]);
    }

    #[test]
    fn test_add_never_reuses_an_id() {
        let mut page = page_with(&[BlockKind::Heading]);
        let existing = page.blocks[0].id.clone();
        let mut stuck = || existing.clone();

        let a = add_block(&mut page, &BlockSeed::of_kind(BlockKind::Paragraph), None, &mut stuck);
        let b = add_block(&mut page, &BlockSeed::of_kind(BlockKind::Paragraph), None, &mut stuck);

        assert_ne!(a, existing);
        assert_ne!(b, existing);
        assert_ne!(a, b);
        assert!(page.has_unique_ids());
    }

    #[test]
    fn test_update_missing_block_is_noop() {
        let mut page = page_with(&[BlockKind::Heading]);
        let before = page.clone();

        let patch = json!({ "text": "x" }).as_object().unwrap().clone();
        assert!(!update_block(&mut page, "missing", &patch, None).unwrap());
        assert_eq!(page, before);
    }

    #[test]
    fn test_update_style_only() {
        let mut page = page_with(&[BlockKind::Heading]);
        let id = page.blocks[0].id.clone();
        let content_before = page.blocks[0].content.clone();

        let style = BlockStyle::aligned(folio_model::Alignment::Right);
        assert!(update_block(&mut page, &id, &ContentPatch::new(), Some(&style)).unwrap());

        assert_eq!(page.blocks[0].content, content_before);
        assert_eq!(page.blocks[0].style, Some(style));
    }

    #[test]
    fn test_empty_or_identical_update_is_noop() {
        let mut page = page_with(&[BlockKind::Heading]);
        let id = page.blocks[0].id.clone();
        let before = page.clone();

        assert!(!update_block(&mut page, &id, &ContentPatch::new(), None).unwrap());

        let text = before.blocks[0].content.plain_text();
        let same = json!({ "text": text }).as_object().unwrap().clone();
        assert!(!update_block(&mut page, &id, &same, None).unwrap());
        assert_eq!(page, before);
    }

    #[test]
    fn test_failed_update_leaves_page_untouched() {
        let mut page = page_with(&[BlockKind::StatCard]);
        let id = page.blocks[0].id.clone();
        let before = page.clone();

        let patch = json!({ "value": "1", "label": 7 }).as_object().unwrap().clone();
        assert!(update_block(&mut page, &id, &patch, None).is_err());
        assert_eq!(page, before);
    }

    #[test]
    fn test_duplicate_places_copy_after_original() {
        let mut page = page_with(&[BlockKind::Heading, BlockKind::Paragraph]);
        let original = page.blocks[0].id.clone();

        let copy = duplicate_block(&mut page, &original, &mut SequentialIds::from_seed("d")).unwrap();

        assert_eq!(page.blocks[1].id, copy);
        assert_eq!(page.blocks[1].content, page.blocks[0].content);
        assert_eq!(kinds(&page), vec![BlockKind::Heading, BlockKind::Heading, BlockKind::Paragraph]);
    }

    #[test]
    fn test_reorder_clamps_and_detects_noop() {
        let mut page = page_with(&[BlockKind::Heading, BlockKind::Paragraph, BlockKind::Quote]);

        assert!(!reorder_blocks(&mut page, 1, 1));
        assert!(!reorder_blocks(&mut page, 7, 2));
        assert!(reorder_blocks(&mut page, 0, 99));
        assert_eq!(kinds(&page), vec![BlockKind::Paragraph, BlockKind::Quote, BlockKind::Heading]);
    }

    #[test]
    fn test_apply_reports_outcome() {
        let mut page = page_with(&[BlockKind::Heading]);
        let mut ids = SequentialIds::from_seed("op");

        let outcome = PageOp::AddBlock {
            seed: BlockSeed::of_kind(BlockKind::Image),
            after: None,
        }
        .apply(&mut page, &mut ids)
        .unwrap();
        assert_eq!(outcome.created.as_deref(), Some("op-1"));

        let outcome = PageOp::DeleteBlock {
            block_id: "missing".to_string(),
        }
        .apply(&mut page, &mut ids)
        .unwrap();
        assert!(!outcome.changed);

        assert!(matches!(page.blocks[1].content, BlockContent::Image(_)));
    }
}
