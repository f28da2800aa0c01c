use crate::{BlockContent, BlockKind, BlockStyle, ModelError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single typed unit of content on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub struct Block {
    /// Stable for the block's lifetime
    pub id: String,
    pub content: BlockContent,
    pub style: Option<BlockStyle>,
}

/// A block without an id yet: what templates and the add-block menu hand
/// to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct BlockSeed {
    pub content: BlockContent,
    pub style: Option<BlockStyle>,
}

/// Wire shape shared by blocks and seeds
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<BlockStyle>,
}

impl RawBlock {
    fn new(id: Option<String>, content: &BlockContent, style: Option<BlockStyle>) -> Self {
        Self {
            id,
            kind: content.type_name().to_string(),
            // Content structs only hold strings, numbers and lists.
            content: content.to_value().unwrap_or(Value::Null),
            style,
        }
    }
}

impl TryFrom<RawBlock> for Block {
    type Error = ModelError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let id = raw.id.filter(|id| !id.is_empty()).ok_or(ModelError::MissingId)?;
        Ok(Self {
            id,
            content: BlockContent::from_parts(&raw.kind, raw.content),
            style: raw.style,
        })
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        RawBlock::new(Some(block.id), &block.content, block.style)
    }
}

impl From<RawBlock> for BlockSeed {
    fn from(raw: RawBlock) -> Self {
        Self {
            content: BlockContent::from_parts(&raw.kind, raw.content),
            style: raw.style,
        }
    }
}

impl From<BlockSeed> for RawBlock {
    fn from(seed: BlockSeed) -> Self {
        RawBlock::new(None, &seed.content, seed.style)
    }
}

impl Block {
    /// Instantiate a seed under a fresh id
    pub fn from_seed(id: impl Into<String>, seed: &BlockSeed) -> Self {
        Self {
            id: id.into(),
            content: seed.content.clone(),
            style: seed.style.clone(),
        }
    }

    /// `None` when the block's kind is unknown to this build
    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }

    pub fn type_name(&self) -> &str {
        self.content.type_name()
    }

    /// Deep copy under a new id
    pub fn duplicate(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: self.content.clone(),
            style: self.style.clone(),
        }
    }

    /// Strip the id, turning the block back into a seed
    pub fn to_seed(&self) -> BlockSeed {
        BlockSeed {
            content: self.content.clone(),
            style: self.style.clone(),
        }
    }
}

impl BlockSeed {
    pub fn new(content: BlockContent) -> Self {
        Self { content, style: None }
    }

    pub fn of_kind(kind: BlockKind) -> Self {
        Self::new(BlockContent::default_for(kind))
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, HeadingContent};
    use serde_json::json;

    #[test]
    fn test_block_wire_shape() {
        let block = Block {
            id: "b1".to_string(),
            content: BlockContent::Heading(HeadingContent {
                text: "Case Study Title".to_string(),
                level: 1,
            }),
            style: Some(BlockStyle::aligned(Alignment::Center)),
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "b1",
                "type": "heading",
                "content": { "text": "Case Study Title", "level": 1 },
                "style": { "alignment": "center" }
            })
        );

        let back: Block = serde_json::from_value(value).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_block_without_id_is_rejected() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "type": "paragraph",
            "content": { "text": "hi" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_block_survives_round_trip() {
        let value = json!({
            "id": "b9",
            "type": "video-embed",
            "content": { "src": "https://example.com/v.mp4", "autoplay": true }
        });

        let block: Block = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(block.kind(), None);
        assert_eq!(block.type_name(), "video-embed");
        assert_eq!(serde_json::to_value(&block).unwrap(), value);
    }

    #[test]
    fn test_known_kind_with_newer_fields_is_kept_verbatim() {
        let value = json!({
            "id": "b3",
            "type": "heading",
            "content": { "eyebrow": "NEW", "level": 1, "text": "T" }
        });

        let block: Block = serde_json::from_value(value.clone()).unwrap();
        assert!(!block.content.is_supported());
        assert_eq!(block.type_name(), "heading");
        assert_eq!(serde_json::to_value(&block).unwrap(), value);

        let nested = json!({
            "id": "b4",
            "type": "stat-grid",
            "content": { "stats": [{ "value": "1", "label": "L", "trend": "up" }] }
        });
        let block: Block = serde_json::from_value(nested.clone()).unwrap();
        assert!(!block.content.is_supported());
        assert_eq!(serde_json::to_value(&block).unwrap(), nested);
    }

    #[test]
    fn test_seed_has_no_id() {
        let seed = BlockSeed::of_kind(BlockKind::Divider);
        let value = serde_json::to_value(&seed).unwrap();

        assert_eq!(value, json!({ "type": "divider", "content": { "variant": "line" } }));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Block::from_seed("a", &BlockSeed::of_kind(BlockKind::BulletList));
        let mut copy = original.duplicate("b");

        if let BlockContent::BulletList(list) = &mut copy.content {
            list.items.push("Fourth point".to_string());
        }

        assert_ne!(copy.content, original.content);
        assert_eq!(original.id, "a");
        assert_eq!(copy.id, "b");
    }
}
