//! # Block Type Registry
//!
//! The fixed, ordered list of block templates shown in the add-block menu.
//! Reference data: built into the binary and never mutated.

use crate::{BlockContent, BlockKind, BlockSeed};
use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// Menu grouping, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BlockCategory {
    Text,
    Data,
    Media,
    Layout,
}

impl BlockCategory {
    pub const ALL: [BlockCategory; 4] = [
        BlockCategory::Text,
        BlockCategory::Data,
        BlockCategory::Media,
        BlockCategory::Layout,
    ];
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockCategory::Text => "Text",
            BlockCategory::Data => "Data",
            BlockCategory::Media => "Media",
            BlockCategory::Layout => "Layout",
        };
        f.write_str(name)
    }
}

/// Registry entry for one block kind.
///
/// Serializes as `{type, label, icon, category, defaultContent}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTemplate {
    pub kind: BlockKind,
    pub label: &'static str,
    /// Symbolic icon name, resolved by the UI
    pub icon: &'static str,
    pub category: BlockCategory,
}

impl BlockTemplate {
    /// A fresh copy of the kind's default payload
    pub fn default_content(&self) -> BlockContent {
        BlockContent::default_for(self.kind)
    }

    pub fn seed(&self) -> BlockSeed {
        BlockSeed::new(self.default_content())
    }
}

impl Serialize for BlockTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let default_content = self.default_content().to_value().map_err(S::Error::custom)?;

        let mut state = serializer.serialize_struct("BlockTemplate", 5)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("label", self.label)?;
        state.serialize_field("icon", self.icon)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("defaultContent", &default_content)?;
        state.end()
    }
}

const fn entry(kind: BlockKind, label: &'static str, icon: &'static str, category: BlockCategory) -> BlockTemplate {
    BlockTemplate {
        kind,
        label,
        icon,
        category,
    }
}

static TEMPLATES: [BlockTemplate; 15] = [
    entry(BlockKind::Heading, "Heading", "type", BlockCategory::Text),
    entry(BlockKind::Paragraph, "Paragraph", "align-left", BlockCategory::Text),
    entry(BlockKind::BulletList, "Bullet List", "list", BlockCategory::Text),
    entry(BlockKind::StatCard, "Stat Card", "trending-up", BlockCategory::Data),
    entry(BlockKind::StatGrid, "Stat Grid", "layout-grid", BlockCategory::Data),
    entry(BlockKind::Image, "Image", "image", BlockCategory::Media),
    entry(BlockKind::Chart, "Chart", "bar-chart", BlockCategory::Data),
    entry(BlockKind::SpecTable, "Spec Table", "table", BlockCategory::Data),
    entry(BlockKind::Quote, "Quote", "quote", BlockCategory::Text),
    entry(BlockKind::Callout, "Callout", "info", BlockCategory::Text),
    entry(BlockKind::Divider, "Divider", "minus", BlockCategory::Layout),
    entry(BlockKind::Cta, "Call to Action", "mouse-pointer-click", BlockCategory::Layout),
    entry(BlockKind::IdentityCard, "Identity Card", "id-card", BlockCategory::Media),
    entry(BlockKind::ChallengeSolution, "Challenge & Solution", "columns", BlockCategory::Layout),
    entry(BlockKind::ResultsGrid, "Results Grid", "award", BlockCategory::Data),
];

/// Read-only view over the built-in block templates
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    pub fn all() -> &'static [BlockTemplate] {
        &TEMPLATES
    }

    pub fn lookup(kind: BlockKind) -> Option<&'static BlockTemplate> {
        TEMPLATES.iter().find(|t| t.kind == kind)
    }

    /// Lookup by serialized kind name; `None` for kinds this build does not know
    pub fn lookup_name(name: &str) -> Option<&'static BlockTemplate> {
        let kind = name.parse::<BlockKind>().ok()?;
        Self::lookup(kind)
    }

    pub fn by_category(category: BlockCategory) -> impl Iterator<Item = &'static BlockTemplate> {
        TEMPLATES.iter().filter(move |t| t.category == category)
    }

    /// Templates grouped by category, categories in menu order, empty groups skipped
    pub fn grouped() -> Vec<(BlockCategory, Vec<&'static BlockTemplate>)> {
        BlockCategory::ALL
            .iter()
            .map(|category| (*category, Self::by_category(*category).collect::<Vec<_>>()))
            .filter(|(_, templates)| !templates.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_registered_once() {
        for kind in BlockKind::ALL {
            let count = Registry::all().iter().filter(|t| t.kind == kind).count();
            assert_eq!(count, 1, "{} registered {} times", kind, count);
        }
    }

    #[test]
    fn test_registry_order_matches_kind_order() {
        let kinds: Vec<_> = Registry::all().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, BlockKind::ALL.to_vec());
    }

    #[test]
    fn test_stat_card_default_content() {
        let template = Registry::lookup(BlockKind::StatCard).unwrap();
        match template.default_content() {
            BlockContent::StatCard(card) => {
                assert_eq!(card.value, "0");
                assert_eq!(card.label, "Label");
            }
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(Registry::lookup_name("spec-table").map(|t| t.label), Some("Spec Table"));
        assert!(Registry::lookup_name("carousel").is_none());
    }

    #[test]
    fn test_serialized_entry_carries_default_content() {
        let value = serde_json::to_value(Registry::lookup(BlockKind::StatCard).unwrap()).unwrap();
        assert_eq!(value["type"], "stat-card");
        assert_eq!(value["category"], "Data");
        assert_eq!(value["defaultContent"], serde_json::json!({ "value": "0", "label": "Label" }));
    }

    #[test]
    fn test_grouped_covers_all_templates() {
        let groups = Registry::grouped();
        let categories: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, BlockCategory::ALL.to_vec());

        let total: usize = groups.iter().map(|(_, t)| t.len()).sum();
        assert_eq!(total, Registry::all().len());
    }
}
