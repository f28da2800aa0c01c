use folio_model::{
    Alignment, Background, BlockContent, BlockKind, BlockSeed, BlockStyle, DocumentType, HeadingContent,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Blank,
    Business,
    Marketing,
    Technical,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateCategory::Blank => "blank",
            TemplateCategory::Business => "business",
            TemplateCategory::Marketing => "marketing",
            TemplateCategory::Technical => "technical",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blank" => Ok(TemplateCategory::Blank),
            "business" => Ok(TemplateCategory::Business),
            "marketing" => Ok(TemplateCategory::Marketing),
            "technical" => Ok(TemplateCategory::Technical),
            other => Err(format!("unknown template category '{}'", other)),
        }
    }
}

/// Static seed for a new document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub document_type: DocumentType,
    pub pages: Vec<PageBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBlueprint {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    pub sections: Vec<SectionBlueprint>,
}

/// Authoring-time grouping of blocks within a page blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlueprint {
    pub id: String,
    pub name: String,
    pub allowed_block_types: BTreeSet<BlockKind>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub required_block_types: BTreeSet<BlockKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_blocks: Option<usize>,
    #[serde(default)]
    pub default_blocks: Vec<BlockSeed>,
    /// Fixed height in pixels, when the section should not grow with content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_height: Option<u32>,
    #[serde(default)]
    pub placeholder: String,
}

impl DocumentTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: TemplateCategory,
        document_type: DocumentType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            document_type,
            pages: Vec::new(),
        }
    }

    pub fn with_page(mut self, page: PageBlueprint) -> Self {
        self.pages.push(page);
        self
    }

    /// The "start from scratch" template offered for every document type:
    /// one page, one unconstrained section, one title heading.
    pub fn blank(document_type: DocumentType) -> Self {
        let title = BlockSeed::new(BlockContent::Heading(HeadingContent {
            text: format!("{} Title", document_type.label()),
            level: 1,
        }))
        .with_style(BlockStyle::aligned(Alignment::Left));

        Self::new(
            format!("blank-{}", document_type),
            format!("Blank {}", document_type.label()),
            "Start from an empty page",
            TemplateCategory::Blank,
            document_type,
        )
        .with_page(
            PageBlueprint::new("page-1", "Page 1").with_section(
                SectionBlueprint::new("content", "Content", BlockKind::ALL)
                    .with_default(title)
                    .with_placeholder("Add blocks to build your page"),
            ),
        )
    }

    /// Number of blocks an instantiation of this template starts with
    pub fn block_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.sections)
            .map(|s| s.default_blocks.len())
            .sum()
    }
}

impl PageBlueprint {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background: None,
            sections: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_section(mut self, section: SectionBlueprint) -> Self {
        self.sections.push(section);
        self
    }
}

impl SectionBlueprint {
    pub fn new(id: impl Into<String>, name: impl Into<String>, allowed: impl IntoIterator<Item = BlockKind>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            allowed_block_types: allowed.into_iter().collect(),
            required_block_types: BTreeSet::new(),
            max_blocks: None,
            default_blocks: Vec::new(),
            fixed_height: None,
            placeholder: String::new(),
        }
    }

    pub fn with_default(mut self, seed: BlockSeed) -> Self {
        self.default_blocks.push(seed);
        self
    }

    pub fn with_required(mut self, required: impl IntoIterator<Item = BlockKind>) -> Self {
        self.required_block_types.extend(required);
        self
    }

    pub fn with_max_blocks(mut self, max: usize) -> Self {
        self.max_blocks = Some(max);
        self
    }

    pub fn with_fixed_height(mut self, height: u32) -> Self {
        self.fixed_height = Some(height);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn allows(&self, kind: BlockKind) -> bool {
        self.allowed_block_types.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_case_study() {
        let template = DocumentTemplate::blank(DocumentType::CaseStudy);

        assert_eq!(template.id, "blank-case-study");
        assert_eq!(template.category, TemplateCategory::Blank);
        assert_eq!(template.pages.len(), 1);
        assert_eq!(template.pages[0].sections.len(), 1);

        let seeds = &template.pages[0].sections[0].default_blocks;
        assert_eq!(seeds.len(), 1);
        match &seeds[0].content {
            BlockContent::Heading(h) => assert_eq!(h.text, "Case Study Title"),
            other => panic!("unexpected seed {:?}", other),
        }
    }

    #[test]
    fn test_section_wire_shape() {
        let section = SectionBlueprint::new("hero", "Hero", [BlockKind::Heading, BlockKind::Paragraph])
            .with_max_blocks(2)
            .with_default(BlockSeed::of_kind(BlockKind::Heading));

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["allowedBlockTypes"], serde_json::json!(["heading", "paragraph"]));
        assert_eq!(value["maxBlocks"], 2);
        assert!(value.get("requiredBlockTypes").is_none());
        assert_eq!(value["defaultBlocks"][0]["type"], "heading");
    }

    #[test]
    fn test_category_names() {
        assert_eq!("marketing".parse::<TemplateCategory>().unwrap(), TemplateCategory::Marketing);
        assert_eq!(TemplateCategory::Technical.to_string(), "technical");
        assert!("other".parse::<TemplateCategory>().is_err());
    }
}
