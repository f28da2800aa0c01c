//! # Pages and Documents
//!
//! A document is an ordered list of pages; a page is an ordered list of
//! blocks drawn over a background. Render order is vector order.

use crate::Block;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    #[default]
    Presentation,
    CaseStudy,
    Whitepaper,
    Proposal,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Presentation,
        DocumentType::CaseStudy,
        DocumentType::Whitepaper,
        DocumentType::Proposal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Presentation => "presentation",
            DocumentType::CaseStudy => "case-study",
            DocumentType::Whitepaper => "whitepaper",
            DocumentType::Proposal => "proposal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Presentation => "Presentation",
            DocumentType::CaseStudy => "Case Study",
            DocumentType::Whitepaper => "Whitepaper",
            DocumentType::Proposal => "Proposal",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown document type '{}'", s))
    }
}

/// Scrim drawn over an image background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    #[default]
    None,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Background {
    Solid {
        color: String,
    },
    Gradient {
        from: String,
        to: String,
        #[serde(default = "default_gradient_angle")]
        angle: u16,
    },
    Image {
        url: String,
        #[serde(default)]
        overlay: Overlay,
    },
}

fn default_gradient_angle() -> u16 {
    135
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid {
            color: "#FFFFFF".to_string(),
        }
    }
}

impl Background {
    pub fn solid(color: impl Into<String>) -> Self {
        Background::Solid { color: color.into() }
    }

    pub fn gradient(from: impl Into<String>, to: impl Into<String>) -> Self {
        Background::Gradient {
            from: from.into(),
            to: to.into(),
            angle: default_gradient_angle(),
        }
    }

    pub fn image(url: impl Into<String>, overlay: Overlay) -> Self {
        Background::Image {
            url: url.into(),
            overlay,
        }
    }
}

/// One slide, or one page of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            background: Background::default(),
            blocks: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn block_ids(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.id.as_str()).collect()
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.blocks.iter().all(|b| seen.insert(b.id.as_str()))
    }
}

/// An ordered list of pages plus the type of the template that seeded it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, document_type: DocumentType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            document_type,
            pages: Vec::new(),
        }
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Every block id across all pages, in document order
    pub fn block_ids(&self) -> Vec<&str> {
        self.pages.iter().flat_map(|p| p.block_ids()).collect()
    }

    pub fn block_count(&self) -> usize {
        self.pages.iter().map(|p| p.blocks.len()).sum()
    }

    /// Insert a page after `after_id`, or append when absent or unknown
    pub fn add_page(&mut self, page: Page, after_id: Option<&str>) {
        let index = after_id
            .and_then(|id| self.pages.iter().position(|p| p.id == id))
            .map(|pos| pos + 1)
            .unwrap_or(self.pages.len());
        self.pages.insert(index, page);
    }

    /// Remove a page; returns it if it existed
    pub fn remove_page(&mut self, id: &str) -> Option<Page> {
        let pos = self.pages.iter().position(|p| p.id == id)?;
        Some(self.pages.remove(pos))
    }

    /// Move the page at `from` to `to`, clamping both to the page range
    pub fn move_page(&mut self, from: usize, to: usize) {
        if self.pages.is_empty() {
            return;
        }
        let last = self.pages.len() - 1;
        let (from, to) = (from.min(last), to.min(last));
        if from != to {
            let page = self.pages.remove(from);
            self.pages.insert(to, page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_pages(ids: &[&str]) -> Document {
        let mut doc = Document::new("d1", "Deck", DocumentType::Presentation);
        for id in ids {
            doc.add_page(Page::new(*id, format!("Page {}", id)), None);
        }
        doc
    }

    fn page_ids(doc: &Document) -> Vec<&str> {
        doc.pages.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_background_wire_shape() {
        let bg = Background::image("https://cdn.example.com/hero.jpg", Overlay::Dark);
        assert_eq!(
            serde_json::to_value(&bg).unwrap(),
            json!({ "type": "image", "url": "https://cdn.example.com/hero.jpg", "overlay": "dark" })
        );

        let parsed: Background = serde_json::from_value(json!({ "type": "image", "url": "x.png" })).unwrap();
        assert_eq!(parsed, Background::image("x.png", Overlay::None));
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: Page = serde_json::from_value(json!({ "id": "p1", "name": "Cover" })).unwrap();
        assert_eq!(page.background, Background::default());
        assert!(page.blocks.is_empty());
    }

    #[test]
    fn test_add_page_after() {
        let mut doc = doc_with_pages(&["a", "c"]);
        doc.add_page(Page::new("b", "B"), Some("a"));
        doc.add_page(Page::new("d", "D"), Some("missing"));

        assert_eq!(page_ids(&doc), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_move_page_clamps() {
        let mut doc = doc_with_pages(&["a", "b", "c"]);
        doc.move_page(0, 10);
        assert_eq!(page_ids(&doc), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_remove_page() {
        let mut doc = doc_with_pages(&["a", "b"]);
        assert!(doc.remove_page("a").is_some());
        assert!(doc.remove_page("a").is_none());
        assert_eq!(page_ids(&doc), vec!["b"]);
    }

    #[test]
    fn test_document_type_names() {
        assert_eq!(serde_json::to_string(&DocumentType::CaseStudy).unwrap(), "\"case-study\"");
        assert_eq!("whitepaper".parse::<DocumentType>().unwrap(), DocumentType::Whitepaper);
        assert!("memo".parse::<DocumentType>().is_err());
    }
}
