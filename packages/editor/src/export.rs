//! Export collaborators: turn the in-memory document into a file.

use crate::errors::EditorError;
use crate::render::{render_block, BlockRenderer};
use folio_model::{
    Block, BulletListContent, CalloutContent, ChallengeSolutionContent, ChartContent, CtaContent, DividerContent,
    DividerVariant, Document, HeadingContent, IdentityCardContent, ImageContent, ParagraphContent, QuoteContent,
    ResultsGridContent, SpecTableContent, Stat, StatCardContent, StatGridContent,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Markdown => f.write_str("markdown"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(EditorError::Export(format!("Unknown export format '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub trait Exporter {
    fn format(&self) -> ExportFormat;
    fn export(&self, document: &Document) -> Result<ExportedFile, EditorError>;
}

/// Built-in exporter for a format
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Markdown => Box::new(MarkdownExporter),
    }
}

/// File name derived from the document title: lowercase, dash-separated
pub fn file_name_for(document: &Document, format: ExportFormat) -> String {
    let mut slug = String::new();
    for c in document.title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let stem = if slug.is_empty() { document.id.as_str() } else { slug };
    format!("{}.{}", stem, format.extension())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, document: &Document) -> Result<ExportedFile, EditorError> {
        Ok(ExportedFile {
            file_name: file_name_for(document, ExportFormat::Json),
            mime_type: ExportFormat::Json.mime_type(),
            bytes: serde_json::to_vec_pretty(document)?,
        })
    }
}

/// One `##` section per page, blocks rendered in order
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn export(&self, document: &Document) -> Result<ExportedFile, EditorError> {
        let mut renderer = MarkdownRenderer;
        let mut out = format!("# {}\n", document.title);

        for page in &document.pages {
            out.push_str(&format!("\n## {}\n", page.name));
            for block in &page.blocks {
                let rendered = render_block(&mut renderer, block);
                if !rendered.is_empty() {
                    out.push('\n');
                    out.push_str(&rendered);
                    out.push('\n');
                }
            }
        }

        debug!(id = %document.id, pages = document.pages.len(), "Exported markdown");
        Ok(ExportedFile {
            file_name: file_name_for(document, ExportFormat::Markdown),
            mime_type: ExportFormat::Markdown.mime_type(),
            bytes: out.into_bytes(),
        })
    }
}

struct MarkdownRenderer;

impl MarkdownRenderer {
    fn stats(stats: &[Stat]) -> String {
        stats
            .iter()
            .map(|s| format!("- **{}** {}", s.value, s.label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl BlockRenderer for MarkdownRenderer {
    type Output = String;

    fn heading(&mut self, _: &Block, c: &HeadingContent) -> String {
        // Page titles use `##`, so block headings start one level below
        let level = (c.level as usize + 2).min(6);
        format!("{} {}", "#".repeat(level), c.text)
    }

    fn paragraph(&mut self, _: &Block, c: &ParagraphContent) -> String {
        c.text.clone()
    }

    fn bullet_list(&mut self, _: &Block, c: &BulletListContent) -> String {
        c.items.iter().map(|item| format!("- {}", item)).collect::<Vec<_>>().join("\n")
    }

    fn stat_card(&mut self, _: &Block, c: &StatCardContent) -> String {
        match &c.description {
            Some(description) => format!("**{}** {}\n\n{}", c.value, c.label, description),
            None => format!("**{}** {}", c.value, c.label),
        }
    }

    fn stat_grid(&mut self, _: &Block, c: &StatGridContent) -> String {
        Self::stats(&c.stats)
    }

    fn image(&mut self, _: &Block, c: &ImageContent) -> String {
        let Some(url) = &c.image_url else {
            return String::new();
        };
        match &c.caption {
            Some(caption) => format!("![{}]({})\n\n*{}*", c.alt, url, caption),
            None => format!("![{}]({})", c.alt, url),
        }
    }

    fn chart(&mut self, _: &Block, c: &ChartContent) -> String {
        let mut out = format!("**{}**\n\n| Label | Value |\n|---|---|", c.title);
        for point in &c.data {
            out.push_str(&format!("\n| {} | {} |", point.label, point.value));
        }
        out
    }

    fn spec_table(&mut self, _: &Block, c: &SpecTableContent) -> String {
        let mut out = String::new();
        if let Some(title) = &c.title {
            out.push_str(&format!("**{}**\n\n", title));
        }
        out.push_str("| Property | Value |\n|---|---|");
        for row in &c.rows {
            out.push_str(&format!("\n| {} | {} |", row.label, row.value));
        }
        out
    }

    fn quote(&mut self, _: &Block, c: &QuoteContent) -> String {
        let mut out = format!("> {}", c.text);
        match (&c.author, &c.role) {
            (Some(author), Some(role)) => out.push_str(&format!("\n>\n> *{}, {}*", author, role)),
            (Some(author), None) => out.push_str(&format!("\n>\n> *{}*", author)),
            _ => {}
        }
        out
    }

    fn callout(&mut self, _: &Block, c: &CalloutContent) -> String {
        match &c.title {
            Some(title) => format!("> **{}**\n> {}", title, c.text),
            None => format!("> {}", c.text),
        }
    }

    fn divider(&mut self, _: &Block, c: &DividerContent) -> String {
        match c.variant {
            DividerVariant::Space => String::new(),
            DividerVariant::Line | DividerVariant::Dotted => "---".to_string(),
        }
    }

    fn cta(&mut self, _: &Block, c: &CtaContent) -> String {
        let mut out = format!("### {}", c.heading);
        if let Some(text) = &c.text {
            out.push_str(&format!("\n\n{}", text));
        }
        match &c.button_url {
            Some(url) => out.push_str(&format!("\n\n[{}]({})", c.button_label, url)),
            None => out.push_str(&format!("\n\n**{}**", c.button_label)),
        }
        out
    }

    fn identity_card(&mut self, _: &Block, c: &IdentityCardContent) -> String {
        match &c.tagline {
            Some(tagline) => format!("**{}**\n\n{}", c.name, tagline),
            None => format!("**{}**", c.name),
        }
    }

    fn challenge_solution(&mut self, _: &Block, c: &ChallengeSolutionContent) -> String {
        format!("**Challenge**\n\n{}\n\n**Solution**\n\n{}", c.challenge, c.solution)
    }

    fn results_grid(&mut self, _: &Block, c: &ResultsGridContent) -> String {
        Self::stats(&c.results)
    }

    fn unsupported(&mut self, _: &Block, kind: &str, _: &Value) -> String {
        format!("<!-- unsupported block: {} -->", kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{BlockKind, BlockSeed, DocumentType, Page};

    fn doc() -> Document {
        let mut doc = Document::new("d1", "Acme: Q3 Review!", DocumentType::CaseStudy);
        doc.add_page(
            Page::new("p1", "Overview").with_blocks(vec![
                Block::from_seed("b1", &BlockSeed::of_kind(BlockKind::Heading)),
                Block::from_seed("b2", &BlockSeed::of_kind(BlockKind::BulletList)),
                Block::from_seed("b3", &BlockSeed::of_kind(BlockKind::Image)),
            ]),
            None,
        );
        doc
    }

    #[test]
    fn test_format_names() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_file_name_slug() {
        assert_eq!(file_name_for(&doc(), ExportFormat::Markdown), "acme-q3-review.md");

        let untitled = Document::new("d9", "???", DocumentType::Proposal);
        assert_eq!(file_name_for(&untitled, ExportFormat::Json), "d9.json");
    }

    #[test]
    fn test_json_export_round_trips() {
        let file = JsonExporter.export(&doc()).unwrap();
        let back: Document = serde_json::from_slice(&file.bytes).unwrap();
        assert_eq!(back, doc());
    }

    #[test]
    fn test_markdown_export() {
        let file = exporter_for(ExportFormat::Markdown).export(&doc()).unwrap();
        let text = String::from_utf8(file.bytes).unwrap();

        assert!(text.starts_with("# Acme: Q3 Review!\n"));
        assert!(text.contains("## Overview"));
        assert!(text.contains("#### Heading"));
        assert!(text.contains("- First point"));
        // Images without a URL are skipped
        assert!(!text.contains("!["));
    }
}
