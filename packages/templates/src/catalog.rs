//! # Template Catalog
//!
//! A versioned, read-only collection of document templates. The bundled
//! catalog is built once on first use; external catalogs are JSON files of
//! the same shape:
//!
//! ```json
//! { "version": 1, "templates": [ { "id": "...", "pages": [...] } ] }
//! ```

use crate::{DocumentTemplate, PageBlueprint, SectionBlueprint, TemplateCategory, TemplateError};
use folio_model::{
    Alignment, Background, BlockContent, BlockKind, BlockSeed, BlockStyle, BulletListContent, CalloutContent,
    CalloutVariant, ChallengeSolutionContent, CtaContent, DocumentType, HeadingContent, IdentityCardContent,
    ParagraphContent, QuoteContent, ResultsGridContent, SpecRow, SpecTableContent, Stat,
    StatCardContent, StatGridContent, Width,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: u32,
    pub templates: Vec<DocumentTemplate>,
}

static BUNDLED: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    pub fn new(templates: Vec<DocumentTemplate>) -> Self {
        Self {
            version: CATALOG_VERSION,
            templates,
        }
    }

    /// Templates shipped with the application
    pub fn bundled() -> &'static Catalog {
        BUNDLED.get_or_init(|| Catalog::new(bundled_templates()))
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.version != CATALOG_VERSION {
            return Err(TemplateError::UnsupportedVersion {
                found: catalog.version,
                expected: CATALOG_VERSION,
            });
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, id: &str) -> Option<&DocumentTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Look a template up by id, falling back to the synthesized blank
    /// templates (`blank-<document-type>`).
    pub fn resolve(&self, id: &str) -> Result<DocumentTemplate, TemplateError> {
        if let Some(template) = self.get(id) {
            return Ok(template.clone());
        }
        DocumentType::ALL
            .iter()
            .map(|t| DocumentTemplate::blank(*t))
            .find(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    pub fn for_type(&self, document_type: DocumentType) -> impl Iterator<Item = &DocumentTemplate> {
        self.templates.iter().filter(move |t| t.document_type == document_type)
    }

    /// Categories used by templates of a type, sorted
    pub fn categories_for(&self, document_type: DocumentType) -> Vec<TemplateCategory> {
        self.for_type(document_type)
            .map(|t| t.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn heading(text: &str, level: u8) -> BlockSeed {
    BlockSeed::new(BlockContent::Heading(HeadingContent {
        text: text.to_string(),
        level,
    }))
}

fn paragraph(text: &str) -> BlockSeed {
    BlockSeed::new(BlockContent::Paragraph(ParagraphContent { text: text.to_string() }))
}

fn bullets(items: &[&str]) -> BlockSeed {
    BlockSeed::new(BlockContent::BulletList(BulletListContent {
        items: items.iter().map(|s| s.to_string()).collect(),
    }))
}

fn stat_card(value: &str, label: &str) -> BlockSeed {
    BlockSeed::new(BlockContent::StatCard(StatCardContent {
        value: value.to_string(),
        label: label.to_string(),
        description: None,
    }))
}

fn stats(pairs: &[(&str, &str)]) -> Vec<Stat> {
    pairs.iter().map(|(v, l)| Stat::new(*v, *l)).collect()
}

const TEXT: [BlockKind; 3] = [BlockKind::Heading, BlockKind::Paragraph, BlockKind::BulletList];

fn text_kinds(extra: &[BlockKind]) -> Vec<BlockKind> {
    TEXT.iter().chain(extra).copied().collect()
}

fn brand_presentation() -> DocumentTemplate {
    DocumentTemplate::new(
        "brand-presentation",
        "Brand Presentation",
        "Introduce the brand: identity, values and proof points",
        TemplateCategory::Marketing,
        DocumentType::Presentation,
    )
    .with_page(
        PageBlueprint::new("cover", "Cover")
            .with_background(Background::gradient("#0F172A", "#1E3A8A"))
            .with_section(
                SectionBlueprint::new("identity", "Identity", [BlockKind::IdentityCard, BlockKind::Heading])
                    .with_required([BlockKind::IdentityCard])
                    .with_max_blocks(2)
                    .with_fixed_height(480)
                    .with_default(
                        BlockSeed::new(BlockContent::IdentityCard(IdentityCardContent {
                            name: "Company Name".to_string(),
                            tagline: Some("What we stand for, in one line".to_string()),
                            logo_url: None,
                            primary_color: Some("#2563EB".to_string()),
                        }))
                        .with_style(BlockStyle::aligned(Alignment::Center)),
                    )
                    .with_placeholder("Add your logo and tagline"),
            ),
    )
    .with_page(
        PageBlueprint::new("values", "Values").with_section(
            SectionBlueprint::new("values", "Values", text_kinds(&[BlockKind::Callout, BlockKind::Quote]))
                .with_default(heading("Our Values", 2))
                .with_default(bullets(&["Clarity", "Craft", "Confidence"]))
                .with_placeholder("Describe what the brand believes in"),
        ),
    )
    .with_page(
        PageBlueprint::new("proof", "Proof Points").with_section(
            SectionBlueprint::new("metrics", "Metrics", [BlockKind::Heading, BlockKind::StatGrid, BlockKind::StatCard])
                .with_max_blocks(4)
                .with_default(heading("By the Numbers", 2))
                .with_default(BlockSeed::new(BlockContent::StatGrid(StatGridContent {
                    stats: stats(&[("120+", "Clients"), ("15", "Countries"), ("98%", "Retention")]),
                }))),
        ),
    )
}

fn product_pitch() -> DocumentTemplate {
    DocumentTemplate::new(
        "product-pitch",
        "Product Pitch",
        "Problem, solution and call to action in three slides",
        TemplateCategory::Business,
        DocumentType::Presentation,
    )
    .with_page(
        PageBlueprint::new("problem", "Problem").with_section(
            SectionBlueprint::new("problem", "Problem", text_kinds(&[BlockKind::StatCard, BlockKind::Image]))
                .with_default(heading("The Problem", 1))
                .with_default(paragraph("Describe the pain your customers feel today."))
                .with_default(stat_card("3x", "Cost of doing nothing")),
        ),
    )
    .with_page(
        PageBlueprint::new("solution", "Solution").with_section(
            SectionBlueprint::new("solution", "Solution", text_kinds(&[BlockKind::Image, BlockKind::Chart]))
                .with_default(heading("Our Solution", 1))
                .with_default(BlockSeed::of_kind(BlockKind::Image).with_style(BlockStyle::default().with_width(Width::Wide))),
        ),
    )
    .with_page(
        PageBlueprint::new("next-steps", "Next Steps")
            .with_background(Background::solid("#111827"))
            .with_section(
                SectionBlueprint::new("cta", "Call to Action", [BlockKind::Cta])
                    .with_required([BlockKind::Cta])
                    .with_max_blocks(1)
                    .with_default(BlockSeed::new(BlockContent::Cta(CtaContent {
                        heading: "Let's talk".to_string(),
                        text: Some("Book a 30 minute walkthrough.".to_string()),
                        button_label: "Schedule a demo".to_string(),
                        button_url: None,
                    }))),
            ),
    )
}

fn client_case_study() -> DocumentTemplate {
    DocumentTemplate::new(
        "client-case-study",
        "Client Case Study",
        "Challenge, solution and measurable results for one client",
        TemplateCategory::Business,
        DocumentType::CaseStudy,
    )
    .with_page(
        PageBlueprint::new("overview", "Overview")
            .with_background(Background::solid("#F8FAFC"))
            .with_section(
                SectionBlueprint::new("header", "Header", [BlockKind::Heading, BlockKind::Paragraph])
                    .with_required([BlockKind::Heading])
                    .with_max_blocks(2)
                    .with_default(heading("Client Name", 1))
                    .with_default(paragraph("A one-sentence summary of the engagement.")),
            )
            .with_section(
                SectionBlueprint::new("story", "Story", [BlockKind::ChallengeSolution, BlockKind::Quote])
                    .with_required([BlockKind::ChallengeSolution])
                    .with_default(BlockSeed::new(BlockContent::ChallengeSolution(ChallengeSolutionContent {
                        challenge: "What was standing in the client's way?".to_string(),
                        solution: "How we approached it.".to_string(),
                    }))),
            ),
    )
    .with_page(
        PageBlueprint::new("results", "Results").with_section(
            SectionBlueprint::new("results", "Results", [BlockKind::Heading, BlockKind::ResultsGrid, BlockKind::Quote])
                .with_default(heading("Results", 2))
                .with_default(BlockSeed::new(BlockContent::ResultsGrid(ResultsGridContent {
                    results: stats(&[("+40%", "Conversion"), ("-25%", "Churn"), ("2x", "Pipeline")]),
                })))
                .with_default(BlockSeed::new(BlockContent::Quote(QuoteContent {
                    text: "They changed how our team works.".to_string(),
                    author: Some("Client Lead".to_string()),
                    role: Some("VP Marketing".to_string()),
                }))),
        ),
    )
}

fn technical_whitepaper() -> DocumentTemplate {
    DocumentTemplate::new(
        "technical-whitepaper",
        "Technical Whitepaper",
        "Long-form technical write-up with specifications",
        TemplateCategory::Technical,
        DocumentType::Whitepaper,
    )
    .with_page(
        PageBlueprint::new("abstract", "Abstract").with_section(
            SectionBlueprint::new("abstract", "Abstract", text_kinds(&[BlockKind::Callout]))
                .with_default(heading("Whitepaper Title", 1))
                .with_default(paragraph("Summarize the problem, approach and findings."))
                .with_default(BlockSeed::new(BlockContent::Callout(CalloutContent {
                    title: Some("Key finding".to_string()),
                    text: "State the single most important result.".to_string(),
                    variant: CalloutVariant::Info,
                }))),
        ),
    )
    .with_page(
        PageBlueprint::new("specs", "Specifications").with_section(
            SectionBlueprint::new("specs", "Specifications", [BlockKind::Heading, BlockKind::SpecTable, BlockKind::Chart])
                .with_default(heading("Specifications", 2))
                .with_default(BlockSeed::new(BlockContent::SpecTable(SpecTableContent {
                    title: None,
                    rows: vec![
                        SpecRow {
                            label: "Throughput".to_string(),
                            value: "10k req/s".to_string(),
                        },
                        SpecRow {
                            label: "Latency (p99)".to_string(),
                            value: "12 ms".to_string(),
                        },
                    ],
                })))
                .with_default(BlockSeed::of_kind(BlockKind::Chart)),
        ),
    )
}

fn project_proposal() -> DocumentTemplate {
    DocumentTemplate::new(
        "project-proposal",
        "Project Proposal",
        "Scope, timeline and investment for a new engagement",
        TemplateCategory::Business,
        DocumentType::Proposal,
    )
    .with_page(
        PageBlueprint::new("scope", "Scope").with_section(
            SectionBlueprint::new("scope", "Scope", text_kinds(&[BlockKind::Divider]))
                .with_default(heading("Project Scope", 1))
                .with_default(bullets(&["Discovery", "Design", "Delivery"]))
                .with_default(BlockSeed::of_kind(BlockKind::Divider)),
        ),
    )
    .with_page(
        PageBlueprint::new("investment", "Investment").with_section(
            SectionBlueprint::new("investment", "Investment", [BlockKind::Heading, BlockKind::SpecTable, BlockKind::Cta])
                .with_max_blocks(3)
                .with_default(heading("Investment", 2))
                .with_default(BlockSeed::new(BlockContent::SpecTable(SpecTableContent {
                    title: Some("Fees".to_string()),
                    rows: vec![SpecRow {
                        label: "Phase 1".to_string(),
                        value: "TBD".to_string(),
                    }],
                })))
                .with_default(BlockSeed::of_kind(BlockKind::Cta)),
        ),
    )
}

fn bundled_templates() -> Vec<DocumentTemplate> {
    vec![
        brand_presentation(),
        product_pitch(),
        client_case_study(),
        technical_whitepaper(),
        project_proposal(),
    ]
}
