//! # Block Content
//!
//! Per-kind content payloads. The serialized form of a block keeps the kind
//! and the payload side by side (`{"type": "stat-card", "content": {...}}`),
//! so content structs only carry their own fields, in camelCase. Optional
//! fields are omitted rather than written as `null`. Payloads carrying
//! fields this build does not know are loaded as `Unsupported`, so a save
//! writes them back unchanged.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Shallow per-field patch: each key replaces that field of the content,
/// `null` clears an optional field.
pub type ContentPatch = Map<String, Value>;

/// The closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Heading,
    Paragraph,
    BulletList,
    StatCard,
    StatGrid,
    Image,
    Chart,
    SpecTable,
    Quote,
    Callout,
    Divider,
    Cta,
    IdentityCard,
    ChallengeSolution,
    ResultsGrid,
}

impl BlockKind {
    pub const ALL: [BlockKind; 15] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::BulletList,
        BlockKind::StatCard,
        BlockKind::StatGrid,
        BlockKind::Image,
        BlockKind::Chart,
        BlockKind::SpecTable,
        BlockKind::Quote,
        BlockKind::Callout,
        BlockKind::Divider,
        BlockKind::Cta,
        BlockKind::IdentityCard,
        BlockKind::ChallengeSolution,
        BlockKind::ResultsGrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::BulletList => "bullet-list",
            BlockKind::StatCard => "stat-card",
            BlockKind::StatGrid => "stat-grid",
            BlockKind::Image => "image",
            BlockKind::Chart => "chart",
            BlockKind::SpecTable => "spec-table",
            BlockKind::Quote => "quote",
            BlockKind::Callout => "callout",
            BlockKind::Divider => "divider",
            BlockKind::Cta => "cta",
            BlockKind::IdentityCard => "identity-card",
            BlockKind::ChallengeSolution => "challenge-solution",
            BlockKind::ResultsGrid => "results-grid",
        }
    }

    /// Serialized field names accepted in a content patch for this kind
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            BlockKind::Heading => &["text", "level"],
            BlockKind::Paragraph => &["text"],
            BlockKind::BulletList => &["items"],
            BlockKind::StatCard => &["value", "label", "description"],
            BlockKind::StatGrid => &["stats"],
            BlockKind::Image => &["imageUrl", "alt", "caption"],
            BlockKind::Chart => &["title", "chartType", "data", "backgroundImage"],
            BlockKind::SpecTable => &["title", "rows"],
            BlockKind::Quote => &["text", "author", "role"],
            BlockKind::Callout => &["title", "text", "variant"],
            BlockKind::Divider => &["variant"],
            BlockKind::Cta => &["heading", "text", "buttonLabel", "buttonUrl"],
            BlockKind::IdentityCard => &["name", "tagline", "logoUrl", "primaryColor"],
            BlockKind::ChallengeSolution => &["challenge", "solution"],
            BlockKind::ResultsGrid => &["results"],
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnsupportedKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeadingContent {
    pub text: String,
    #[serde(default = "default_heading_level")]
    pub level: u8,
}

fn default_heading_level() -> u8 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParagraphContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BulletListContent {
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatCardContent {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single value/label pair inside a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatGridContent {
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Donut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartContent {
    pub title: String,
    pub chart_type: ChartType,
    #[serde(default)]
    pub data: Vec<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpecTableContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub rows: Vec<SpecRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuoteContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    #[default]
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalloutContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    #[serde(default)]
    pub variant: CalloutVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerVariant {
    #[default]
    Line,
    Dotted,
    Space,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DividerContent {
    #[serde(default)]
    pub variant: DividerVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtaContent {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub button_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdentityCardContent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChallengeSolutionContent {
    pub challenge: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResultsGridContent {
    #[serde(default)]
    pub results: Vec<Stat>,
}

/// Kind-specific payload of a block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Heading(HeadingContent),
    Paragraph(ParagraphContent),
    BulletList(BulletListContent),
    StatCard(StatCardContent),
    StatGrid(StatGridContent),
    Image(ImageContent),
    Chart(ChartContent),
    SpecTable(SpecTableContent),
    Quote(QuoteContent),
    Callout(CalloutContent),
    Divider(DividerContent),
    Cta(CtaContent),
    IdentityCard(IdentityCardContent),
    ChallengeSolution(ChallengeSolutionContent),
    ResultsGrid(ResultsGridContent),

    /// Kind unknown to this build, or a payload that does not fit its kind.
    /// The raw JSON is kept so saving does not lose data.
    Unsupported { kind: String, raw: Value },
}

impl BlockContent {
    /// Canonical starting payload for a freshly added block
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => BlockContent::Heading(HeadingContent {
                text: "Heading".to_string(),
                level: 2,
            }),
            BlockKind::Paragraph => BlockContent::Paragraph(ParagraphContent {
                text: "Start typing your content here...".to_string(),
            }),
            BlockKind::BulletList => BlockContent::BulletList(BulletListContent {
                items: vec![
                    "First point".to_string(),
                    "Second point".to_string(),
                    "Third point".to_string(),
                ],
            }),
            BlockKind::StatCard => BlockContent::StatCard(StatCardContent {
                value: "0".to_string(),
                label: "Label".to_string(),
                description: None,
            }),
            BlockKind::StatGrid => BlockContent::StatGrid(StatGridContent {
                stats: vec![Stat::new("0", "Metric"), Stat::new("0", "Metric"), Stat::new("0", "Metric")],
            }),
            BlockKind::Image => BlockContent::Image(ImageContent {
                image_url: None,
                alt: String::new(),
                caption: None,
            }),
            BlockKind::Chart => BlockContent::Chart(ChartContent {
                title: "Chart Title".to_string(),
                chart_type: ChartType::Bar,
                data: [("Q1", 25.0), ("Q2", 40.0), ("Q3", 35.0), ("Q4", 50.0)]
                    .into_iter()
                    .map(|(label, value)| ChartPoint {
                        label: label.to_string(),
                        value,
                    })
                    .collect(),
                background_image: None,
            }),
            BlockKind::SpecTable => BlockContent::SpecTable(SpecTableContent {
                title: Some("Specifications".to_string()),
                rows: vec![SpecRow {
                    label: "Property".to_string(),
                    value: "Value".to_string(),
                }],
            }),
            BlockKind::Quote => BlockContent::Quote(QuoteContent {
                text: "Add a memorable quote here.".to_string(),
                author: Some("Author Name".to_string()),
                role: None,
            }),
            BlockKind::Callout => BlockContent::Callout(CalloutContent {
                title: None,
                text: "Important information".to_string(),
                variant: CalloutVariant::Info,
            }),
            BlockKind::Divider => BlockContent::Divider(DividerContent {
                variant: DividerVariant::Line,
            }),
            BlockKind::Cta => BlockContent::Cta(CtaContent {
                heading: "Ready to get started?".to_string(),
                text: Some("Let's build something together.".to_string()),
                button_label: "Get in touch".to_string(),
                button_url: None,
            }),
            BlockKind::IdentityCard => BlockContent::IdentityCard(IdentityCardContent {
                name: "Company Name".to_string(),
                tagline: Some("Tagline".to_string()),
                logo_url: None,
                primary_color: None,
            }),
            BlockKind::ChallengeSolution => BlockContent::ChallengeSolution(ChallengeSolutionContent {
                challenge: "Describe the challenge".to_string(),
                solution: "Describe the solution".to_string(),
            }),
            BlockKind::ResultsGrid => BlockContent::ResultsGrid(ResultsGridContent {
                results: vec![Stat::new("0%", "Result"), Stat::new("0%", "Result"), Stat::new("0%", "Result")],
            }),
        }
    }

    /// Kind of this payload, `None` for unsupported content
    pub fn kind(&self) -> Option<BlockKind> {
        let kind = match self {
            BlockContent::Heading(_) => BlockKind::Heading,
            BlockContent::Paragraph(_) => BlockKind::Paragraph,
            BlockContent::BulletList(_) => BlockKind::BulletList,
            BlockContent::StatCard(_) => BlockKind::StatCard,
            BlockContent::StatGrid(_) => BlockKind::StatGrid,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Chart(_) => BlockKind::Chart,
            BlockContent::SpecTable(_) => BlockKind::SpecTable,
            BlockContent::Quote(_) => BlockKind::Quote,
            BlockContent::Callout(_) => BlockKind::Callout,
            BlockContent::Divider(_) => BlockKind::Divider,
            BlockContent::Cta(_) => BlockKind::Cta,
            BlockContent::IdentityCard(_) => BlockKind::IdentityCard,
            BlockContent::ChallengeSolution(_) => BlockKind::ChallengeSolution,
            BlockContent::ResultsGrid(_) => BlockKind::ResultsGrid,
            BlockContent::Unsupported { .. } => return None,
        };
        Some(kind)
    }

    /// Serialized `type` tag, including unknown kinds
    pub fn type_name(&self) -> &str {
        match self {
            BlockContent::Unsupported { kind, .. } => kind.as_str(),
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, BlockContent::Unsupported { .. })
    }

    /// Build content from a `type` tag and raw payload.
    ///
    /// Never fails: anything that cannot be read as a known kind is kept as
    /// [`BlockContent::Unsupported`].
    pub fn from_parts(type_name: &str, raw: Value) -> Self {
        match type_name.parse::<BlockKind>() {
            Ok(kind) => match Self::decode(kind, raw.clone()) {
                Ok(content) => content,
                Err(_) => BlockContent::Unsupported {
                    kind: type_name.to_string(),
                    raw,
                },
            },
            Err(_) => BlockContent::Unsupported {
                kind: type_name.to_string(),
                raw,
            },
        }
    }

    /// Decode a payload for a known kind
    pub fn decode(kind: BlockKind, raw: Value) -> Result<Self, serde_json::Error> {
        let content = match kind {
            BlockKind::Heading => BlockContent::Heading(serde_json::from_value(raw)?),
            BlockKind::Paragraph => BlockContent::Paragraph(serde_json::from_value(raw)?),
            BlockKind::BulletList => BlockContent::BulletList(serde_json::from_value(raw)?),
            BlockKind::StatCard => BlockContent::StatCard(serde_json::from_value(raw)?),
            BlockKind::StatGrid => BlockContent::StatGrid(serde_json::from_value(raw)?),
            BlockKind::Image => BlockContent::Image(serde_json::from_value(raw)?),
            BlockKind::Chart => BlockContent::Chart(serde_json::from_value(raw)?),
            BlockKind::SpecTable => BlockContent::SpecTable(serde_json::from_value(raw)?),
            BlockKind::Quote => BlockContent::Quote(serde_json::from_value(raw)?),
            BlockKind::Callout => BlockContent::Callout(serde_json::from_value(raw)?),
            BlockKind::Divider => BlockContent::Divider(serde_json::from_value(raw)?),
            BlockKind::Cta => BlockContent::Cta(serde_json::from_value(raw)?),
            BlockKind::IdentityCard => BlockContent::IdentityCard(serde_json::from_value(raw)?),
            BlockKind::ChallengeSolution => BlockContent::ChallengeSolution(serde_json::from_value(raw)?),
            BlockKind::ResultsGrid => BlockContent::ResultsGrid(serde_json::from_value(raw)?),
        };
        Ok(content)
    }

    /// Serialize the payload (without the `type` tag)
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            BlockContent::Heading(c) => serde_json::to_value(c),
            BlockContent::Paragraph(c) => serde_json::to_value(c),
            BlockContent::BulletList(c) => serde_json::to_value(c),
            BlockContent::StatCard(c) => serde_json::to_value(c),
            BlockContent::StatGrid(c) => serde_json::to_value(c),
            BlockContent::Image(c) => serde_json::to_value(c),
            BlockContent::Chart(c) => serde_json::to_value(c),
            BlockContent::SpecTable(c) => serde_json::to_value(c),
            BlockContent::Quote(c) => serde_json::to_value(c),
            BlockContent::Callout(c) => serde_json::to_value(c),
            BlockContent::Divider(c) => serde_json::to_value(c),
            BlockContent::Cta(c) => serde_json::to_value(c),
            BlockContent::IdentityCard(c) => serde_json::to_value(c),
            BlockContent::ChallengeSolution(c) => serde_json::to_value(c),
            BlockContent::ResultsGrid(c) => serde_json::to_value(c),
            BlockContent::Unsupported { raw, .. } => Ok(raw.clone()),
        }
    }

    /// Merge a shallow patch into this content.
    ///
    /// The content is left untouched when the patch names an unknown field
    /// or a value of the wrong shape.
    pub fn apply_patch(&mut self, patch: &ContentPatch) -> Result<(), ModelError> {
        let kind = match self.kind() {
            Some(kind) => kind,
            None => return Err(ModelError::UnsupportedKind(self.type_name().to_string())),
        };

        if let Some(field) = patch.keys().find(|key| !kind.fields().contains(&key.as_str())) {
            return Err(ModelError::UnknownField {
                kind: kind.to_string(),
                field: field.clone(),
            });
        }

        let mut fields = match self.to_value()? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        for (key, value) in patch {
            if value.is_null() {
                fields.remove(key);
            } else {
                fields.insert(key.clone(), value.clone());
            }
        }

        let merged = Self::decode(kind, Value::Object(fields)).map_err(|e| ModelError::InvalidPatch {
            kind: kind.to_string(),
            reason: e.to_string(),
        })?;
        *self = merged;
        Ok(())
    }

    /// Plain-text summary used by exporters and previews
    pub fn plain_text(&self) -> String {
        match self {
            BlockContent::Heading(c) => c.text.clone(),
            BlockContent::Paragraph(c) => c.text.clone(),
            BlockContent::BulletList(c) => c.items.join("\n"),
            BlockContent::StatCard(c) => format!("{} {}", c.value, c.label),
            BlockContent::StatGrid(c) => join_stats(&c.stats),
            BlockContent::Image(c) => c.caption.clone().unwrap_or_else(|| c.alt.clone()),
            BlockContent::Chart(c) => c.title.clone(),
            BlockContent::SpecTable(c) => c
                .rows
                .iter()
                .map(|row| format!("{}: {}", row.label, row.value))
                .collect::<Vec<_>>()
                .join("\n"),
            BlockContent::Quote(c) => c.text.clone(),
            BlockContent::Callout(c) => c.text.clone(),
            BlockContent::Divider(_) => String::new(),
            BlockContent::Cta(c) => c.heading.clone(),
            BlockContent::IdentityCard(c) => c.name.clone(),
            BlockContent::ChallengeSolution(c) => format!("{}\n{}", c.challenge, c.solution),
            BlockContent::ResultsGrid(c) => join_stats(&c.results),
            BlockContent::Unsupported { .. } => String::new(),
        }
    }
}

fn join_stats(stats: &[Stat]) -> String {
    stats
        .iter()
        .map(|s| format!("{} {}", s.value, s.label))
        .collect::<Vec<_>>()
        .join("\n")
}
