mod default_blocks_allowed;
mod empty_allowed_types;
mod max_blocks;
mod required_blocks;
mod unique_ids;

pub use default_blocks_allowed::DefaultBlocksAllowedRule;
pub use empty_allowed_types::EmptyAllowedTypesRule;
pub use max_blocks::MaxBlocksRule;
pub use required_blocks::RequiredBlocksRule;
pub use unique_ids::UniqueIdsRule;

use crate::diagnostic::Diagnostic;
use folio_templates::{DocumentTemplate, PageBlueprint, SectionBlueprint};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check template-wide structure (page and section layout)
    fn check_template(&self, _template: &DocumentTemplate) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check one section blueprint
    fn check_section(
        &self,
        _template: &DocumentTemplate,
        _page: &PageBlueprint,
        _section: &SectionBlueprint,
    ) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(DefaultBlocksAllowedRule),
                Box::new(RequiredBlocksRule),
                Box::new(MaxBlocksRule),
                Box::new(UniqueIdsRule),
                Box::new(EmptyAllowedTypesRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use folio_model::{BlockKind, DocumentType};
    use folio_templates::{DocumentTemplate, PageBlueprint, SectionBlueprint, TemplateCategory};

    /// Single-page, single-section template around `section`
    pub fn template_with(section: SectionBlueprint) -> DocumentTemplate {
        DocumentTemplate::new("fixture", "Fixture", "", TemplateCategory::Business, DocumentType::Proposal)
            .with_page(PageBlueprint::new("page", "Page").with_section(section))
    }

    pub fn section(allowed: &[BlockKind]) -> SectionBlueprint {
        SectionBlueprint::new("section", "Section", allowed.iter().copied())
    }
}
