use crate::diagnostic::{Diagnostic, Location};
use crate::rules::LintRule;
use folio_templates::DocumentTemplate;
use std::collections::HashSet;

/// Page ids are unique within a template, section ids within a page
pub struct UniqueIdsRule;

impl LintRule for UniqueIdsRule {
    fn name(&self) -> &'static str {
        "unique-blueprint-ids"
    }

    fn description(&self) -> &'static str {
        "Page and section blueprint ids must not repeat"
    }

    fn check_template(&self, template: &DocumentTemplate) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut pages = HashSet::new();

        for page in &template.pages {
            if !pages.insert(page.id.as_str()) {
                diagnostics.push(Diagnostic::error(
                    self.name(),
                    format!("Duplicate page id '{}'", page.id),
                    Location::page(template, page),
                ));
            }

            let mut sections = HashSet::new();
            for section in &page.sections {
                if !sections.insert(section.id.as_str()) {
                    diagnostics.push(Diagnostic::error(
                        self.name(),
                        format!("Duplicate section id '{}'", section.id),
                        Location::section(template, page, section),
                    ));
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{BlockKind, DocumentType};
    use folio_templates::{PageBlueprint, SectionBlueprint, TemplateCategory};

    #[test]
    fn test_duplicate_page_and_section_ids() {
        let template = DocumentTemplate::new("t", "T", "", TemplateCategory::Business, DocumentType::Proposal)
            .with_page(
                PageBlueprint::new("p", "P")
                    .with_section(SectionBlueprint::new("s", "S", [BlockKind::Heading]))
                    .with_section(SectionBlueprint::new("s", "S2", [BlockKind::Heading])),
            )
            .with_page(PageBlueprint::new("p", "P2"));

        let diagnostics = UniqueIdsRule.check_template(&template);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.is_error()));
    }
}
