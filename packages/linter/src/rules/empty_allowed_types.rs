use crate::diagnostic::{Diagnostic, Location};
use crate::rules::LintRule;
use folio_templates::{DocumentTemplate, PageBlueprint, SectionBlueprint};

pub struct EmptyAllowedTypesRule;

impl LintRule for EmptyAllowedTypesRule {
    fn name(&self) -> &'static str {
        "empty-allowed-types"
    }

    fn description(&self) -> &'static str {
        "Sections should allow at least one block type"
    }

    fn check_section(
        &self,
        template: &DocumentTemplate,
        page: &PageBlueprint,
        section: &SectionBlueprint,
    ) -> Vec<Diagnostic> {
        if section.allowed_block_types.is_empty() {
            vec![Diagnostic::warning(
                self.name(),
                format!("Section '{}' allows no block types", section.name),
                Location::section(template, page, section),
            )
            .with_suggestion("List the block types authors may add to this section")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLevel;
    use crate::rules::fixtures::{section, template_with};

    #[test]
    fn test_warns_on_empty_allowed_types() {
        let template = template_with(section(&[]));
        let page = &template.pages[0];

        let diagnostics = EmptyAllowedTypesRule.check_section(&template, page, &page.sections[0]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
    }
}
