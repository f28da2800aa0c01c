use crate::diagnostic::{Diagnostic, Location};
use crate::rules::LintRule;
use folio_templates::{DocumentTemplate, PageBlueprint, SectionBlueprint};

/// Every seed block must be of a kind its section allows
pub struct DefaultBlocksAllowedRule;

impl LintRule for DefaultBlocksAllowedRule {
    fn name(&self) -> &'static str {
        "default-blocks-allowed"
    }

    fn description(&self) -> &'static str {
        "Default blocks must be members of their section's allowed block types"
    }

    fn check_section(
        &self,
        template: &DocumentTemplate,
        page: &PageBlueprint,
        section: &SectionBlueprint,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, seed) in section.default_blocks.iter().enumerate() {
            let location = Location::section(template, page, section);

            match seed.kind() {
                Some(kind) if section.allows(kind) => {}
                Some(kind) => diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("Default block #{} is a '{}' block, which this section does not allow", index, kind),
                        location,
                    )
                    .with_suggestion(format!("Add '{}' to allowedBlockTypes or change the default block", kind)),
                ),
                None => diagnostics.push(Diagnostic::error(
                    self.name(),
                    format!(
                        "Default block #{} has unknown type '{}'",
                        index,
                        seed.content.type_name()
                    ),
                    location,
                )),
            }
        }

        diagnostics
    }
}
