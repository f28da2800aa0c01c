use crate::diagnostic::{Diagnostic, Location};
use crate::rules::LintRule;
use folio_templates::{DocumentTemplate, PageBlueprint, SectionBlueprint};

/// Required kinds must be allowed, and seeded so a fresh document starts
/// out complete
pub struct RequiredBlocksRule;

impl LintRule for RequiredBlocksRule {
    fn name(&self) -> &'static str {
        "required-blocks-present"
    }

    fn description(&self) -> &'static str {
        "Required block types must be allowed and present among the default blocks"
    }

    fn check_section(
        &self,
        template: &DocumentTemplate,
        page: &PageBlueprint,
        section: &SectionBlueprint,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for kind in &section.required_block_types {
            if !section.allows(*kind) {
                diagnostics.push(Diagnostic::error(
                    self.name(),
                    format!("'{}' is required but not in allowedBlockTypes", kind),
                    Location::section(template, page, section),
                ));
                continue;
            }

            let seeded = section.default_blocks.iter().any(|seed| seed.kind() == Some(*kind));
            if !seeded {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("'{}' is required but no default block provides it", kind),
                        Location::section(template, page, section),
                    )
                    .with_suggestion(format!("Add a '{}' block to defaultBlocks", kind)),
                );
            }
        }

        diagnostics
    }
}
