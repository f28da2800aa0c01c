use crate::diagnostic::{Diagnostic, Location};
use crate::rules::LintRule;
use folio_templates::{DocumentTemplate, PageBlueprint, SectionBlueprint};

pub struct MaxBlocksRule;

impl LintRule for MaxBlocksRule {
    fn name(&self) -> &'static str {
        "max-blocks"
    }

    fn description(&self) -> &'static str {
        "Default and required blocks must fit within maxBlocks"
    }

    fn check_section(
        &self,
        template: &DocumentTemplate,
        page: &PageBlueprint,
        section: &SectionBlueprint,
    ) -> Vec<Diagnostic> {
        let Some(max) = section.max_blocks else {
            return Vec::new();
        };

        let mut diagnostics = Vec::new();

        if max == 0 {
            diagnostics.push(Diagnostic::error(
                self.name(),
                "maxBlocks is 0, so nothing can be placed in this section",
                Location::section(template, page, section),
            ));
        }

        if section.default_blocks.len() > max {
            diagnostics.push(Diagnostic::error(
                self.name(),
                format!(
                    "Section seeds {} blocks but allows at most {}",
                    section.default_blocks.len(),
                    max
                ),
                Location::section(template, page, section),
            ));
        }

        if section.required_block_types.len() > max {
            diagnostics.push(Diagnostic::error(
                self.name(),
                format!(
                    "Section requires {} block types but allows at most {} blocks",
                    section.required_block_types.len(),
                    max
                ),
                Location::section(template, page, section),
            ));
        }

        diagnostics
    }
}
