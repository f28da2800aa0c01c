use crate::diagnostic::{Diagnostic, Location};
use crate::rules::RuleRegistry;
use folio_templates::{Catalog, DocumentTemplate};
use std::collections::HashSet;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint every template in a catalog, plus catalog-wide id uniqueness
pub fn lint_catalog(catalog: &Catalog, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for template in &catalog.templates {
        if !seen.insert(template.id.as_str()) {
            diagnostics.push(Diagnostic::error(
                "unique-blueprint-ids",
                format!("Duplicate template id '{}'", template.id),
                Location::template(template),
            ));
        }
        diagnostics.extend(run_rules(template, &registry));
    }

    diagnostics
}

/// Lint a single template
pub fn lint_template(template: &DocumentTemplate, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    run_rules(template, &registry)
}

fn run_rules(template: &DocumentTemplate, registry: &RuleRegistry) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        diagnostics.extend(rule.check_template(template));
    }

    for page in &template.pages {
        for section in &page.sections {
            for rule in registry.rules() {
                diagnostics.extend(rule.check_section(template, page, section));
            }
        }
    }

    diagnostics
}
