//! # Folio Linter
//!
//! Checks template catalogs for authoring mistakes. Section constraints are
//! not enforced while editing, so this is where a template that seeds a
//! block its own section does not allow gets caught.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel, Location};
pub use linter::{lint_catalog, lint_template, LintOptions};
pub use rules::{LintRule, RuleRegistry};
