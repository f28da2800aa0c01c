use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_linter::{lint_catalog, DiagnosticLevel, LintOptions};
use folio_templates::Catalog;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Catalog JSON file to lint (defaults to the configured catalog)
    pub input: Option<PathBuf>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub all: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let catalog = match &args.input {
        Some(path) => Catalog::load(path)?,
        None => Config::load(cwd)?.catalog(cwd)?,
    };

    let diagnostics = lint_catalog(&catalog, LintOptions::default());

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        println!("🔍 {} Folio Linter", "Starting".green().bold());
        match &args.input {
            Some(path) => println!("   Input: {}", path.display()),
            None => println!("   Input: configured catalog"),
        }
        println!("   Templates: {}", catalog.templates.len());
        println!();

        for diagnostic in &diagnostics {
            let level_str = match diagnostic.level {
                DiagnosticLevel::Error => "error".red().bold(),
                DiagnosticLevel::Warning => "warning".yellow().bold(),
                DiagnosticLevel::Info => "info".blue().bold(),
            };

            if !args.all && matches!(diagnostic.level, DiagnosticLevel::Info) {
                continue;
            }

            println!(
                "  {} [{}] {} {}",
                level_str,
                diagnostic.rule,
                diagnostic.message,
                format!("at {}", diagnostic.location).dimmed()
            );

            if let Some(suggestion) = &diagnostic.suggestion {
                println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
            }
        }
    }

    // Count errors and warnings
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics
        .iter()
        .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
        .count();

    if args.format != "json" {
        println!();
        println!(
            "✨ {} Linting complete!",
            if errors > 0 { "Done".red().bold() } else { "Done".green().bold() }
        );

        if errors > 0 {
            println!("   {} {}", "Errors:".red(), errors);
        }
        if warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), warnings);
        }
        if errors == 0 && warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    // Exit with error code if there are errors
    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
