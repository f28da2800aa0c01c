use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_model::DocumentType;
use folio_templates::{TemplateCategory, TemplateSelector};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Document type to list templates for (defaults to the configured type)
    #[arg(short = 't', long = "type")]
    pub document_type: Option<DocumentType>,

    /// Only show templates of this category
    #[arg(short, long)]
    pub category: Option<TemplateCategory>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn templates(args: TemplatesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog(cwd)?;
    let document_type = args.document_type.unwrap_or(config.default_document_type);

    let mut selector = TemplateSelector::for_type(&catalog, document_type);
    selector.set_category(args.category);
    let visible = selector.visible();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{} {}", "📚".bright_blue(), format!("{} templates", document_type.label()).bold());
    let categories = selector
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("   Categories: {}", categories.dimmed());
    println!();

    for template in visible {
        println!(
            "  {} {} {}",
            template.id.bright_white(),
            format!("[{}]", template.category).cyan(),
            template.name
        );
        if !template.description.is_empty() {
            println!("      {}", template.description.dimmed());
        }
        println!(
            "      {} page(s), {} block(s)",
            template.pages.len(),
            template.block_count()
        );
    }

    Ok(())
}
