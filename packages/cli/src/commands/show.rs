use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_editor::{dispatch, resolve_background, DocumentStore, Fill, RenderTarget};
use folio_model::{Document, Registry};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Document id; lists saved documents when omitted
    pub id: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = config.store(cwd);

    let Some(id) = args.id else {
        let documents = store.list()?;
        if args.format == "json" {
            println!("{}", serde_json::to_string_pretty(&documents)?);
            return Ok(());
        }
        if documents.is_empty() {
            println!("No documents in {}", store.dir().display());
        }
        for summary in documents {
            println!(
                "  {} {} {} ({} page(s), saved {})",
                summary.id.bright_white(),
                format!("[{}]", summary.document_type).cyan(),
                summary.title,
                summary.page_count,
                summary.saved_at.format("%Y-%m-%d %H:%M")
            );
        }
        return Ok(());
    };

    let document = store.load(&id)?;
    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_document(&document);
    }
    Ok(())
}

fn print_document(document: &Document) {
    println!("{} {}", document.title.bold(), format!("({})", document.document_type.label()).dimmed());

    for (index, page) in document.pages.iter().enumerate() {
        let background = match resolve_background(&page.background).fill {
            Fill::Color { value } => value,
            Fill::Gradient { css } => css,
            Fill::Image { url } => url,
        };
        println!();
        println!("  {} {} {}", format!("{}.", index + 1).bright_blue(), page.name.bold(), background.dimmed());

        for block in &page.blocks {
            match dispatch(block) {
                RenderTarget::Kind { kind } => {
                    let label = Registry::lookup(kind).map_or(kind.as_str(), |t| t.label);
                    let preview = block.content.plain_text();
                    let preview = preview.lines().next().unwrap_or_default();
                    println!("     {} {}", format!("[{}]", label).cyan(), preview);
                }
                RenderTarget::Unsupported { kind } => {
                    println!("     {} unsupported block '{}'", "[?]".yellow(), kind);
                }
            }
        }
    }
}
