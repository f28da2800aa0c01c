use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_model::DocumentType;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory saved documents are written to
    #[arg(short, long, default_value = "documents")]
    pub documents_dir: String,

    /// Default document type (presentation, case-study, whitepaper, proposal)
    #[arg(short = 't', long, default_value = "presentation")]
    pub document_type: DocumentType,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), DEFAULT_CONFIG_NAME.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Folio workspace...".bright_blue().bold());

    // Create documents directory if it doesn't exist
    let documents_dir = PathBuf::from(cwd).join(&args.documents_dir);
    if !documents_dir.exists() {
        fs::create_dir_all(&documents_dir)?;
        println!("  {} Created {}/", "✓".green(), args.documents_dir);
    }

    let config = Config {
        documents_dir: args.documents_dir.clone(),
        default_document_type: args.document_type,
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: folio templates");
    println!("  2. Run: folio new blank-{}", args.document_type);
    println!("  3. Check output in {}/", args.documents_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let args = InitArgs {
            documents_dir: "decks".to_string(),
            document_type: DocumentType::Whitepaper,
            force: false,
        };
        init(args, &cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.documents_dir, "decks");
        assert_eq!(config.default_document_type, DocumentType::Whitepaper);
        assert!(dir.path().join("decks").is_dir());
    }
}
