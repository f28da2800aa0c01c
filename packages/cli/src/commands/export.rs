use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::{DocumentStore, EditSession, ExportFormat};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Document id
    pub id: String,

    /// Export format (json, markdown)
    #[arg(short, long, default_value = "markdown")]
    pub format: ExportFormat,

    /// Output file (defaults to a name derived from the title)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = config.store(cwd).load(&args.id)?;

    let mut session = EditSession::open(document);
    let Some(file) = session.export_as(args.format) else {
        let reasons = session
            .take_notifications()
            .into_iter()
            .map(|n| n.message)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Export failed: {}", reasons);
    };

    let out = args.out.unwrap_or_else(|| PathBuf::from(cwd).join(&file.file_name));
    fs::write(&out, &file.bytes)?;

    println!("{} Exported {} as {}", "✓".green(), args.id.bright_white(), args.format);
    println!("   {}", out.display());
    Ok(())
}
