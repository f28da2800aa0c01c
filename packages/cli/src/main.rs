mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    export, init, lint, new, show, templates, ExportArgs, InitArgs, LintArgs, NewArgs, ShowArgs, TemplatesArgs,
};
use tracing::Level;

/// Folio CLI - block-based documents from templates
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Folio workspace
    Init(InitArgs),

    /// List templates for a document type
    Templates(TemplatesArgs),

    /// Create a document from a template
    New(NewArgs),

    /// Show a saved document, or list saved documents
    Show(ShowArgs),

    /// Validate a template catalog
    Lint(LintArgs),

    /// Export a saved document
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Templates(args) => templates(args, &cwd),
        Command::New(args) => new(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::Lint(args) => lint(args, &cwd),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
