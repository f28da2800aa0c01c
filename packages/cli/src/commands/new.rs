use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::{EditSession, FileStore};
use folio_model::SequentialIds;
use folio_templates::instantiate;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template id (see `folio templates`), e.g. `client-case-study` or `blank-proposal`
    pub template: String,

    /// Document title (defaults to the template name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory to save into (defaults to the configured documents dir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog(cwd)?;
    let template = catalog.resolve(&args.template)?;

    let mut ids = SequentialIds::for_session();
    debug!(seed = %ids.seed(), template = %template.id, "Instantiating template");

    let mut document = instantiate(&template, &mut ids);
    document.title = args.title.unwrap_or_else(|| template.name.clone());

    let mut store = match args.out {
        Some(dir) => FileStore::new(dir),
        None => config.store(cwd),
    };

    let mut session = EditSession::new(document, ids, config.editor_options());
    let Some(id) = session.save(&mut store) else {
        let reasons = session
            .take_notifications()
            .into_iter()
            .map(|n| n.message)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Could not save document: {}", reasons);
    };

    let document = session.document();
    println!("{} Created {}", "✓".green(), document.title.bold());
    println!("   Id:     {}", id.bright_white());
    println!("   Pages:  {}", document.pages.len());
    println!("   Blocks: {}", document.block_count());
    println!("   Dir:    {}", store.dir().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_editor::DocumentStore;

    #[test]
    fn test_new_saves_instantiated_document() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let args = NewArgs {
            template: "client-case-study".to_string(),
            title: Some("Acme Rollout".to_string()),
            out: None,
        };
        new(args, &cwd).unwrap();

        let store = Config::default().store(&cwd);
        let saved = store.list().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Acme Rollout");
        assert_eq!(saved[0].page_count, 2);
    }

    #[test]
    fn test_unknown_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = NewArgs {
            template: "nope".to_string(),
            title: None,
            out: None,
        };
        assert!(new(args, &dir.path().display().to_string()).is_err());
    }
}
