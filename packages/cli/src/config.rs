use folio_editor::{EditorOptions, FileStore};
use folio_model::DocumentType;
use folio_templates::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory saved documents live in
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,

    /// External template catalog (JSON); the bundled catalog when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Document type used when a command does not name one
    #[serde(default)]
    pub default_document_type: DocumentType,

    /// Maximum undo levels for edit sessions
    #[serde(default = "default_undo_levels")]
    pub undo_levels: usize,
}

fn default_documents_dir() -> String {
    "documents".to_string()
}

fn default_undo_levels() -> usize {
    100
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the documents directory
    pub fn get_documents_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.documents_dir)
    }

    pub fn store(&self, cwd: &str) -> FileStore {
        FileStore::new(self.get_documents_dir(cwd))
    }

    /// The configured catalog, or the bundled one
    pub fn catalog(&self, cwd: &str) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => Ok(Catalog::load(&Path::new(cwd).join(path))?),
            None => Ok(Catalog::bundled().clone()),
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            undo_levels: self.undo_levels,
            ..EditorOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            catalog: None,
            default_document_type: DocumentType::default(),
            undo_levels: default_undo_levels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "documentsDir": "decks",
            "catalog": "templates.json",
            "defaultDocumentType": "case-study",
            "undoLevels": 20
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.documents_dir, "decks");
        assert_eq!(config.catalog.as_deref(), Some("templates.json"));
        assert_eq!(config.default_document_type, DocumentType::CaseStudy);
        assert_eq!(config.editor_options().undo_levels, 20);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.documents_dir, "documents");
        assert_eq!(config.undo_levels, 100);
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }
}
