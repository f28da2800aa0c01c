//! Persistence collaborators.
//!
//! The editor treats a loaded document as just another [`Document`] value;
//! stores only need to round-trip it by id.

use crate::errors::EditorError;
use chrono::{DateTime, Utc};
use folio_model::{Document, DocumentType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub trait DocumentStore {
    /// Persist a document; returns the id it can be loaded by
    fn save(&mut self, document: &Document) -> Result<String, EditorError>;

    /// Fails with [`EditorError::NotFound`] for unknown ids
    fn load(&self, id: &str) -> Result<Document, EditorError>;

    fn list(&self) -> Result<Vec<DocumentSummary>, EditorError>;
}

/// Listing entry for a saved document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub document_type: DocumentType,
    pub page_count: usize,
    pub saved_at: DateTime<Utc>,
}

/// On-disk envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedDocument {
    saved_at: DateTime<Utc>,
    document: Document,
}

impl SavedDocument {
    fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.document.id.clone(),
            title: self.document.title.clone(),
            document_type: self.document.document_type,
            page_count: self.document.pages.len(),
            saved_at: self.saved_at,
        }
    }
}

/// In-process store, mostly for tests and the wasm build
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, SavedDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, document: &Document) -> Result<String, EditorError> {
        self.documents.insert(
            document.id.clone(),
            SavedDocument {
                saved_at: Utc::now(),
                document: document.clone(),
            },
        );
        Ok(document.id.clone())
    }

    fn load(&self, id: &str) -> Result<Document, EditorError> {
        self.documents
            .get(id)
            .map(|saved| saved.document.clone())
            .ok_or_else(|| EditorError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<DocumentSummary>, EditorError> {
        Ok(self.documents.values().map(SavedDocument::summary).collect())
    }
}

/// One pretty-printed JSON file per document: `<dir>/<id>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, EditorError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EditorError::Storage(format!("Invalid document id '{}'", id)));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    fn read(&self, path: &Path) -> Result<SavedDocument, EditorError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl DocumentStore for FileStore {
    fn save(&mut self, document: &Document) -> Result<String, EditorError> {
        let path = self.path_for(&document.id)?;
        fs::create_dir_all(&self.dir)?;

        let saved = SavedDocument {
            saved_at: Utc::now(),
            document: document.clone(),
        };
        fs::write(&path, serde_json::to_string_pretty(&saved)?)?;

        info!(id = %document.id, path = %path.display(), "Saved document");
        Ok(document.id.clone())
    }

    fn load(&self, id: &str) -> Result<Document, EditorError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(EditorError::NotFound(id.to_string()));
        }
        Ok(self.read(&path)?.document)
    }

    fn list(&self) -> Result<Vec<DocumentSummary>, EditorError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.read(&path) {
                Ok(saved) => summaries.push(saved.summary()),
                Err(e) => debug!(path = %path.display(), error = %e, "Skipping unreadable file"),
            }
        }

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::Page;

    fn doc(id: &str) -> Document {
        let mut doc = Document::new(id, "Quarterly Review", DocumentType::Presentation);
        doc.add_page(Page::new("p1", "Cover"), None);
        doc
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let id = store.save(&doc("d1")).unwrap();

        assert_eq!(store.load(&id).unwrap(), doc("d1"));
        assert_eq!(store.list().unwrap()[0].page_count, 1);
        assert!(matches!(store.load("nope"), Err(EditorError::NotFound(_))));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("docs"));

        store.save(&doc("d1")).unwrap();
        store.save(&doc("d2")).unwrap();

        assert_eq!(store.load("d2").unwrap(), doc("d2"));
        let ids = store.list().unwrap().into_iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[test]
    fn test_file_store_writes_saved_at() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&doc("d1")).unwrap();

        let json = fs::read_to_string(dir.path().join("d1.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["savedAt"].is_string());
        assert_eq!(value["document"]["id"], "d1");
    }

    #[test]
    fn test_file_store_rejects_path_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(matches!(store.load("../etc/passwd"), Err(EditorError::Storage(_))));
        assert!(matches!(store.load("missing"), Err(EditorError::NotFound(_))));
    }

    #[test]
    fn test_list_of_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here"));
        assert!(store.list().unwrap().is_empty());
    }
}
