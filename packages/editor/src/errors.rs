//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Model error: {0}")]
    Model(#[from] folio_model::ModelError),

    #[error("Template error: {0}")]
    Template(#[from] folio_templates::TemplateError),

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by an upload backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("File is empty")]
    Empty,

    #[error("File is too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Upload backend error: {0}")]
    Backend(String),
}
