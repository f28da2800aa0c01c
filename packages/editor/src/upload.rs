//! Per-block upload resource.
//!
//! An upload is `Idle`, `InFlight`, or settled (`Resolved` / `Failed`).
//! The block's content only changes when an upload resolves; a failure
//! leaves the previous content in place.

use crate::errors::UploadError;
use folio_model::{BlockContent, BlockKind, ContentPatch};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    InFlight,
    Resolved(String),
    Failed(UploadError),
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::InFlight)
    }
}

/// Upload backend: turns file bytes into a durable public URL
pub trait Uploader {
    fn upload(&mut self, bytes: &[u8], file_name: &str) -> Result<String, UploadError>;
}

impl<F> Uploader for F
where
    F: FnMut(&[u8], &str) -> Result<String, UploadError>,
{
    fn upload(&mut self, bytes: &[u8], file_name: &str) -> Result<String, UploadError> {
        self(bytes, file_name)
    }
}

/// Content field an uploaded file URL is written to, for kinds that take uploads
pub fn upload_field(kind: BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::Image => Some("imageUrl"),
        BlockKind::Chart => Some("backgroundImage"),
        BlockKind::IdentityCard => Some("logoUrl"),
        _ => None,
    }
}

pub fn accepts_upload(content: &BlockContent) -> bool {
    content.kind().and_then(upload_field).is_some()
}

/// Patch writing `url` into the block's upload field
pub fn url_patch(kind: BlockKind, url: &str) -> Option<ContentPatch> {
    let field = upload_field(kind)?;
    let mut patch = ContentPatch::new();
    patch.insert(field.to_string(), Value::String(url.to_string()));
    Some(patch)
}

/// Reject obviously bad input before handing bytes to a backend
pub fn validate(bytes: &[u8], limit: usize) -> Result<(), UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if limit > 0 && bytes.len() > limit {
        return Err(UploadError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }
    Ok(())
}
