//! Error types for the model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Block is missing an id")]
    MissingId,

    #[error("Patch is not a JSON object")]
    PatchNotObject,

    #[error("Unknown field '{field}' for {kind} block")]
    UnknownField { kind: String, field: String },

    #[error("Patch does not fit {kind} block: {reason}")]
    InvalidPatch { kind: String, reason: String },

    #[error("Block kind '{0}' is not supported by this version")]
    UnsupportedKind(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
