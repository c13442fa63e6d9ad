//! Error types for document translation.

use thiserror::Error;

/// Reasons a river document cannot be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Top-level `type` is missing or is not `"fs"`.
    #[error("river document must contain \"type\":\"fs\" (found {found:?})")]
    InvalidDiscriminator { found: Option<String> },

    #[error("river document must contain \"{0}\":{{...}}")]
    MissingSection(&'static str),

    #[error("required field {0} is missing")]
    MissingRequiredField(&'static str),

    #[error("field {path} must be {expected}")]
    TypeCoercion {
        path: String,
        expected: &'static str,
    },

    /// A scalar sits where the path needs to descend further.
    #[error("cannot resolve {path}: {segment} is not an object")]
    NotAnObject { path: String, segment: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a document cannot be produced.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("update rate of {0}s does not fit in milliseconds")]
    UpdateRateOverflow(u64),
}
