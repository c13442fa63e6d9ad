//! Document → [`FsRiver`] decoding.
//!
//! Expected input:
//!
//! ```json
//! {
//!   "type": "fs",
//!   "fs": {
//!     "name": "tmp",
//!     "url": "/tmp_es",
//!     "update_rate": 30000,
//!     "includes": "*.doc,*.pdf",
//!     "excludes": "resume.*",
//!     "analyzer": "standard"
//!   },
//!   "index": { "index": "docs", "type": "doc" }
//! }
//! ```
//!
//! [`decode`] reports the first problem it meets. [`decode_lenient`] keeps
//! whatever was decoded before that problem and never fails; it exists for
//! stored documents that predate strict checking.

use serde::Deserialize;
use serde_json::Value;

use crate::error::DecodeError;
use crate::models::{Document, FsRiver, FS_RIVER_TYPE};
use crate::path::{single_string, single_u64};
use crate::units::millis_to_secs;

/// How decode failures reach the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Fail with the specific [`DecodeError`].
    #[default]
    Strict,
    /// Return the partially decoded river and log the failure.
    Lenient,
}

/// Decodes a river document, failing on the first violation.
pub fn decode(doc: &Document) -> Result<FsRiver, DecodeError> {
    let mut river = FsRiver::default();
    decode_into(doc, &mut river)?;
    tracing::debug!(id = ?river.id, "decoded fs river");
    Ok(river)
}

/// Decodes as much of the document as possible.
///
/// Fields are filled in document order until the first failure; the rest
/// stay unset. A document with a wrong discriminator yields an empty river.
pub fn decode_lenient(doc: &Document) -> FsRiver {
    let mut river = FsRiver::default();
    if let Err(e) = decode_into(doc, &mut river) {
        tracing::warn!(error = %e, id = ?river.id, "fs river partially decoded");
    }
    river
}

pub fn decode_with(doc: &Document, mode: DecodeMode) -> Result<FsRiver, DecodeError> {
    match mode {
        DecodeMode::Strict => decode(doc),
        DecodeMode::Lenient => Ok(decode_lenient(doc)),
    }
}

/// Parses JSON text and decodes it. Malformed JSON fails in either mode.
pub fn decode_str(json: &str, mode: DecodeMode) -> Result<FsRiver, DecodeError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(doc) => decode_with(&doc, mode),
        _ => Err(DecodeError::TypeCoercion {
            path: "$".to_string(),
            expected: "an object",
        }),
    }
}

fn decode_into(doc: &Document, river: &mut FsRiver) -> Result<(), DecodeError> {
    check_discriminator(doc)?;
    if !matches!(doc.get(FS_RIVER_TYPE), Some(Value::Object(_))) {
        return Err(DecodeError::MissingSection(FS_RIVER_TYPE));
    }

    let name = single_string("fs.name", doc)?;
    river.id = name.clone();
    river.name = name;
    river.url = single_string("fs.url", doc)?;

    let millis = single_u64("fs.update_rate", doc)?
        .ok_or(DecodeError::MissingRequiredField("fs.update_rate"))?;
    river.update_rate = Some(millis_to_secs(millis));

    river.includes = single_string("fs.includes", doc)?;
    river.excludes = single_string("fs.excludes", doc)?;
    river.analyzer = single_string("fs.analyzer", doc)?;

    if doc.contains_key("index") {
        river.index_name = single_string("index.index", doc)?;
        river.type_name = single_string("index.type", doc)?;
    }

    Ok(())
}

fn check_discriminator(doc: &Document) -> Result<(), DecodeError> {
    match doc.get("type") {
        Some(Value::String(t)) if t.eq_ignore_ascii_case(FS_RIVER_TYPE) => Ok(()),
        Some(Value::String(t)) => Err(DecodeError::InvalidDiscriminator {
            found: Some(t.clone()),
        }),
        Some(other) => Err(DecodeError::InvalidDiscriminator {
            found: Some(other.to_string()),
        }),
        None => Err(DecodeError::InvalidDiscriminator { found: None }),
    }
}
