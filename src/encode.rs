//! [`FsRiver`] → document encoding.
//!
//! Key order is fixed: `type`, then `fs.{name, url, update_rate, includes,
//! excludes, analyzer}`, then `index.{index, type}`. Unset fields are
//! written as `null`.

use std::io::Write;

use serde_json::{json, Value};

use crate::error::EncodeError;
use crate::models::{Document, FsRiver, FS_RIVER_TYPE};
use crate::units::secs_to_millis;

/// Builds the canonical document for `river`.
pub fn encode(river: &FsRiver) -> Result<Document, EncodeError> {
    let update_rate = match river.update_rate {
        Some(secs) => Some(secs_to_millis(secs).ok_or(EncodeError::UpdateRateOverflow(secs))?),
        None => None,
    };

    let mut doc = Document::new();
    doc.insert("type".to_string(), Value::from(FS_RIVER_TYPE));
    doc.insert(
        FS_RIVER_TYPE.to_string(),
        json!({
            "name": river.id,
            "url": river.url,
            "update_rate": update_rate,
            "includes": river.includes,
            "excludes": river.excludes,
            "analyzer": river.analyzer,
        }),
    );
    doc.insert(
        "index".to_string(),
        json!({
            "index": river.index_name,
            "type": river.type_name,
        }),
    );

    tracing::debug!(id = ?river.id, "encoded fs river");
    Ok(doc)
}

/// Encodes `river` as JSON into `writer`, flushing on success.
pub fn encode_to_writer<W: Write>(
    river: &FsRiver,
    mut writer: W,
    pretty: bool,
) -> Result<(), EncodeError> {
    let doc = encode(river)?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &doc)?;
    } else {
        serde_json::to_writer(&mut writer, &doc)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn encode_to_string(river: &FsRiver, pretty: bool) -> Result<String, EncodeError> {
    let doc = encode(river)?;
    let text = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> FsRiver {
        FsRiver::new("tmp")
            .with_url("/tmp_es")
            .with_update_rate(30)
            .with_includes("*.doc,*.pdf")
            .with_excludes("resume.*")
            .with_analyzer("standard")
            .with_index("docs", "doc")
    }

    #[test]
    fn test_encode_shape() {
        let doc = encode(&sample()).unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({
                "type": "fs",
                "fs": {
                    "name": "tmp",
                    "url": "/tmp_es",
                    "update_rate": 30000,
                    "includes": "*.doc,*.pdf",
                    "excludes": "resume.*",
                    "analyzer": "standard"
                },
                "index": {"index": "docs", "type": "doc"}
            })
        );
    }

    #[test]
    fn test_key_order_is_fixed() {
        let text = encode_to_string(&sample(), false).unwrap();
        assert_eq!(
            text,
            r#"{"type":"fs","fs":{"name":"tmp","url":"/tmp_es","update_rate":30000,"includes":"*.doc,*.pdf","excludes":"resume.*","analyzer":"standard"},"index":{"index":"docs","type":"doc"}}"#
        );
    }

    #[test]
    fn test_unset_fields_are_null() {
        let doc = encode(&FsRiver::default()).unwrap();
        assert_eq!(doc["type"], json!("fs"));
        assert_eq!(doc["fs"]["name"], Value::Null);
        assert_eq!(doc["fs"]["update_rate"], Value::Null);
        assert_eq!(doc["index"]["type"], Value::Null);
    }

    #[test]
    fn test_name_comes_from_id() {
        let mut river = sample();
        river.name = Some("Display".to_string());
        let doc = encode(&river).unwrap();
        assert_eq!(doc["fs"]["name"], json!("tmp"));
    }

    #[test]
    fn test_overflow() {
        let river = FsRiver::new("big").with_update_rate(u64::MAX);
        assert!(matches!(
            encode(&river),
            Err(EncodeError::UpdateRateOverflow(u64::MAX))
        ));
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_serialization_fault() {
        let err = encode_to_writer(&sample(), BrokenWriter, true).unwrap_err();
        assert!(matches!(err, EncodeError::Serialization(_)));
    }
}
