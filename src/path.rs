//! Dotted-path lookup into nested JSON documents.
//!
//! `extract_raw_values("fs.update_rate", doc)` walks `doc["fs"]["update_rate"]`.
//! Absent keys and explicit `null`s resolve to nothing. Arrays met on the way
//! are descended element by element, and an array at the leaf contributes
//! each of its elements, so a path can resolve to several values. Callers
//! that want a scalar take the first one.

use serde_json::Value;

use crate::error::DecodeError;
use crate::models::Document;

/// Collects every value addressed by `path`.
///
/// Returns an empty vector when any key along the path is missing. Fails
/// only when a non-object value sits where traversal has to continue.
pub fn extract_raw_values<'a>(
    path: &str,
    doc: &'a Document,
) -> Result<Vec<&'a Value>, DecodeError> {
    let segments: Vec<&str> = path.split('.').collect();
    let mut values = Vec::new();
    collect(doc, path, &segments, &mut values)?;
    Ok(values)
}

fn collect<'a>(
    map: &'a Document,
    path: &str,
    segments: &[&str],
    out: &mut Vec<&'a Value>,
) -> Result<(), DecodeError> {
    let Some((head, rest)) = segments.split_first() else {
        return Ok(());
    };
    let Some(value) = map.get(*head) else {
        return Ok(());
    };

    if rest.is_empty() {
        match value {
            Value::Null => {}
            Value::Array(items) => out.extend(items.iter().filter(|v| !v.is_null())),
            other => out.push(other),
        }
        return Ok(());
    }

    descend(value, head, path, rest, out)
}

fn descend<'a>(
    value: &'a Value,
    segment: &str,
    path: &str,
    rest: &[&str],
    out: &mut Vec<&'a Value>,
) -> Result<(), DecodeError> {
    match value {
        Value::Object(inner) => collect(inner, path, rest, out),
        Value::Array(items) => {
            for item in items {
                descend(item, segment, path, rest, out)?;
            }
            Ok(())
        }
        Value::Null => Ok(()),
        _ => Err(DecodeError::NotAnObject {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
    }
}

fn first<'a>(path: &str, doc: &'a Document) -> Result<Option<&'a Value>, DecodeError> {
    Ok(extract_raw_values(path, doc)?.into_iter().next())
}

/// First string at `path`, if any.
pub fn single_string(path: &str, doc: &Document) -> Result<Option<String>, DecodeError> {
    match first(path, doc)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::TypeCoercion {
            path: path.to_string(),
            expected: "a string",
        }),
    }
}

/// First non-negative integer at `path`, if any.
pub fn single_u64(path: &str, doc: &Document) -> Result<Option<u64>, DecodeError> {
    match first(path, doc)? {
        None => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| DecodeError::TypeCoercion {
            path: path.to_string(),
            expected: "a non-negative integer",
        }),
    }
}
