//! Index mapping for documents produced by an FS river.
//!
//! The shape is consumed as-is by the search engine and by anything reading
//! the indexed files back, so field names, types and flags must not drift.
//! Only the type name and the content analyzer vary.

use serde_json::{json, Value};

use crate::error::EncodeError;
use crate::models::{Document, FsRiver};

const DATE_FORMAT: &str = "dateOptionalTime";

fn keyword_string() -> Value {
    json!({"type": "string", "analyzer": "keyword"})
}

fn date() -> Value {
    json!({"type": "date", "format": DATE_FORMAT})
}

/// Builds the mapping for `type_name`, analyzing file content with `analyzer`.
pub fn build_schema(type_name: &str, analyzer: &str) -> Document {
    let properties = json!({
        "file": {
            "type": "attachment",
            "path": "full",
            "fields": {
                "file": {
                    "type": "string",
                    "store": "yes",
                    "term_vector": "with_positions_offsets",
                    "analyzer": analyzer
                },
                "author": {"type": "string"},
                "title": {"type": "string", "store": "yes"},
                "name": {"type": "string"},
                "date": date(),
                "keywords": {"type": "string"},
                "content_type": {"type": "string"}
            }
        },
        "name": keyword_string(),
        "pathEncoded": keyword_string(),
        "postDate": date(),
        "rootpath": keyword_string(),
        "virtualpath": keyword_string()
    });

    let mut doc = Document::new();
    doc.insert(type_name.to_string(), json!({ "properties": properties }));
    doc
}

/// Mapping for a river's target type, or `None` unless both the document
/// type name and the analyzer are set.
///
/// Keyed by the document type name, not the index name that older stored
/// mappings were registered under.
pub fn schema_for_river(river: &FsRiver) -> Option<Document> {
    let type_name = river.type_name.as_deref()?;
    let analyzer = river.analyzer.as_deref()?;
    Some(build_schema(type_name, analyzer))
}

pub fn schema_to_string(
    type_name: &str,
    analyzer: &str,
    pretty: bool,
) -> Result<String, EncodeError> {
    let doc = build_schema(type_name, analyzer);
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

    #[test]
    fn test_schema_shape() {
        let doc = build_schema("doc", "standard");
        assert_eq!(doc.len(), 1);
        let props = &doc["doc"]["properties"];
        assert_eq!(props["file"]["type"], json!("attachment"));
        assert_eq!(props["file"]["path"], json!("full"));

        let content = &props["file"]["fields"]["file"];
        assert_eq!(content["store"], json!("yes"));
        assert_eq!(content["term_vector"], json!("with_positions_offsets"));
        assert_eq!(content["analyzer"], json!("standard"));

        assert_eq!(props["file"]["fields"]["title"]["store"], json!("yes"));
        assert_eq!(props["file"]["fields"]["date"]["format"], json!("dateOptionalTime"));
        for field in ["name", "pathEncoded", "rootpath", "virtualpath"] {
            assert_eq!(props[field], json!({"type": "string", "analyzer": "keyword"}));
        }
        assert_eq!(props["postDate"], json!({"type": "date", "format": "dateOptionalTime"}));
    }

    #[test]
    fn test_field_order() {
        let doc = build_schema("doc", "standard");
        let props = doc["doc"]["properties"].as_object().unwrap();
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["file", "name", "pathEncoded", "postDate", "rootpath", "virtualpath"]
        );
        let sub = props["file"]["fields"].as_object().unwrap();
        let keys: Vec<&str> = sub.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["file", "author", "title", "name", "date", "keywords", "content_type"]
        );
    }

    #[test]
    fn test_deterministic() {
        let a = schema_to_string("doc", "standard", false).unwrap();
        let b = schema_to_string("doc", "standard", false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_only_analyzer_differs() {
        let standard = schema_to_string("doc", "standard", false).unwrap();
        let french = schema_to_string("doc", "french", false).unwrap();
        assert_ne!(standard, french);
        assert_eq!(
            standard.replace("\"analyzer\":\"standard\"", "\"analyzer\":\"french\""),
            french
        );
    }

    #[test]
    fn test_schema_for_river() {
        let river = FsRiver::new("tmp").with_analyzer("french").with_index("docs", "doc");
        let doc = schema_for_river(&river).unwrap();
        assert!(doc.contains_key("doc"));
        assert!(!doc.contains_key("docs"));
        assert_eq!(
            doc["doc"]["properties"]["file"]["fields"]["file"]["analyzer"],
            json!("french")
        );
        assert!(schema_for_river(&FsRiver::new("tmp")).is_none());
    }
}
