//! Core data types shared by the decoder, encoder and schema builder.
//!
//! A river is a recurring filesystem crawl. Its document form is a loosely
//! typed JSON object; its in-memory form is [`FsRiver`], a plain value
//! object where every attribute may be unset.

use serde::Serialize;
use serde_json::{Map, Value};

/// Discriminator stored under the top-level `type` key of an FS river.
pub const FS_RIVER_TYPE: &str = "fs";

/// A nested JSON object as exchanged with the search engine.
pub type Document = Map<String, Value>;

/// One filesystem crawling task.
///
/// `id` and `name` are both populated from the document's `fs.name`;
/// the document form has no separate display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FsRiver {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Root path or URL to crawl.
    pub url: Option<String>,
    /// Crawl interval in seconds. Stored as milliseconds in documents.
    pub update_rate: Option<u64>,
    /// Comma-separated glob patterns of files to index.
    pub includes: Option<String>,
    /// Comma-separated glob patterns of files to skip.
    pub excludes: Option<String>,
    pub analyzer: Option<String>,
    pub index_name: Option<String>,
    pub type_name: Option<String>,
}

impl FsRiver {
    /// Creates a river whose id and display name are both `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: Some(id.clone()),
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_update_rate(mut self, secs: u64) -> Self {
        self.update_rate = Some(secs);
        self
    }

    pub fn with_includes(mut self, includes: impl Into<String>) -> Self {
        self.includes = Some(includes.into());
        self
    }

    pub fn with_excludes(mut self, excludes: impl Into<String>) -> Self {
        self.excludes = Some(excludes.into());
        self
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Sets the target index and document type.
    pub fn with_index(
        mut self,
        index_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        self.index_name = Some(index_name.into());
        self.type_name = Some(type_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_id_and_name() {
        let river = FsRiver::new("tmp");
        assert_eq!(river.id.as_deref(), Some("tmp"));
        assert_eq!(river.name.as_deref(), Some("tmp"));
        assert!(river.url.is_none());
        assert!(river.update_rate.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let river = FsRiver::new("docs")
            .with_url("/tmp_es")
            .with_update_rate(30)
            .with_includes("*.doc,*.pdf")
            .with_excludes("resume.*")
            .with_analyzer("standard")
            .with_index("docs", "doc");
        assert_eq!(river.url.as_deref(), Some("/tmp_es"));
        assert_eq!(river.update_rate, Some(30));
        assert_eq!(river.includes.as_deref(), Some("*.doc,*.pdf"));
        assert_eq!(river.excludes.as_deref(), Some("resume.*"));
        assert_eq!(river.index_name.as_deref(), Some("docs"));
        assert_eq!(river.type_name.as_deref(), Some("doc"));
    }
}
