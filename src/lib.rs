//! # FS River
//!
//! Translation between filesystem river definitions and the JSON documents
//! a search engine stores them as, plus the index mapping for crawled files.
//!
//! ```text
//!  JSON document ──decode──▶ FsRiver ──encode──▶ JSON document
//!
//!  (type name, analyzer) ──build_schema──▶ mapping document
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `FsRiver` and the `Document` alias |
//! | [`path`] | Dotted-path lookup into documents |
//! | [`decode`] | Document → river, strict or lenient |
//! | [`encode`] | River → document |
//! | [`schema`] | Index mapping builder |
//! | [`units`] | Update rate unit conversion |
//! | [`error`] | Decode and encode error types |
//! | [`filter`] | Include/exclude glob filters |
//! | [`scan`] | Dry-run listing of crawled files |
//! | [`config`] | TOML configuration for the `fsriver` CLI |
//! | [`rivers`] | Listing of configured rivers |

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filter;
pub mod models;
pub mod path;
pub mod rivers;
pub mod scan;
pub mod schema;
pub mod units;

pub use decode::{decode, decode_lenient, decode_str, decode_with, DecodeMode};
pub use encode::{encode, encode_to_string, encode_to_writer};
pub use error::{DecodeError, EncodeError};
pub use models::{Document, FsRiver, FS_RIVER_TYPE};
pub use path::extract_raw_values;
pub use schema::{build_schema, schema_for_river};
