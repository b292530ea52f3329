//! Cache document envelope
//!
//! The written document has two sections: `metadata`, describing when and by
//! what the cache was generated, and `cache`, holding the index tree.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::tree::DirectoryNode;

/// Schema version understood by the asset loader.
pub const SCHEMA_VERSION: u32 = 2;

/// Tool identifier written into every document.
pub const TOOL: &str = concat!("ncache ", env!("CARGO_PKG_VERSION"));

/// Generation info stored alongside the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub version: u32,
    /// Generation date, `YYYY-MM-DD`
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub tool: String,
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&date.format("%Y-%m-%d"))
}

impl Metadata {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            version: SCHEMA_VERSION,
            date,
            tool: TOOL.to_string(),
        }
    }

    /// Metadata stamped with today's local date.
    pub fn now() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// Root document: metadata plus the index tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDocument {
    pub metadata: Metadata,
    pub cache: DirectoryNode,
}

impl CacheDocument {
    pub fn new(cache: DirectoryNode) -> Self {
        Self::with_metadata(Metadata::now(), cache)
    }

    pub fn with_metadata(metadata: Metadata, cache: DirectoryNode) -> Self {
        Self { metadata, cache }
    }
}
