//! ncache - case-insensitive JSON asset cache generator
//!
//! Walks a game directory and writes a JSON index mapping normalized,
//! lowercase names to the real file names on disk, so assets can be found
//! regardless of filesystem case or file extension.

pub mod error;
pub mod metadata;
pub mod normalize;
pub mod output;
pub mod priority;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{IndexError, Result};
pub use metadata::{CacheDocument, Metadata, SCHEMA_VERSION, TOOL};
pub use normalize::{normalize_key, normalize_os_key};
pub use output::{OutputConfig, to_json, write_json};
pub use priority::{ExtensionRank, PriorityNamespace, Resolution, resolve};
pub use tree::{DirectoryNode, Indexer, IndexerConfig, Node, RESERVED_KEY};
