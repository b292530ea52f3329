//! Directory indexing logic
//!
//! The [`Indexer`] walks a directory depth-first and builds a [`DirectoryNode`]
//! tree whose keys are normalized names:
//!
//! - `traversal` - eager directory listing
//! - `utils` - extension handling and file key derivation
//! - `walker` - the indexer and conflict resolution
//! - `json_types` - the tree types and their JSON shape

mod config;
mod json_types;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_MAX_DEPTH, IndexerConfig};
pub use json_types::{DirectoryNode, Node, RESERVED_KEY};
pub use traversal::{EntryKind, ListedEntry, read_entries};
pub use utils::{KEEP_EXTENSION, ROOT_SENTINEL, file_key, keeps_extension, split_extension};
pub use walker::{Indexer, insert_file};
