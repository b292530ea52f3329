//! Index tree types and their JSON shape
//!
//! A directory serializes as a JSON object mapping lookup keys to either a
//! nested object (subdirectory) or a string (the real file name):
//!
//! ```json
//! {
//!   "_dirname": "Music",
//!   "bgm": "BGM.wav",
//!   "battle": { "_dirname": "Battle", "boss": "Boss.ogg" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

/// Key used inside a directory node to store the directory's original name.
pub const RESERVED_KEY: &str = "_dirname";

/// One value in a directory node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Directory(DirectoryNode),
    /// Literal on-disk file name, case and extension preserved.
    File(String),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_file(&self) -> Option<&str> {
        match self {
            Node::File(name) => Some(name),
            Node::Directory(_) => None,
        }
    }

    pub fn as_dir(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

/// Contents of one directory, keyed by normalized name.
///
/// Entries are kept in a `BTreeMap` so serialization order is stable across
/// runs regardless of directory listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    /// Original name of the directory. `None` for the root.
    #[serde(rename = "_dirname", skip_serializing_if = "Option::is_none")]
    pub dirname: Option<String>,
    #[serde(flatten)]
    pub entries: BTreeMap<String, Node>,
}

impl DirectoryNode {
    /// Node for a subdirectory with the given original name.
    pub fn named(dirname: impl Into<String>) -> Self {
        Self {
            dirname: Some(dirname.into()),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// File name stored under `key`, if the key holds a file.
    pub fn file(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_file)
    }

    /// Subdirectory stored under `key`, if the key holds a directory.
    pub fn dir(&self, key: &str) -> Option<&DirectoryNode> {
        self.get(key).and_then(Node::as_dir)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of files in this node and all subdirectories.
    pub fn file_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                Node::File(_) => 1,
                Node::Directory(dir) => dir.file_count(),
            })
            .sum()
    }
}
