//! Configuration types for the indexer

use crate::error::{IndexError, Result};

/// Default recursion depth when none is given on the command line.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Configuration for tree indexing behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Directories are only descended while the current depth is below this.
    /// The root is depth 0, so 0 indexes root files only.
    pub max_depth: usize,
}

impl IndexerConfig {
    /// Build a config from a user supplied depth, rejecting negative values.
    pub fn from_depth(depth: i64) -> Result<Self> {
        let max_depth = usize::try_from(depth).map_err(|_| IndexError::Configuration(depth))?;
        Ok(Self { max_depth })
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
