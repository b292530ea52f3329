//! Error types for indexing and output.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Cannot set negative recursion depth ({0})!")]
    Configuration(i64),

    #[error("Cannot read directory \"{}\": {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create output file \"{}\": {source}", .path.display())]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Write error: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
