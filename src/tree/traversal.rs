//! Directory listing primitive used by the indexer.
//!
//! Listings are read eagerly and returned in the order the filesystem yields
//! them. Nothing is re-sorted here; output order is fixed later by the
//! sorted maps in the index tree.

use std::ffi::OsString;
use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};

/// What kind of filesystem object a listed entry is.
///
/// Symlinks are reported as such and never followed, so a link to a
/// directory is indexed like a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Fifo, socket, device node and the like
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// A single entry of a directory listing.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ListedEntry {
    /// Lossy UTF-8 form of the entry name, as stored in the index.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Read a whole directory listing into memory.
///
/// Fails if the directory cannot be opened. Individual entries that fail to
/// stat are returned through `on_entry_error` and left out.
pub fn read_entries(
    path: &Path,
    mut on_entry_error: impl FnMut(io::Error),
) -> io::Result<Vec<ListedEntry>> {
    let mut listed = Vec::new();

    for entry in std::fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                on_entry_error(e);
                continue;
            }
        };
        let kind = match entry.file_type() {
            Ok(t) => EntryKind::from(t),
            Err(e) => {
                on_entry_error(e);
                continue;
            }
        };
        listed.push(ListedEntry {
            name: entry.file_name(),
            path: entry.path(),
            kind,
        });
    }

    Ok(listed)
}
