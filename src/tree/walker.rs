//! Indexer - builds the lookup tree for a directory

use std::fmt;
use std::path::Path;

use log::{Level, Log, Record};

use crate::error::{IndexError, Result};
use crate::normalize::normalize_os_key;
use crate::priority::{ExtensionRank, Resolution, resolve};

use super::config::IndexerConfig;
use super::json_types::{DirectoryNode, Node, RESERVED_KEY};
use super::traversal::{EntryKind, ListedEntry, read_entries};
use super::utils::{file_key, split_extension};

/// Walks a directory tree depth-first and builds the lookup index.
///
/// All diagnostics go to the logger handed in at construction.
pub struct Indexer<'a> {
    config: IndexerConfig,
    logger: &'a dyn Log,
}

impl<'a> Indexer<'a> {
    pub fn new(config: IndexerConfig, logger: &'a dyn Log) -> Self {
        Self { config, logger }
    }

    /// Build the index rooted at `root`.
    ///
    /// Only an unreadable root is reported as an error. Unreadable
    /// subdirectories are logged and indexed as empty nodes.
    pub fn build(&self, root: &Path) -> Result<DirectoryNode> {
        let entries = read_entries(root, |e| self.entry_error(root, &e)).map_err(|source| {
            IndexError::DirectoryRead {
                path: root.to_path_buf(),
                source,
            }
        })?;
        Ok(self.fill_dir(DirectoryNode::default(), entries, 0))
    }

    fn walk_dir(&self, entry: &ListedEntry, depth: usize) -> Option<DirectoryNode> {
        let entries = match read_entries(&entry.path, |e| self.entry_error(&entry.path, &e)) {
            Ok(e) => e,
            Err(source) => {
                let err = IndexError::DirectoryRead {
                    path: entry.path.clone(),
                    source,
                };
                self.emit(Level::Error, format_args!("{}", err));
                return None;
            }
        };

        let node = DirectoryNode::named(entry.display_name());
        Some(self.fill_dir(node, entries, depth))
    }

    fn fill_dir(
        &self,
        mut node: DirectoryNode,
        entries: Vec<ListedEntry>,
        depth: usize,
    ) -> DirectoryNode {
        for entry in entries {
            match entry.kind {
                EntryKind::Directory => self.add_dir(&mut node, &entry, depth),
                EntryKind::File | EntryKind::Symlink => self.add_file(&mut node, &entry, depth),
                EntryKind::Other => self.emit(
                    Level::Debug,
                    format_args!("Skipping special file: {}", entry.path.display()),
                ),
            }
        }
        node
    }

    fn add_dir(&self, node: &mut DirectoryNode, entry: &ListedEntry, depth: usize) {
        if depth >= self.config.max_depth {
            self.emit(
                Level::Debug,
                format_args!("Skipping sub-directory: {}", entry.path.display()),
            );
            return;
        }

        let key = normalize_os_key(&entry.name);
        if key == RESERVED_KEY {
            self.emit(
                Level::Warn,
                format_args!(
                    "Skipping directory \"{}\": Name conflicts with reserved keyword!",
                    entry.path.display()
                ),
            );
            return;
        }

        // An unreadable subdirectory still occupies its key, with no contents
        let child = self.walk_dir(entry, depth + 1).unwrap_or_default();

        if let Some(Node::File(previous)) = node.entries.get(&key) {
            self.emit(
                Level::Warn,
                format_args!(
                    "Directory \"{}\" replaces file \"{}\" under key \"{}\"",
                    entry.display_name(),
                    previous,
                    key
                ),
            );
        }
        node.entries.insert(key, Node::Directory(child));
    }

    fn add_file(&self, node: &mut DirectoryNode, entry: &ListedEntry, depth: usize) {
        let name = entry.display_name();

        if name == RESERVED_KEY {
            self.emit(
                Level::Warn,
                format_args!(
                    "Skipping \"{}\": File conflicts with reserved keyword!",
                    entry.path.display()
                ),
            );
            return;
        }

        let key = file_key(&name, depth);
        if key == RESERVED_KEY {
            self.emit(
                Level::Warn,
                format_args!(
                    "Skipping \"{}\": Key conflicts with reserved keyword!",
                    entry.path.display()
                ),
            );
            return;
        }

        insert_file(node, key, name, self.logger);
    }

    fn entry_error(&self, dir: &Path, err: &std::io::Error) {
        self.emit(
            Level::Error,
            format_args!("Cannot read entry in \"{}\": {}", dir.display(), err),
        );
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        log_to(self.logger, level, args);
    }
}

fn log_to(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .level(level)
            .target(module_path!())
            .module_path_static(Some(module_path!()))
            .args(args)
            .build(),
    );
}

fn namespace_label(extension: &str) -> String {
    match ExtensionRank::lookup(extension) {
        Some(rank) => rank.namespace.to_string(),
        None => "unknown".to_string(),
    }
}

/// Insert a file under `key`, resolving conflicts with an existing file by
/// extension priority.
///
/// The first-seen file is kept unless the new one ranks strictly better in
/// the same priority namespace. A file never displaces a directory.
pub fn insert_file(node: &mut DirectoryNode, key: String, name: String, logger: &dyn Log) {
    let existing = match node.entries.get(&key) {
        None => {
            node.entries.insert(key, Node::File(name));
            return;
        }
        Some(Node::Directory(_)) => {
            log_to(
                logger,
                Level::Warn,
                format_args!(
                    "Skipping \"{}\": Key \"{}\" is taken by a directory",
                    name, key
                ),
            );
            return;
        }
        Some(Node::File(existing)) => existing,
    };

    let (_, existing_ext) = split_extension(existing);
    let (_, new_ext) = split_extension(&name);

    match resolve(existing_ext, new_ext) {
        Resolution::Replace => {
            log_to(
                logger,
                Level::Debug,
                format_args!(
                    "\"{}\" replaces \"{}\" under key \"{}\" (higher priority)",
                    name, existing, key
                ),
            );
            node.entries.insert(key, Node::File(name));
        }
        Resolution::KeepExisting => {
            log_to(
                logger,
                Level::Debug,
                format_args!(
                    "Keeping \"{}\" over \"{}\" under key \"{}\" (not higher priority)",
                    existing, name, key
                ),
            );
        }
        Resolution::Uncomparable => {
            log_to(
                logger,
                Level::Warn,
                format_args!(
                    "Keeping \"{}\" over \"{}\" under key \"{}\" (extensions not comparable: {} vs {})",
                    existing,
                    name,
                    key,
                    namespace_label(existing_ext),
                    namespace_label(new_ext)
                ),
            );
        }
    }
}
