//! Extension priority table used to pick a winner when several files map to
//! the same lookup key.
//!
//! Ranks are only meaningful inside a single [`PriorityNamespace`]. A lookup
//! returns the namespace together with the rank, so comparing an audio
//! extension against an image extension cannot produce an ordering.

use std::fmt;

/// Independent category of comparable file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityNamespace {
    Audio,
    Graphics,
    /// Game database and map formats, native binary before XML exports
    Data,
}

const AUDIO: &[&str] = &[".wav", ".flac", ".opus", ".ogg", ".mp3", ".mid"];
const GRAPHICS: &[&str] = &[".png", ".bmp", ".xyz"];
const DATA: &[&str] = &[".ldb", ".lmt", ".lmu", ".edb", ".emt", ".emu"];

impl PriorityNamespace {
    pub const ALL: [PriorityNamespace; 3] = [
        PriorityNamespace::Audio,
        PriorityNamespace::Graphics,
        PriorityNamespace::Data,
    ];

    /// Extensions of this namespace, best first.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            PriorityNamespace::Audio => AUDIO,
            PriorityNamespace::Graphics => GRAPHICS,
            PriorityNamespace::Data => DATA,
        }
    }

    /// Rank of `extension` within this namespace, if it belongs here.
    ///
    /// `extension` includes the leading dot. Matching is case-insensitive.
    pub fn rank(self, extension: &str) -> Option<usize> {
        let extension = extension.to_lowercase();
        self.extensions().iter().position(|e| *e == extension)
    }
}

impl fmt::Display for PriorityNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityNamespace::Audio => write!(f, "audio"),
            PriorityNamespace::Graphics => write!(f, "graphics"),
            PriorityNamespace::Data => write!(f, "data"),
        }
    }
}

/// Position of a known extension in the priority table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionRank {
    pub namespace: PriorityNamespace,
    /// Lower is better.
    pub rank: usize,
}

impl ExtensionRank {
    /// Find the namespace and rank of an extension (with leading dot).
    pub fn lookup(extension: &str) -> Option<ExtensionRank> {
        PriorityNamespace::ALL.iter().find_map(|&namespace| {
            namespace
                .rank(extension)
                .map(|rank| ExtensionRank { namespace, rank })
        })
    }
}

/// Outcome of comparing a newly found file against the one already holding
/// a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The new file ranks strictly better and takes the key.
    Replace,
    /// Both are ranked in the same namespace but the new file is not better.
    KeepExisting,
    /// At least one extension is unknown, or they belong to different
    /// namespaces. The first-seen file keeps the key.
    Uncomparable,
}

/// Decide which of two conflicting extensions wins a key.
pub fn resolve(existing_extension: &str, new_extension: &str) -> Resolution {
    let (Some(existing), Some(new)) = (
        ExtensionRank::lookup(existing_extension),
        ExtensionRank::lookup(new_extension),
    ) else {
        return Resolution::Uncomparable;
    };

    if existing.namespace != new.namespace {
        return Resolution::Uncomparable;
    }

    if new.rank < existing.rank {
        Resolution::Replace
    } else {
        Resolution::KeepExisting
    }
}
