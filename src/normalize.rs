//! Lookup key normalization.
//!
//! Keys are only used for map indexing. The original name is always kept
//! separately so the asset loader can open the real file.

use std::ffi::OsStr;

use unicode_normalization::UnicodeNormalization;

/// Normalize a name segment into a lookup key.
///
/// Applies NFKC composition followed by Unicode lowercasing. The result does
/// not depend on the process locale.
///
/// ```
/// use ncache::normalize::normalize_key;
///
/// assert_eq!(normalize_key("Title.PNG"), "title.png");
/// assert_eq!(normalize_key("ＢＧＭ"), "bgm");
/// ```
pub fn normalize_key(name: &str) -> String {
    name.nfkc().collect::<String>().to_lowercase()
}

/// Normalize a raw filesystem name.
///
/// Names that are not valid UTF-8 are converted lossily: valid regions are
/// normalized and each invalid byte sequence becomes U+FFFD.
pub fn normalize_os_key(name: &OsStr) -> String {
    normalize_key(&name.to_string_lossy())
}
