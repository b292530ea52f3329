//! Key derivation helpers for indexed files

use crate::normalize::normalize_key;

/// Extensions that are always part of the key.
///
/// Config files and translation catalogs are looked up with their extension
/// by the engine, so `Font.ini` must stay distinct from `Font.png`.
pub const KEEP_EXTENSION: &[&str] = &[".ini", ".po"];

/// Base name of the one root file whose extension is stripped anyway.
pub const ROOT_SENTINEL: &str = "exfont";

/// Split a file name into base name and extension.
///
/// The extension starts at the last `.` and includes it. A leading dot does
/// not start an extension, so `.hidden` has none.
///
/// ```
/// use ncache::tree::split_extension;
///
/// assert_eq!(split_extension("Title.PNG"), ("Title", ".PNG"));
/// assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_extension("README"), ("README", ""));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// ```
pub fn split_extension(name: &str) -> (&str, &str) {
    // idx > 0 keeps dotfiles from keying to an empty string
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Whether `extension` belongs to the always-kept set.
pub fn keeps_extension(extension: &str) -> bool {
    let extension = extension.to_lowercase();
    KEEP_EXTENSION.contains(&extension.as_str())
}

/// Lookup key for a file named `name` found at `depth`.
///
/// Below the root the extension is stripped unless it is in
/// [`KEEP_EXTENSION`]. At the root the full name is kept, except for the
/// [`ROOT_SENTINEL`] file.
pub fn file_key(name: &str, depth: usize) -> String {
    let (base, extension) = split_extension(name);

    if keeps_extension(extension) {
        return normalize_key(name);
    }

    let base_key = normalize_key(base);
    if depth > 0 || base_key == ROOT_SENTINEL {
        base_key
    } else {
        normalize_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("bgm.wav"), ("bgm", ".wav"));
        assert_eq!(split_extension("name."), ("name", "."));
        assert_eq!(split_extension(""), ("", ""));
        assert_eq!(split_extension("..double"), (".", ".double"));
    }

    #[test]
    fn test_keeps_extension_case_insensitive() {
        assert!(keeps_extension(".ini"));
        assert!(keeps_extension(".INI"));
        assert!(keeps_extension(".po"));
        assert!(!keeps_extension(".png"));
        assert!(!keeps_extension(""));
    }

    #[test]
    fn test_subdirectory_strips_extension() {
        assert_eq!(file_key("Hero.PNG", 1), "hero");
        assert_eq!(file_key("bgm.wav", 3), "bgm");
        assert_eq!(file_key("noext", 2), "noext");
    }

    #[test]
    fn test_root_keeps_extension() {
        assert_eq!(file_key("title.png", 0), "title.png");
        assert_eq!(file_key("RPG_RT.ldb", 0), "rpg_rt.ldb");
    }

    #[test]
    fn test_root_sentinel_is_stripped() {
        assert_eq!(file_key("exfont.png", 0), "exfont");
        assert_eq!(file_key("ExFont.BMP", 0), "exfont");
    }

    #[test]
    fn test_kept_extensions_everywhere() {
        assert_eq!(file_key("RPG_RT.ini", 0), "rpg_rt.ini");
        assert_eq!(file_key("Strings.PO", 2), "strings.po");
        assert_eq!(file_key("exfont.ini", 0), "exfont.ini");
    }

    #[test]
    fn test_key_is_normalized() {
        assert_eq!(file_key("ＢＧＭ.wav", 1), "bgm");
        assert_eq!(file_key("Foo.PNG", 1), file_key("foo.png", 1));
    }
}
