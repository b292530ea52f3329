//! JSON output

use std::fs::File;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::{IndexError, Result};

use super::config::OutputConfig;

/// Encode a value as JSON, compact or with two-space indentation.
///
/// The returned text always ends with a newline.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}

/// Write a value as JSON to the configured destination.
///
/// The whole document is encoded before the destination is opened, so a
/// failure never leaves a partially written file behind.
pub fn write_json<T: Serialize>(value: &T, config: &OutputConfig) -> Result<()> {
    let json = to_json(value, config.pretty)?;

    match &config.destination {
        None => {
            log::debug!("Writing to stdout");
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
        Some(path) => {
            let mut file = File::create(path).map_err(|source| IndexError::OutputCreation {
                path: path.clone(),
                source,
            })?;
            file.write_all(json.as_bytes())?;
            file.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn sample() -> BTreeMap<&'static str, BTreeMap<&'static str, u32>> {
        let mut inner = BTreeMap::new();
        inner.insert("a", 1);
        let mut outer = BTreeMap::new();
        outer.insert("x", inner);
        outer
    }

    #[test]
    fn test_compact_is_single_line() {
        let json = to_json(&sample(), false).unwrap();
        assert_eq!(json, "{\"x\":{\"a\":1}}\n");
    }

    #[test]
    fn test_pretty_uses_two_spaces() {
        let json = to_json(&sample(), true).unwrap();
        assert_eq!(json, "{\n  \"x\": {\n    \"a\": 1\n  }\n}\n");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        let config = OutputConfig {
            destination: Some(path.clone()),
            pretty: false,
        };

        write_json(&sample(), &config).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"x\":{\"a\":1}}\n");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "x".repeat(100)).unwrap();
        let config = OutputConfig {
            destination: Some(path.clone()),
            pretty: false,
        };

        write_json(&sample(), &config).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"x\":{\"a\":1}}\n");
    }

    #[test]
    fn test_uncreatable_destination() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = OutputConfig {
            destination: Some(dir.path().join("missing").join("index.json")),
            pretty: false,
        };

        let err = write_json(&sample(), &config).unwrap_err();
        assert!(matches!(err, IndexError::OutputCreation { .. }));
        assert!(!dir.path().join("missing").exists());
    }
}
