//! Test harness for ncache integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use ncache::test_utils::TestTree;
use serde_json::Value;

pub fn run_ncache(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_ncache");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run ncache");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run ncache writing to stdout and parse the resulting document.
pub fn index_json(dir: &Path, args: &[&str]) -> Value {
    let (stdout, stderr, success) = run_ncache(dir, args);
    assert!(success, "ncache failed: {}", stderr);
    serde_json::from_str(&stdout).expect("stdout should be a JSON document")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("Music/Theme.ogg");
        assert!(file_path.exists());
    }
}
