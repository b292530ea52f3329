//! Output configuration types

use std::path::PathBuf;

/// Where and how the cache document is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Destination file. `None` writes to stdout.
    pub destination: Option<PathBuf>,
    /// Indent the JSON instead of writing a single line
    pub pretty: bool,
}

impl OutputConfig {
    /// Build from a command line value, where `-` means stdout.
    pub fn from_arg(output: Option<PathBuf>, pretty: bool) -> Self {
        let destination = output.filter(|p| p.as_os_str() != "-");
        Self { destination, pretty }
    }

    pub fn is_stdout(&self) -> bool {
        self.destination.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_file() {
        let config = OutputConfig::from_arg(Some(PathBuf::from("index.json")), true);
        assert_eq!(config.destination, Some(PathBuf::from("index.json")));
        assert!(config.pretty);
        assert!(!config.is_stdout());
    }

    #[test]
    fn test_from_arg_stdout() {
        assert!(OutputConfig::from_arg(None, false).is_stdout());
        assert!(OutputConfig::from_arg(Some(PathBuf::from("-")), false).is_stdout());
    }
}
