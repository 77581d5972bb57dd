//! TOML configuration for the interactive front end.
//!
//! Every key is optional:
//!
//! ```toml
//! export_path = "./zhesi_blackbox_records.json"
//! exit_words = ["退出", "exit", "q"]
//! export_on_exit = "ask"   # ask | always | never
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use zhesi_core::DEFAULT_EXPORT_FILE;

use crate::error::{Result, StoreError};

/// What to do with the trace when the interactive loop ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportOnExit {
    #[default]
    Ask,
    Always,
    Never,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export_path: PathBuf,
    pub exit_words: Vec<String>,
    pub export_on_exit: ExportOnExit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: Path::new(".").join(DEFAULT_EXPORT_FILE),
            exit_words: ["退出", "exit", "q"].iter().map(|s| s.to_string()).collect(),
            export_on_exit: ExportOnExit::default(),
        }
    }
}

impl Config {
    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| StoreError::InvalidData(format!("{}: {e}", path.display())))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Whether a trimmed input line ends the interactive session.
    pub fn is_exit_word(&self, line: &str) -> bool {
        let line = line.trim();
        self.exit_words.iter().any(|w| w == line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.export_path, Path::new("./zhesi_blackbox_records.json"));
        assert_eq!(config.export_on_exit, ExportOnExit::Ask);
        for w in ["退出", "exit", "q", "  q \n"] {
            assert!(config.is_exit_word(w), "{w:?} should exit");
        }
        assert!(!config.is_exit_word("quit"));
        assert!(!config.is_exit_word("存在"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("export_on_exit = \"never\"").unwrap();
        assert_eq!(config.export_on_exit, ExportOnExit::Never);
        assert_eq!(config.exit_words, Config::default().exit_words);
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            export_path = "/tmp/trace.json"
            exit_words = ["bye"]
            export_on_exit = "always"
        "#;
        let config = Config::from_toml_str(text).unwrap();
        assert_eq!(config.export_path, Path::new("/tmp/trace.json"));
        assert!(config.is_exit_word("bye"));
        assert!(!config.is_exit_word("exit"));
        assert_eq!(config.export_on_exit, ExportOnExit::Always);
    }

    #[test]
    fn test_unknown_export_mode_rejected() {
        assert!(Config::from_toml_str("export_on_exit = \"sometimes\"").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zhesi.toml");
        fs::write(&path, "exit_words = [\"再见\"]\n").unwrap();
        let config = Config::load_or_default(Some(&path)).unwrap();
        assert!(config.is_exit_word("再见"));
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(StoreError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "exit_words = 3").unwrap();
        assert!(matches!(Config::load(&bad), Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
