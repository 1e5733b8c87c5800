//! Console configuration, loaded from an optional JSON file
//!
//! Every field has a default so a missing or partial file still yields a
//! working config. CLI flags override whatever the file provides; that
//! merge happens in `main`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckConfig {
    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Directory CSV exports are written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Optional log file; logging is disabled when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_dir: default_export_dir(),
            log_file: None,
        }
    }
}

impl DeckConfig {
    /// Load from a JSON file, or return defaults when the file is absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = DeckConfig::default();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        fs::write(&path, r#"{ "page_size": 12 }"#).unwrap();

        let config = DeckConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn roundtrip() {
        let config = DeckConfig {
            page_size: 10,
            export_dir: PathBuf::from("/tmp/out"),
            log_file: Some(PathBuf::from("deck.log")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
