//! # Configuration
//!
//! Wordbook configuration is loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `WORDBOOK_DATA_DIR`, `WORDBOOK_DEFAULT_SORT`.
//! 2. **Config file**: `wordbook.toml` in the OS config directory (via the
//!    `directories` crate), or the file named by `WORDBOOK_CONFIG`.
//! 3. **Compiled defaults**.
//!
//! The CLI `--data` flag overrides `data_dir` on top of all of these.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where the word list is stored |
//! | `default_sort` | `alphabetical` | Sort used by `list` when none is given |

use crate::error::{Result, WordbookError};
use crate::query::SortMode;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "wordbook.toml";

/// Configuration for wordbook, stored in `wordbook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordbookConfig {
    /// Directory holding the word list. Defaults to the OS data directory.
    #[config(env = "WORDBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Sort used when listing: "alphabetical", "recent" or "oldest".
    #[config(env = "WORDBOOK_DEFAULT_SORT", default = "alphabetical")]
    pub default_sort: String,
}

impl Default for WordbookConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_sort: SortMode::default().to_string(),
        }
    }
}

impl WordbookConfig {
    /// Load from environment and `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(path)
            .load()
            .map_err(|e| WordbookError::Config(e.to_string()))
    }

    /// The configured default sort, validated.
    pub fn sort_mode(&self) -> Result<SortMode> {
        self.default_sort.parse()
    }

    /// A commented `wordbook.toml` listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = WordbookConfig::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.sort_mode().unwrap(), SortMode::Alphabetical);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "default_sort = \"recent\"\ndata_dir = \"/tmp/words\"\n").unwrap();

        let config = WordbookConfig::load(&path).unwrap();
        assert_eq!(config.sort_mode().unwrap(), SortMode::Recent);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/words")));
    }

    #[test]
    fn test_invalid_sort_is_reported() {
        let config = WordbookConfig {
            default_sort: "sideways".to_string(),
            ..Default::default()
        };
        assert!(config.sort_mode().is_err());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "default_sort = [").unwrap();

        let err = WordbookConfig::load(&path).unwrap_err();
        assert!(matches!(err, WordbookError::Config(_)));
    }

    #[test]
    fn test_template_mentions_settings() {
        let template = WordbookConfig::template();
        assert!(template.contains("default_sort"));
        assert!(template.contains("data_dir"));
    }
}
