//! # Locating the Word List
//!
//! Wordbook keeps one word list per user. Where it lives is decided once, at
//! startup, by [`initialize`]:
//!
//! 1. `data_override` (the CLI `--data` flag), used as-is.
//! 2. `data_dir` from [`WordbookConfig`] (env `WORDBOOK_DATA_DIR` or `wordbook.toml`).
//! 3. The OS data directory for the app (via the `directories` crate).
//! 4. `./.wordbook` when the OS gives no home to work from.
//!
//! The config file itself is `$WORDBOOK_CONFIG` if set, otherwise `wordbook.toml`
//! in the OS config directory. A missing config file is not an error.
//!
//! The store is opened and loaded before the context is returned, so callers never
//! see an unloaded store.

use crate::api::WordbookApi;
use crate::config::{WordbookConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use crate::store::WordStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the config file location. Mostly useful for tests.
pub const CONFIG_ENV: &str = "WORDBOOK_CONFIG";

const FALLBACK_DIR: &str = ".wordbook";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordbookPaths {
    pub data_dir: PathBuf,
    pub config_file: PathBuf,
}

pub struct WordbookContext {
    pub api: WordbookApi<FsBackend>,
    pub config: WordbookConfig,
    pub paths: WordbookPaths,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "wordbook", "wordbook")
}

/// Where `wordbook.toml` is read from.
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILENAME),
        None => PathBuf::from(FALLBACK_DIR).join(CONFIG_FILENAME),
    }
}

/// Picks the data directory, highest priority first.
pub fn resolve_data_dir(data_override: Option<PathBuf>, config: &WordbookConfig) -> PathBuf {
    data_override
        .or_else(|| config.data_dir.clone())
        .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
}

/// Load configuration, resolve paths and open the word store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<WordbookContext> {
    initialize_from(config_file_path(), data_override)
}

/// Like [`initialize`], reading configuration from an explicit file.
pub fn initialize_from(
    config_file: PathBuf,
    data_override: Option<PathBuf>,
) -> Result<WordbookContext> {
    let config = WordbookConfig::load(&config_file)?;
    let data_dir = resolve_data_dir(data_override, &config);

    tracing::debug!(
        data_dir = %data_dir.display(),
        config_file = %config_file.display(),
        "initializing wordbook"
    );

    let store = WordStore::open(FsBackend::new(&data_dir));
    let api = WordbookApi::new(store);

    Ok(WordbookContext {
        api,
        config,
        paths: WordbookPaths {
            data_dir,
            config_file,
        },
    })
}
