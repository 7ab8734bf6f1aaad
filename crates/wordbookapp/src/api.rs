//! # API Facade
//!
//! The single entry point for all wordbook operations, whatever UI is driving them.
//!
//! The facade:
//! - **Dispatches** to the command functions in [`crate::commands`]
//! - **Normalizes inputs**: selector strings become [`WordSelector`]s, sort names
//!   become [`SortMode`]s
//! - **Returns structured types**: `Result<CmdResult>`, never strings for display
//!
//! It owns the [`WordStore`] and is generic over its [`BlobBackend`], so the whole
//! API can be exercised in memory:
//! - Production: `WordbookApi<FsBackend>`
//! - Testing: `WordbookApi<MemBackend>`

use crate::capture::{VerseDraft, WordDraft};
use crate::commands;
use crate::error::Result;
use crate::index::WordSelector;
use crate::model::BibleWord;
use crate::query::SortMode;
use crate::store::{BlobBackend, WordStore};
use std::str::FromStr;

pub struct WordbookApi<B: BlobBackend> {
    store: WordStore<B>,
}

impl<B: BlobBackend> WordbookApi<B> {
    /// Wraps a store. The store is loaded here if the caller has not done so.
    pub fn new(mut store: WordStore<B>) -> Self {
        if store.is_loading() {
            store.load();
        }
        Self { store }
    }

    pub fn from_backend(backend: B) -> Self {
        Self::new(WordStore::open(backend))
    }

    pub fn create_word(&mut self, draft: WordDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn get_words(&self, filter: WordFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn search_words(&self, term: &str, sort: SortMode) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, WordFilter::search(term).sorted(sort))
    }

    pub fn view_words<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::view::run(&self.store, &selectors)
    }

    pub fn update_word(&mut self, selector: &str, edit: WordEdit) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &parse_selector(selector), edit)
    }

    pub fn delete_words<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn add_verse(&mut self, selector: &str, draft: VerseDraft) -> Result<commands::CmdResult> {
        commands::verses::add(&mut self.store, &parse_selector(selector), draft)
    }

    pub fn remove_verse(&mut self, selector: &str, verse: &str) -> Result<commands::CmdResult> {
        let verse = VerseSelector::from_str(verse).unwrap_or_else(|e| match e {});
        commands::verses::remove(&mut self.store, &parse_selector(selector), &verse)
    }

    pub fn add_meaning(&mut self, selector: &str, meaning: &str) -> Result<commands::CmdResult> {
        commands::meanings::add(&mut self.store, &parse_selector(selector), meaning)
    }

    pub fn remove_meaning(
        &mut self,
        selector: &str,
        meaning: &str,
    ) -> Result<commands::CmdResult> {
        commands::meanings::remove(&mut self.store, &parse_selector(selector), meaning)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    /// The full collection, in insertion order.
    pub fn words(&self) -> &[BibleWord] {
        self.store.words()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn store(&self) -> &WordStore<B> {
        &self.store
    }
}

fn parse_selector(input: &str) -> WordSelector {
    WordSelector::from_str(input).unwrap_or_else(|e| match e {})
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<WordSelector> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use commands::get::WordFilter;
pub use commands::stats::Stats;
pub use commands::update::WordEdit;
pub use commands::verses::VerseSelector;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
