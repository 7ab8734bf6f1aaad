use super::backend::BlobBackend;
use super::STORAGE_KEY;
use crate::error::{Result, WordbookError};
use crate::model::{BibleWord, NewWord, WordUpdate};
use crate::query;
use chrono::Utc;
use uuid::Uuid;

/// The record store: the in-memory word collection, mirrored to one blob.
///
/// The collection is hydrated by [`load`](Self::load) and every mutation writes
/// the whole collection back. Mutations are refused until the load has run, so
/// an empty in-memory collection can never overwrite words still on disk.
pub struct WordStore<B: BlobBackend> {
    backend: B,
    words: Vec<BibleWord>,
    loaded: bool,
    dirty: bool,
}

impl<B: BlobBackend> WordStore<B> {
    /// Creates an unloaded store. Call [`load`](Self::load) before mutating.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            words: Vec::new(),
            loaded: false,
            dirty: false,
        }
    }

    /// Creates a store and loads it in one step.
    pub fn open(backend: B) -> Self {
        let mut store = Self::with_backend(backend);
        store.load();
        store
    }

    /// Hydrate the collection from the backend.
    ///
    /// Never fails: a missing blob gives an empty collection, and a blob that
    /// cannot be read or parsed is logged and discarded.
    pub fn load(&mut self) {
        self.words = match self.backend.load_blob(STORAGE_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<BibleWord>>(&raw) {
                Ok(words) => words,
                Err(e) => {
                    tracing::warn!(key = STORAGE_KEY, error = %e, "discarding unreadable word list");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!(key = STORAGE_KEY, error = %e, "failed to read word list");
                Vec::new()
            }
        };
        self.loaded = true;
        self.dirty = false;
        tracing::debug!(count = self.words.len(), "word list loaded");
    }

    /// True until [`load`](Self::load) has completed.
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// True when the last durable write failed and memory is ahead of storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The full collection, in insertion order.
    pub fn words(&self) -> &[BibleWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append a new word and persist. Returns the stored record.
    pub fn create(&mut self, fields: NewWord) -> Result<BibleWord> {
        self.ensure_loaded()?;
        let word = BibleWord::from_new(fields, Utc::now());
        self.words.push(word.clone());
        self.persist();
        Ok(word)
    }

    /// Merge `update` into the word with `id` and persist.
    ///
    /// A missing id is a no-op: nothing changes, nothing is written, and
    /// `Ok(None)` is returned.
    pub fn update(&mut self, id: &Uuid, update: WordUpdate) -> Result<Option<BibleWord>> {
        self.ensure_loaded()?;
        let Some(word) = self.words.iter_mut().find(|w| &w.id == id) else {
            return Ok(None);
        };
        word.apply(update, Utc::now());
        let updated = word.clone();
        self.persist();
        Ok(Some(updated))
    }

    /// Remove the word with `id` and persist. Returns the removed record, or
    /// `Ok(None)` when no word matched.
    pub fn delete(&mut self, id: &Uuid) -> Result<Option<BibleWord>> {
        self.ensure_loaded()?;
        let position = self.words.iter().position(|w| &w.id == id);
        let removed = position.map(|pos| self.words.remove(pos));
        self.persist();
        Ok(removed)
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<&BibleWord> {
        self.words.iter().find(|w| &w.id == id)
    }

    /// Words matching `query`, in collection order. See [`query::matches`].
    pub fn search(&self, query: &str) -> Vec<BibleWord> {
        query::filter_words(&self.words, query)
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(WordbookError::NotLoaded)
        }
    }

    /// Write the whole collection. A failed write leaves memory as the source
    /// of truth and marks the store dirty until a later write succeeds.
    fn persist(&mut self) {
        match self.write_all() {
            Ok(()) => {
                self.dirty = false;
                tracing::debug!(count = self.words.len(), "word list saved");
            }
            Err(e) => {
                self.dirty = true;
                tracing::error!(key = STORAGE_KEY, error = %e, "failed to save word list");
            }
        }
    }

    fn write_all(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.words).map_err(WordbookError::Serialization)?;
        self.backend.save_blob(STORAGE_KEY, &raw)
    }
}
