//! # Storage Layer
//!
//! The whole dictionary is one JSON array of [`BibleWord`](crate::model::BibleWord)
//! records, stored as a single blob under the fixed key [`STORAGE_KEY`].
//!
//! ## Two Layers
//!
//! 1. **[`BlobBackend`]**: raw I/O. Reads and writes opaque strings by key. Knows
//!    nothing about words.
//! 2. **[`WordStore`]**: the record store. Holds the collection in memory, hydrates
//!    it once with `load`, and writes the full collection back after every mutation.
//!
//! Splitting them keeps the store testable without a filesystem: tests inject
//! [`mem_backend::MemBackend`], production uses [`fs_backend::FsBackend`].
//!
//! ## Failure Policy
//!
//! - **Unreadable blob at load**: logged and discarded; the store starts empty.
//! - **Failed write**: logged; the in-memory collection stays authoritative and the
//!   store reports itself dirty until a later write succeeds.
//! - **Missing id on update/delete**: nothing changes; the caller gets `None`.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── bible-translation-words.json   # JSON array of words, verses inline
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod word_store;

pub use backend::BlobBackend;
pub use word_store::WordStore;

/// Key of the blob holding the word collection.
pub const STORAGE_KEY: &str = "bible-translation-words";

pub type FileWordStore = WordStore<fs_backend::FsBackend>;
pub type InMemoryWordStore = WordStore<mem_backend::MemBackend>;

impl InMemoryWordStore {
    /// A loaded, empty store backed by memory.
    pub fn in_memory() -> Self {
        WordStore::open(mem_backend::MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewWord, VerseReference};

    pub struct StoreFixture {
        pub store: InMemoryWordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryWordStore::in_memory(),
            }
        }

        pub fn with_word(mut self, english: &str, meanings: &[&str]) -> Self {
            let fields = NewWord::new(english, meanings.iter().map(|m| m.to_string()).collect());
            self.store.create(fields).unwrap();
            self
        }

        pub fn with_noted_word(mut self, english: &str, meaning: &str, notes: &str) -> Self {
            let fields = NewWord::new(english, vec![meaning.to_string()]).with_notes(notes);
            self.store.create(fields).unwrap();
            self
        }

        pub fn with_verse_word(mut self, english: &str, meaning: &str, reference: &str) -> Self {
            let fields = NewWord::new(english, vec![meaning.to_string()])
                .with_verse(VerseReference::new(reference, "", meaning));
            self.store.create(fields).unwrap();
            self
        }
    }
}
