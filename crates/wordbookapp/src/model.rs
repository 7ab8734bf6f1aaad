//! # Data Model
//!
//! A [`BibleWord`] is one dictionary record: an English word, the Bengali meanings
//! chosen for it, free-form notes and the verses where those meanings were applied.
//! Each word exclusively owns its [`VerseReference`] list.
//!
//! The serialized form uses camelCase field names (`englishWord`, `bengaliMeanings`,
//! `createdAt`, ...) and RFC 3339 timestamps, which is the layout of the persisted
//! collection blob. See [`crate::store`].
//!
//! Identity and timestamps are owned by the store: callers build a [`NewWord`] (or a
//! [`WordUpdate`] for edits) and the store assigns `id`, `created_at` and `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single verse citation attached to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseReference {
    pub id: Uuid,
    /// Citation such as "Ephesians 2:8". Not validated against any canon.
    pub reference: String,
    pub text: String,
    /// Which of the word's meanings applies here. Not checked against the meaning list.
    pub chosen_meaning: String,
}

impl VerseReference {
    pub fn new(
        reference: impl Into<String>,
        text: impl Into<String>,
        chosen_meaning: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: reference.into(),
            text: text.into(),
            chosen_meaning: chosen_meaning.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleWord {
    pub id: Uuid,
    pub english_word: String,
    pub bengali_meanings: Vec<String>,
    pub notes: String,
    pub verses: Vec<VerseReference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BibleWord {
    /// Builds a stored record from caller-supplied fields, assigning a fresh id.
    pub fn from_new(fields: NewWord, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            english_word: fields.english_word,
            bengali_meanings: fields.bengali_meanings,
            notes: fields.notes,
            verses: fields.verses,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the supplied fields over this record.
    ///
    /// `id` and `created_at` are never touched. `updated_at` moves to `now`, but never
    /// backwards, so a clock step cannot make an edit look older than the record.
    pub fn apply(&mut self, update: WordUpdate, now: DateTime<Utc>) {
        if let Some(english_word) = update.english_word {
            self.english_word = english_word;
        }
        if let Some(meanings) = update.bengali_meanings {
            self.bengali_meanings = meanings;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(verses) = update.verses {
            self.verses = verses;
        }
        self.updated_at = now.max(self.updated_at);
    }
}

/// Fields for a word that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWord {
    pub english_word: String,
    pub bengali_meanings: Vec<String>,
    pub notes: String,
    pub verses: Vec<VerseReference>,
}

impl NewWord {
    pub fn new(english_word: impl Into<String>, bengali_meanings: Vec<String>) -> Self {
        Self {
            english_word: english_word.into(),
            bengali_meanings,
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_verse(mut self, verse: VerseReference) -> Self {
        self.verses.push(verse);
        self
    }
}

/// A partial edit. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordUpdate {
    pub english_word: Option<String>,
    pub bengali_meanings: Option<Vec<String>>,
    pub notes: Option<String>,
    pub verses: Option<Vec<VerseReference>>,
}

impl WordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn english_word(mut self, english_word: impl Into<String>) -> Self {
        self.english_word = Some(english_word.into());
        self
    }

    pub fn bengali_meanings(mut self, meanings: Vec<String>) -> Self {
        self.bengali_meanings = Some(meanings);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn verses(mut self, verses: Vec<VerseReference>) -> Self {
        self.verses = Some(verses);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.english_word.is_none()
            && self.bengali_meanings.is_none()
            && self.notes.is_none()
            && self.verses.is_none()
    }
}
