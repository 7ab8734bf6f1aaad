//! # Query Layer
//!
//! Filtering and ordering of the word collection for display.
//!
//! Everything here is a pure function of its inputs: the collection is borrowed,
//! never mutated, and every call returns a fresh `Vec`. The record store's
//! [`search`](crate::store::WordStore::search) and the display view built by
//! [`view`] share the single predicate [`matches`], so they cannot drift apart.
//!
//! ## Matching
//!
//! A word matches a query when any of these hold:
//! - the lowercased query is a substring of the lowercased English word,
//! - the lowercased query is a substring of the lowercased notes,
//! - the query, **as typed**, is a substring of one of the Bengali meanings.
//!
//! Bengali has no letter case, so meanings are compared without folding. A query
//! that is empty or only whitespace matches every word.
//!
//! ## Ordering
//!
//! [`SortMode`] selects one of three orders. All of them use a stable sort, so
//! ties keep the order of the filtered input.

use crate::error::{Result, WordbookError};
use crate::model::BibleWord;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Whether `word` should be shown for `query`.
///
/// Only the empty query matches everything. Whitespace is matched literally.
pub fn matches(word: &BibleWord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let lower = query.to_lowercase();
    word.english_word.to_lowercase().contains(&lower)
        || word.bengali_meanings.iter().any(|m| m.contains(query))
        || word.notes.to_lowercase().contains(&lower)
}

/// The words matching `query`, in collection order.
pub fn filter_words(words: &[BibleWord], query: &str) -> Vec<BibleWord> {
    words
        .iter()
        .filter(|word| matches(word, query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Ascending by English word, case-insensitive.
    #[default]
    Alphabetical,
    /// Most recently modified first.
    Recent,
    /// First created first.
    Oldest,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Alphabetical, SortMode::Recent, SortMode::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Alphabetical => "alphabetical",
            SortMode::Recent => "recent",
            SortMode::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = WordbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alphabetical" | "alpha" | "a-z" => Ok(SortMode::Alphabetical),
            "recent" | "newest" => Ok(SortMode::Recent),
            "oldest" => Ok(SortMode::Oldest),
            other => Err(WordbookError::InvalidInput(format!(
                "Unknown sort mode '{}' (expected alphabetical, recent or oldest)",
                other
            ))),
        }
    }
}

/// Sort `words` in place. Stable: equal keys keep their relative order.
pub fn sort_words(words: &mut [BibleWord], mode: SortMode) {
    match mode {
        SortMode::Alphabetical => {
            words.sort_by(|a, b| locale_cmp(&a.english_word, &b.english_word))
        }
        SortMode::Recent => words.sort_by_key(|w| Reverse(w.updated_at)),
        SortMode::Oldest => words.sort_by_key(|w| w.created_at),
    }
}

/// The display sequence for a collection: filtered by `query`, ordered by `mode`.
pub fn view(words: &[BibleWord], query: &str, mode: SortMode) -> Vec<BibleWord> {
    let mut result = filter_words(words, query);
    sort_words(&mut result, mode);
    result
}

/// Dictionary-style string comparison.
///
/// Compares by base letters first (ignoring case and accents), then by accents,
/// then puts lowercase before uppercase. "apple" < "Grace" < "Zeal", and
/// "apple" < "Apple".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfd().map(char::is_uppercase).collect()
}
