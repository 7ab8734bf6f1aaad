//! # Word Identifiers: UUID vs Display Index
//!
//! Words are identified by UUIDs, which are the right choice for storage and the
//! wrong one for typing. A terminal user wants `wordbook show 3` or
//! `wordbook show grace`.
//!
//! ## Canonical Index
//!
//! Every word gets a display index from its position in the **unsorted**
//! collection: the first word ever added is `1`, the next `2`, and so on. The
//! index travels with the word through filtering and sorting, so the number shown
//! next to a word in `wordbook list --sort recent` is the same number that
//! `wordbook delete` accepts. Deleting a word shifts the indexes after it.
//!
//! ## Selectors
//!
//! [`WordSelector`] is what a user may type to pick one word:
//! - a number: the display index,
//! - a full UUID,
//! - anything else: the English word (case-insensitive), or failing that a UUID
//!   prefix of at least [`MIN_ID_PREFIX`] characters.
//!
//! Resolution against a collection lives in [`crate::commands::helpers`].

use crate::model::BibleWord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Shortest UUID prefix accepted as a selector.
pub const MIN_ID_PREFIX: usize = 4;

/// A word paired with its canonical display index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayWord {
    pub index: usize,
    pub word: BibleWord,
}

/// Assigns canonical indexes, in collection order.
pub fn index_words(words: &[BibleWord]) -> Vec<DisplayWord> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| DisplayWord {
            index: i + 1,
            word: word.clone(),
        })
        .collect()
}

/// Re-attaches canonical indexes to a derived view (filtered and/or sorted).
pub fn index_view(all: &[BibleWord], view: Vec<BibleWord>) -> Vec<DisplayWord> {
    view.into_iter()
        .map(|word| {
            let index = all
                .iter()
                .position(|w| w.id == word.id)
                .map(|p| p + 1)
                .unwrap_or(0);
            DisplayWord { index, word }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSelector {
    Index(usize),
    Id(Uuid),
    Text(String),
}

impl WordSelector {
    /// True if `text` could be the start of a hyphenated UUID.
    pub fn looks_like_id_prefix(text: &str) -> bool {
        text.len() >= MIN_ID_PREFIX && text.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
    }
}

impl fmt::Display for WordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSelector::Index(i) => write!(f, "{}", i),
            WordSelector::Id(id) => write!(f, "{}", id),
            WordSelector::Text(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for WordSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Ok(WordSelector::Index(n));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(WordSelector::Id(id));
        }
        Ok(WordSelector::Text(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewWord;
    use crate::query::{view, SortMode};
    use chrono::Utc;

    fn words(names: &[&str]) -> Vec<BibleWord> {
        names
            .iter()
            .map(|n| BibleWord::from_new(NewWord::new(*n, vec!["x".into()]), Utc::now()))
            .collect()
    }

    #[test]
    fn indexes_follow_collection_order() {
        let all = words(&["Zeal", "Grace", "apple"]);
        let indexed = index_words(&all);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[2].index, 3);
        assert_eq!(indexed[2].word.english_word, "apple");
    }

    #[test]
    fn indexes_survive_sorting() {
        let all = words(&["Zeal", "Grace", "apple"]);
        let sorted = view(&all, "", SortMode::Alphabetical);
        let indexed = index_view(&all, sorted);

        let pairs: Vec<(usize, &str)> = indexed
            .iter()
            .map(|dw| (dw.index, dw.word.english_word.as_str()))
            .collect();
        assert_eq!(pairs, vec![(3, "apple"), (2, "Grace"), (1, "Zeal")]);
    }

    #[test]
    fn parses_selectors() {
        assert_eq!("3".parse::<WordSelector>().unwrap(), WordSelector::Index(3));

        let id = Uuid::new_v4();
        assert_eq!(
            id.to_string().parse::<WordSelector>().unwrap(),
            WordSelector::Id(id)
        );

        assert_eq!(
            " grace ".parse::<WordSelector>().unwrap(),
            WordSelector::Text("grace".into())
        );
    }

    #[test]
    fn id_prefix_detection() {
        assert!(WordSelector::looks_like_id_prefix("0b6c3c52"));
        assert!(WordSelector::looks_like_id_prefix("0b6c-3c52"));
        assert!(!WordSelector::looks_like_id_prefix("0b6"));
        assert!(!WordSelector::looks_like_id_prefix("grace"));
    }
}
