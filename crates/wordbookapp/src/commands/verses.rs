use crate::capture::VerseDraft;
use crate::commands::CmdResult;
use crate::error::{Result, WordbookError};
use crate::index::WordSelector;
use crate::model::{VerseReference, WordUpdate};
use crate::store::{BlobBackend, WordStore};
use std::str::FromStr;

use super::helpers::resolve_in_store;
use super::update::apply;

/// Picks one verse of a word: by 1-based position, or by reference text or id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseSelector {
    Position(usize),
    Reference(String),
}

impl FromStr for VerseSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<usize>() {
            Ok(n) => VerseSelector::Position(n),
            Err(_) => VerseSelector::Reference(s.to_string()),
        })
    }
}

pub fn add<B: BlobBackend>(
    store: &mut WordStore<B>,
    selector: &WordSelector,
    draft: VerseDraft,
) -> Result<CmdResult> {
    if draft.is_blank() {
        return Err(WordbookError::InvalidInput(
            "A verse needs a reference or a text".to_string(),
        ));
    }
    let target = resolve_in_store(store, selector)?;
    let verse = draft.into_verse();
    let label = verse_label(&verse);

    let mut verses = target.word.verses.clone();
    verses.push(verse);

    apply(store, selector, WordUpdate::new().verses(verses), |word| {
        format!("Verse added to {}: {}", word, label)
    })
}

pub fn remove<B: BlobBackend>(
    store: &mut WordStore<B>,
    selector: &WordSelector,
    verse: &VerseSelector,
) -> Result<CmdResult> {
    let target = resolve_in_store(store, selector)?;
    let mut verses = target.word.verses.clone();
    let position = find_verse(&verses, verse).ok_or_else(|| {
        WordbookError::Api(format!(
            "{} has no verse matching {}",
            target.word.english_word,
            describe(verse)
        ))
    })?;
    let removed = verses.remove(position);
    let label = verse_label(&removed);

    apply(store, selector, WordUpdate::new().verses(verses), |word| {
        format!("Verse removed from {}: {}", word, label)
    })
}

fn find_verse(verses: &[VerseReference], selector: &VerseSelector) -> Option<usize> {
    match selector {
        VerseSelector::Position(n) => (*n >= 1 && *n <= verses.len()).then(|| n - 1),
        VerseSelector::Reference(text) => {
            let lower = text.to_lowercase();
            verses
                .iter()
                .position(|v| v.reference.to_lowercase() == lower)
                .or_else(|| {
                    if WordSelector::looks_like_id_prefix(text) {
                        verses
                            .iter()
                            .position(|v| v.id.to_string().starts_with(&lower))
                    } else {
                        None
                    }
                })
        }
    }
}

fn describe(selector: &VerseSelector) -> String {
    match selector {
        VerseSelector::Position(n) => format!("#{}", n),
        VerseSelector::Reference(r) => format!("\"{}\"", r),
    }
}

fn verse_label(verse: &VerseReference) -> String {
    if verse.reference.is_empty() {
        let mut text: String = verse.text.chars().take(30).collect();
        if verse.text.chars().count() > 30 {
            text.push('…');
        }
        text
    } else {
        verse.reference.clone()
    }
}
