use crate::commands::CmdResult;
use crate::error::{Result, WordbookError};
use crate::index::WordSelector;
use crate::model::WordUpdate;
use crate::store::{BlobBackend, WordStore};

use super::helpers::resolve_in_store;
use super::update::apply;

pub fn add<B: BlobBackend>(
    store: &mut WordStore<B>,
    selector: &WordSelector,
    meaning: &str,
) -> Result<CmdResult> {
    let meaning = meaning.trim().to_string();
    if meaning.is_empty() {
        return Err(WordbookError::InvalidInput(
            "Meaning cannot be empty".to_string(),
        ));
    }
    let target = resolve_in_store(store, selector)?;
    if target.word.bengali_meanings.contains(&meaning) {
        return Err(WordbookError::InvalidInput(format!(
            "{} already has the meaning {}",
            target.word.english_word, meaning
        )));
    }

    let mut meanings = target.word.bengali_meanings.clone();
    meanings.push(meaning.clone());

    apply(
        store,
        selector,
        WordUpdate::new().bengali_meanings(meanings),
        |word| format!("Meaning added to {}: {}", word, meaning),
    )
}

/// Removes a meaning, given as its text or 1-based position.
/// A word always keeps at least one meaning.
pub fn remove<B: BlobBackend>(
    store: &mut WordStore<B>,
    selector: &WordSelector,
    meaning: &str,
) -> Result<CmdResult> {
    let target = resolve_in_store(store, selector)?;
    let mut meanings = target.word.bengali_meanings.clone();

    let wanted = meaning.trim();
    let position = meanings.iter().position(|m| m == wanted).or_else(|| {
        wanted
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1 && *n <= meanings.len())
            .map(|n| n - 1)
    });
    let Some(position) = position else {
        return Err(WordbookError::Api(format!(
            "{} has no meaning \"{}\"",
            target.word.english_word, wanted
        )));
    };
    if meanings.len() == 1 {
        return Err(WordbookError::InvalidInput(format!(
            "{} must keep at least one Bengali meaning",
            target.word.english_word
        )));
    }
    let removed = meanings.remove(position);

    apply(
        store,
        selector,
        WordUpdate::new().bengali_meanings(meanings),
        |word| format!("Meaning removed from {}: {}", word, removed),
    )
}
