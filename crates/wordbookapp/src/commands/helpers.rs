use crate::error::{Result, WordbookError};
use crate::index::{DisplayWord, WordSelector};
use crate::model::BibleWord;
use crate::store::{BlobBackend, WordStore};
use uuid::Uuid;

/// Resolve one selector to a word and its canonical index.
pub fn resolve_selector(words: &[BibleWord], selector: &WordSelector) -> Result<DisplayWord> {
    let position = match selector {
        WordSelector::Index(n) => {
            if *n == 0 || *n > words.len() {
                return Err(WordbookError::Api(format!("Index {} not found", n)));
            }
            n - 1
        }
        WordSelector::Id(id) => words
            .iter()
            .position(|w| &w.id == id)
            .ok_or(WordbookError::WordNotFound(*id))?,
        WordSelector::Text(text) => resolve_text(words, text)?,
    };

    Ok(DisplayWord {
        index: position + 1,
        word: words[position].clone(),
    })
}

/// Resolve several selectors, failing on the first that does not match.
/// Duplicates are collapsed, keeping the first occurrence.
pub fn resolve_selectors(
    words: &[BibleWord],
    selectors: &[WordSelector],
) -> Result<Vec<DisplayWord>> {
    let mut resolved: Vec<DisplayWord> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let dw = resolve_selector(words, selector)?;
        if !resolved.iter().any(|r| r.word.id == dw.word.id) {
            resolved.push(dw);
        }
    }
    Ok(resolved)
}

/// Convenience for commands: resolve against the store's current collection.
pub fn resolve_in_store<B: BlobBackend>(
    store: &WordStore<B>,
    selector: &WordSelector,
) -> Result<DisplayWord> {
    resolve_selector(store.words(), selector)
}

/// English word first (exact, case-insensitive), then UUID prefix.
fn resolve_text(words: &[BibleWord], text: &str) -> Result<usize> {
    let lower = text.to_lowercase();
    let by_word: Vec<usize> = positions(words, |w| w.english_word.to_lowercase() == lower);
    match by_word.len() {
        1 => return Ok(by_word[0]),
        0 => {}
        n => {
            return Err(WordbookError::Api(format!(
                "\"{}\" matches {} words, select by index or id instead",
                text, n
            )))
        }
    }

    if WordSelector::looks_like_id_prefix(text) {
        let by_id = positions(words, |w| id_starts_with(&w.id, &lower));
        match by_id.len() {
            1 => return Ok(by_id[0]),
            0 => {}
            n => {
                return Err(WordbookError::Api(format!(
                    "Id prefix {} is ambiguous ({} words), add more characters",
                    text, n
                )))
            }
        }
    }

    Err(WordbookError::Api(format!("No word found matching \"{}\"", text)))
}

fn positions(words: &[BibleWord], pred: impl Fn(&BibleWord) -> bool) -> Vec<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| pred(w))
        .map(|(i, _)| i)
        .collect()
}

fn id_starts_with(id: &Uuid, prefix: &str) -> bool {
    let hyphenated = id.to_string();
    if hyphenated.starts_with(prefix) {
        return true;
    }
    id.simple().to_string().starts_with(&prefix.replace('-', ""))
}
