use crate::capture::{validate_english_word, validate_meanings};
use crate::commands::{unsaved_warning, CmdMessage, CmdResult};
use crate::error::{Result, WordbookError};
use crate::index::{DisplayWord, WordSelector};
use crate::model::WordUpdate;
use crate::store::{BlobBackend, WordStore};

use super::helpers::resolve_in_store;

/// A user edit of a word's scalar fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct WordEdit {
    pub english_word: Option<String>,
    pub bengali_meanings: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl WordEdit {
    /// Validates the supplied fields with the same rules as capture.
    pub fn into_update(self) -> Result<WordUpdate> {
        let mut update = WordUpdate::new();
        if let Some(english) = self.english_word {
            update = update.english_word(validate_english_word(&english)?);
        }
        if let Some(meanings) = self.bengali_meanings {
            update = update.bengali_meanings(validate_meanings(&meanings)?);
        }
        if let Some(notes) = self.notes {
            update = update.notes(notes.trim());
        }
        Ok(update)
    }
}

pub fn run<B: BlobBackend>(
    store: &mut WordStore<B>,
    selector: &WordSelector,
    edit: WordEdit,
) -> Result<CmdResult> {
    let update = edit.into_update()?;
    if update.is_empty() {
        return Err(WordbookError::InvalidInput(
            "Nothing to change: pass at least one field to edit".to_string(),
        ));
    }
    apply(store, selector, update, |word| {
        format!("Word updated: {}", word)
    })
}

/// Resolve `selector`, apply `update`, and report the result.
/// Shared by the verse and meaning commands.
pub(crate) fn apply<B: BlobBackend>(
    store: &mut WordStore<B>,
    selector: &WordSelector,
    update: WordUpdate,
    message: impl FnOnce(&str) -> String,
) -> Result<CmdResult> {
    let target = resolve_in_store(store, selector)?;
    let id = target.word.id;
    let word = store
        .update(&id, update)?
        .ok_or(WordbookError::WordNotFound(id))?;

    let mut result = CmdResult::default().with_total(store.len());
    result.add_message(CmdMessage::success(message(&word.english_word)));
    if store.is_dirty() {
        result.add_message(unsaved_warning());
    }
    result.affected_words.push(DisplayWord {
        index: target.index,
        word,
    });
    Ok(result)
}
