use crate::capture::WordDraft;
use crate::commands::{unsaved_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayWord;
use crate::store::{BlobBackend, WordStore};

pub fn run<B: BlobBackend>(store: &mut WordStore<B>, draft: WordDraft) -> Result<CmdResult> {
    let fields = draft.validate()?;
    let word = store.create(fields)?;

    let mut result = CmdResult::default().with_total(store.len());
    // New words are appended, so they always take the last index.
    result.affected_words.push(DisplayWord {
        index: store.len(),
        word: word.clone(),
    });
    result.add_message(CmdMessage::success(format!(
        "Word saved: {}",
        word.english_word
    )));
    if store.is_dirty() {
        result.add_message(unsaved_warning());
    }
    Ok(result)
}
