use crate::commands::{unsaved_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::WordSelector;
use crate::store::{BlobBackend, WordStore};

use super::helpers::resolve_selectors;

/// Permanently removes the selected words. There is no trash or undo.
pub fn run<B: BlobBackend>(
    store: &mut WordStore<B>,
    selectors: &[WordSelector],
) -> Result<CmdResult> {
    // Resolve everything up front so indexes refer to the collection as the user saw it.
    let resolved = resolve_selectors(store.words(), selectors)?;
    let mut result = CmdResult::default();

    for dw in resolved {
        if store.delete(&dw.word.id)?.is_some() {
            result.add_message(CmdMessage::success(format!(
                "Word deleted ({}): {}",
                dw.index, dw.word.english_word
            )));
            result.affected_words.push(dw);
        }
    }
    if store.is_dirty() {
        result.add_message(unsaved_warning());
    }

    Ok(result.with_total(store.len()))
}
