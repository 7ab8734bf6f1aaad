use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::WordSelector;
use crate::store::{BlobBackend, WordStore};

use super::helpers::resolve_selectors;

pub fn run<B: BlobBackend>(store: &WordStore<B>, selectors: &[WordSelector]) -> Result<CmdResult> {
    let words = resolve_selectors(store.words(), selectors)?;
    Ok(CmdResult::default()
        .with_listed_words(words)
        .with_total(store.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn views_words_in_selector_order() {
        let f = StoreFixture::new()
            .with_word("Grace", &["অনুগ্রহ"])
            .with_verse_word("Faith", "বিশ্বাস", "Hebrews 11:1");

        let result = run(
            &f.store,
            &[WordSelector::Text("faith".into()), WordSelector::Index(1)],
        )
        .unwrap();

        assert_eq!(result.listed_words.len(), 2);
        assert_eq!(result.listed_words[0].word.english_word, "Faith");
        assert_eq!(result.listed_words[0].word.verses[0].reference, "Hebrews 11:1");
        assert_eq!(result.listed_words[1].index, 1);
    }

    #[test]
    fn unknown_selector_fails() {
        let f = StoreFixture::new().with_word("Grace", &["অনুগ্রহ"]);
        assert!(run(&f.store, &[WordSelector::Index(9)]).is_err());
    }
}
