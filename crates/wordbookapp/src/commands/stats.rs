use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobBackend, WordStore};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub words: usize,
    pub meanings: usize,
    pub verses: usize,
}

pub fn collect<B: BlobBackend>(store: &WordStore<B>) -> Stats {
    let words = store.words();
    Stats {
        words: words.len(),
        meanings: words.iter().map(|w| w.bengali_meanings.len()).sum(),
        verses: words.iter().map(|w| w.verses.len()).sum(),
    }
}

pub fn run<B: BlobBackend>(store: &WordStore<B>) -> Result<CmdResult> {
    let stats = collect(store);
    let mut result = CmdResult::default().with_total(stats.words);
    result.add_message(CmdMessage::info(format!(
        "{} {} saved, {} {}, {} {}",
        stats.words,
        plural(stats.words, "word", "words"),
        stats.meanings,
        plural(stats.meanings, "meaning", "meanings"),
        stats.verses,
        plural(stats.verses, "verse", "verses"),
    )));
    Ok(result)
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
