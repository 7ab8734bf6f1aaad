use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_view;
use crate::query::{self, SortMode};
use crate::store::{BlobBackend, WordStore};

#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    pub search_term: Option<String>,
    pub sort: SortMode,
}

impl WordFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn sorted(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_searching(&self) -> bool {
        self.search_term
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}

pub fn run<B: BlobBackend>(store: &WordStore<B>, filter: WordFilter) -> Result<CmdResult> {
    let all = store.words();
    let term = filter.search_term.as_deref().unwrap_or("");
    let listed = index_view(all, query::view(all, term, filter.sort));

    Ok(CmdResult::default()
        .with_listed_words(listed)
        .with_total(all.len()))
}
