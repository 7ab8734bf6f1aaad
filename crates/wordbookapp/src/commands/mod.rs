//! # Command Layer
//!
//! The business logic of wordbook. Each command lives in its own submodule and is a
//! plain function over a [`WordStore`](crate::store::WordStore).
//!
//! Commands:
//! - Take Rust values, return [`CmdResult`]
//! - Never print, prompt, or exit
//! - Resolve user selectors through [`helpers`], so a missing word is reported
//!   as an error here even though the store itself treats it as a no-op
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_words`: words created, edited or removed by the command
//! - `listed_words`: words to display, with their canonical index
//! - `total`: size of the whole collection, for "N of M" summaries
//! - `messages`: leveled messages for the UI to render
//!
//! ## Testing Strategy
//!
//! This is where most tests live. They run against
//! [`InMemoryWordStore`](crate::store::InMemoryWordStore), never the filesystem.
//!
//! ## Command Modules
//!
//! - [`create`] - capture and store a new word
//! - [`get`] - filtered, sorted listing
//! - [`view`] - fetch words by selector
//! - [`update`] - edit fields of a word
//! - [`delete`] - remove words permanently
//! - [`verses`] - add/remove verse references
//! - [`meanings`] - add/remove Bengali meanings
//! - [`stats`] - collection counts
//! - [`helpers`] - selector resolution

use crate::index::DisplayWord;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod meanings;
pub mod stats;
pub mod update;
pub mod verses;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_words: Vec<DisplayWord>,
    pub listed_words: Vec<DisplayWord>,
    pub total: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_words(mut self, words: Vec<DisplayWord>) -> Self {
        self.affected_words = words;
        self
    }

    pub fn with_listed_words(mut self, words: Vec<DisplayWord>) -> Self {
        self.listed_words = words;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }
}

/// Warning added to mutation results when the durable write failed.
pub(crate) fn unsaved_warning() -> CmdMessage {
    CmdMessage::warning("Changes are kept for this session but could not be saved to disk")
}
