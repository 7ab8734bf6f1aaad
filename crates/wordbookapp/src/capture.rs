//! Capture-time validation of word input.
//!
//! The store accepts whatever it is given. The rules for a well-formed record
//! are enforced here, before anything reaches the store:
//! - The English word is trimmed and must not be empty
//! - Meanings are trimmed, blank ones are dropped, and at least one must remain
//! - Notes are trimmed
//! - Verses with neither a reference nor a text are dropped
//!
//! # Examples
//! ```
//! use wordbookapp::capture::{VerseDraft, WordDraft};
//!
//! let draft = WordDraft::new("  GRACE ")
//!     .meaning("অনুগ্রহ")
//!     .meaning("   ")
//!     .verse(VerseDraft::new("Ephesians 2:8", "", "অনুগ্রহ"))
//!     .verse(VerseDraft::new("", "  ", ""));
//!
//! let word = draft.validate().unwrap();
//! assert_eq!(word.english_word, "GRACE");
//! assert_eq!(word.bengali_meanings, vec!["অনুগ্রহ"]);
//! assert_eq!(word.verses.len(), 1);
//!
//! assert!(WordDraft::new("").meaning("অনুগ্রহ").validate().is_err());
//! assert!(WordDraft::new("Grace").validate().is_err());
//! ```

use crate::error::WordbookError;
use crate::model::{NewWord, VerseReference};

/// Raw form input for one word.
#[derive(Debug, Clone, Default)]
pub struct WordDraft {
    pub english_word: String,
    pub bengali_meanings: Vec<String>,
    pub notes: String,
    pub verses: Vec<VerseDraft>,
}

/// Raw form input for one verse.
#[derive(Debug, Clone, Default)]
pub struct VerseDraft {
    pub reference: String,
    pub text: String,
    pub chosen_meaning: String,
}

impl VerseDraft {
    pub fn new(
        reference: impl Into<String>,
        text: impl Into<String>,
        chosen_meaning: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
            chosen_meaning: chosen_meaning.into(),
        }
    }

    /// A verse is kept when it has a reference or a text.
    pub fn is_blank(&self) -> bool {
        self.reference.trim().is_empty() && self.text.trim().is_empty()
    }

    /// Converts the draft into a stored verse with a fresh id.
    pub fn into_verse(self) -> VerseReference {
        VerseReference::new(
            self.reference.trim(),
            self.text.trim(),
            self.chosen_meaning.trim(),
        )
    }
}

impl WordDraft {
    pub fn new(english_word: impl Into<String>) -> Self {
        Self {
            english_word: english_word.into(),
            ..Default::default()
        }
    }

    pub fn meaning(mut self, meaning: impl Into<String>) -> Self {
        self.bengali_meanings.push(meaning.into());
        self
    }

    pub fn meanings<I, S>(mut self, meanings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bengali_meanings
            .extend(meanings.into_iter().map(Into::into));
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn verse(mut self, verse: VerseDraft) -> Self {
        self.verses.push(verse);
        self
    }

    /// Apply the capture rules and produce fields ready for the store.
    pub fn validate(self) -> Result<NewWord, CaptureError> {
        let english_word = validate_english_word(&self.english_word)?;
        let bengali_meanings = validate_meanings(&self.bengali_meanings)?;

        Ok(NewWord {
            english_word,
            bengali_meanings,
            notes: self.notes.trim().to_string(),
            verses: self
                .verses
                .into_iter()
                .filter(|v| !v.is_blank())
                .map(VerseDraft::into_verse)
                .collect(),
        })
    }
}

/// Trims an English word, rejecting blank input.
pub fn validate_english_word(raw: &str) -> Result<String, CaptureError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CaptureError::MissingEnglishWord);
    }
    Ok(trimmed.to_string())
}

/// Trims meanings and drops blank ones, requiring at least one to remain.
pub fn validate_meanings<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, CaptureError> {
    let meanings: Vec<String> = raw
        .iter()
        .map(|m| m.as_ref().trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();
    if meanings.is_empty() {
        return Err(CaptureError::MissingMeaning);
    }
    Ok(meanings)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    MissingEnglishWord,
    MissingMeaning,
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureError::MissingEnglishWord => write!(f, "Please enter an English word"),
            CaptureError::MissingMeaning => {
                write!(f, "Please add at least one Bengali meaning")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<CaptureError> for WordbookError {
    fn from(e: CaptureError) -> Self {
        WordbookError::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_all_text_fields() {
        let word = WordDraft::new("  Grace\t")
            .meaning(" অনুগ্রহ ")
            .notes("  unmerited favour \n")
            .validate()
            .unwrap();

        assert_eq!(word.english_word, "Grace");
        assert_eq!(word.bengali_meanings, vec!["অনুগ্রহ"]);
        assert_eq!(word.notes, "unmerited favour");
    }

    #[test]
    fn rejects_blank_english_word() {
        let err = WordDraft::new("   ")
            .meaning("অনুগ্রহ")
            .validate()
            .unwrap_err();
        assert_eq!(err, CaptureError::MissingEnglishWord);
        assert_eq!(err.to_string(), "Please enter an English word");
    }

    #[test]
    fn rejects_when_all_meanings_blank() {
        let err = WordDraft::new("Grace")
            .meanings(["", "  "])
            .validate()
            .unwrap_err();
        assert_eq!(err, CaptureError::MissingMeaning);
    }

    #[test]
    fn keeps_meaning_order() {
        let word = WordDraft::new("Love")
            .meanings(["প্রেম", "", "ভালোবাসা"])
            .validate()
            .unwrap();
        assert_eq!(word.bengali_meanings, vec!["প্রেম", "ভালোবাসা"]);
    }

    #[test]
    fn drops_blank_verses_and_keeps_text_only_ones() {
        let word = WordDraft::new("Grace")
            .meaning("অনুগ্রহ")
            .verse(VerseDraft::new("", "", "অনুগ্রহ"))
            .verse(VerseDraft::new("", "For by grace are ye saved", ""))
            .verse(VerseDraft::new("Romans 3:24", "", ""))
            .validate()
            .unwrap();

        assert_eq!(word.verses.len(), 2);
        assert_eq!(word.verses[0].reference, "");
        assert_eq!(word.verses[0].text, "For by grace are ye saved");
        assert_eq!(word.verses[1].reference, "Romans 3:24");
        assert_ne!(word.verses[0].id, word.verses[1].id);
    }

    #[test]
    fn capture_error_converts_to_invalid_input() {
        let err: WordbookError = CaptureError::MissingMeaning.into();
        assert!(matches!(err, WordbookError::InvalidInput(ref m) if m.contains("Bengali meaning")));
    }
}
