use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::LessonKey;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("vocabulary entry has an empty word")]
    EmptyWord,
}

//
// ─── VOCAB ENTRY ───────────────────────────────────────────────────────────────
//

/// One row of the source vocabulary.
///
/// Every textual field is trimmed on construction. Optional columns are stored
/// as empty strings when absent, so "missing" and "blank" mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub lesson: LessonKey,
    pub word: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub example: String,
}

impl VocabEntry {
    #[must_use]
    pub fn new(lesson: impl Into<LessonKey>, word: impl AsRef<str>) -> Self {
        Self {
            lesson: lesson.into(),
            word: word.as_ref().trim().to_owned(),
            part_of_speech: String::new(),
            meaning: String::new(),
            example: String::new(),
        }
    }

    #[must_use]
    pub fn with_part_of_speech(mut self, part_of_speech: impl AsRef<str>) -> Self {
        self.part_of_speech = part_of_speech.as_ref().trim().to_owned();
        self
    }

    #[must_use]
    pub fn with_meaning(mut self, meaning: impl AsRef<str>) -> Self {
        self.meaning = meaning.as_ref().trim().to_owned();
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl AsRef<str>) -> Self {
        self.example = example.as_ref().trim().to_owned();
        self
    }

    /// Returns a copy with every textual field trimmed.
    ///
    /// Entries built through `new` are already trimmed; this covers values that
    /// arrive through deserialization or direct field assignment.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            lesson: LessonKey::new(self.lesson.as_str()),
            word: self.word.trim().to_owned(),
            part_of_speech: self.part_of_speech.trim().to_owned(),
            meaning: self.meaning.trim().to_owned(),
            example: self.example.trim().to_owned(),
        }
    }

    /// False when the word is blank; such entries cannot produce questions.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.word.trim().is_empty()
    }

    /// Checks that the entry can be quizzed.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyWord` if the word is blank.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(EntryError::EmptyWord)
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
