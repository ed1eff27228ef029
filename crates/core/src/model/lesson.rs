use serde::{Deserialize, Serialize};

use crate::model::ids::LessonKey;

/// A named group of vocabulary entries quizzed together.
///
/// `cloze_enabled` is decided by the vocabulary store; question generation
/// only reads the flag and never looks at the lesson name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    key: LessonKey,
    cloze_enabled: bool,
}

impl Lesson {
    #[must_use]
    pub fn new(key: impl Into<LessonKey>, cloze_enabled: bool) -> Self {
        Self {
            key: key.into(),
            cloze_enabled,
        }
    }

    /// A lesson that only produces definition questions.
    #[must_use]
    pub fn definition_only(key: impl Into<LessonKey>) -> Self {
        Self::new(key, false)
    }

    #[must_use]
    pub fn key(&self) -> &LessonKey {
        &self.key
    }

    #[must_use]
    pub fn cloze_enabled(&self) -> bool {
        self.cloze_enabled
    }
}
