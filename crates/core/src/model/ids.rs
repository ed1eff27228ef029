use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping key for a lesson, stored trimmed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonKey(String);

impl LessonKey {
    /// Creates a new `LessonKey`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_owned())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key starts with `prefix`, ignoring case.
    #[must_use]
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.0.to_lowercase().starts_with(&prefix.trim().to_lowercase())
    }
}

impl From<&str> for LessonKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LessonKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonKey({:?})", self.0)
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
