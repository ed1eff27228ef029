use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tracing::{debug, warn};
use vocab_core::model::{EntryError, Lesson, LessonKey, QuizSettings, VocabEntry};

/// Errors surfaced by vocabulary stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("lesson not found: {0}")]
    LessonNotFound(LessonKey),

    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] EntryError),

    #[error("store lock poisoned: {0}")]
    Lock(String),
}

/// Read contract for a cleaned vocabulary list.
///
/// Implementations hand out entries that are already trimmed and have a
/// non-empty word, together with the per-lesson cloze flag.
pub trait VocabularyRepository: Send + Sync {
    /// Distinct lessons, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn lessons(&self) -> Result<Vec<Lesson>, StorageError>;

    /// Look up a single lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::LessonNotFound` if no entry uses `key`.
    fn lesson(&self, key: &LessonKey) -> Result<Lesson, StorageError>;

    /// Every entry in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn entries(&self) -> Result<Vec<VocabEntry>, StorageError>;
}

#[derive(Debug, Default)]
struct VocabularyState {
    entries: Vec<VocabEntry>,
    // lesson key -> cloze enabled
    lessons: BTreeMap<LessonKey, bool>,
    rejected_rows: usize,
}

/// In-memory vocabulary store shared behind an `Arc`.
#[derive(Clone)]
pub struct InMemoryVocabulary {
    state: Arc<Mutex<VocabularyState>>,
    definition_only_prefix: Option<String>,
}

impl InMemoryVocabulary {
    /// Build a store from raw rows.
    ///
    /// Rows are trimmed; rows with a blank word are dropped and counted in
    /// [`rejected_rows`](Self::rejected_rows). A lesson is definition-only when
    /// its key starts with the configured prefix, ignoring case.
    #[must_use]
    pub fn from_entries(
        entries: impl IntoIterator<Item = VocabEntry>,
        settings: &QuizSettings,
    ) -> Self {
        let mut state = VocabularyState::default();
        let prefix = settings.definition_only_prefix().map(str::to_owned);

        for (row, entry) in entries.into_iter().enumerate() {
            let entry = entry.trimmed();
            if !entry.is_well_formed() {
                warn!(row, lesson = %entry.lesson, "dropping vocabulary row with empty word");
                state.rejected_rows += 1;
                continue;
            }
            let cloze_enabled = cloze_enabled_for(&entry.lesson, prefix.as_deref());
            state.lessons.entry(entry.lesson.clone()).or_insert(cloze_enabled);
            state.entries.push(entry);
        }

        debug!(
            entries = state.entries.len(),
            lessons = state.lessons.len(),
            rejected = state.rejected_rows,
            "vocabulary loaded"
        );

        Self {
            state: Arc::new(Mutex::new(state)),
            definition_only_prefix: prefix,
        }
    }

    /// Append one more entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidEntry` if the word is blank.
    pub fn insert_entry(&self, entry: VocabEntry) -> Result<(), StorageError> {
        let entry = entry.trimmed();
        entry.validate()?;

        let cloze_enabled = cloze_enabled_for(&entry.lesson, self.definition_only_prefix.as_deref());
        let mut state = self.lock()?;
        state.lessons.entry(entry.lesson.clone()).or_insert(cloze_enabled);
        state.entries.push(entry);
        Ok(())
    }

    /// Number of rows dropped at load time because their word was blank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Lock` if the store lock is poisoned.
    pub fn rejected_rows(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.rejected_rows)
    }

    fn lock(&self) -> Result<MutexGuard<'_, VocabularyState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

fn cloze_enabled_for(key: &LessonKey, definition_only_prefix: Option<&str>) -> bool {
    definition_only_prefix.is_none_or(|prefix| !key.starts_with_ignore_case(prefix))
}

impl VocabularyRepository for InMemoryVocabulary {
    fn lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let state = self.lock()?;
        Ok(state
            .lessons
            .iter()
            .map(|(key, cloze_enabled)| Lesson::new(key.clone(), *cloze_enabled))
            .collect())
    }

    fn lesson(&self, key: &LessonKey) -> Result<Lesson, StorageError> {
        let state = self.lock()?;
        state
            .lessons
            .get(key)
            .map(|cloze_enabled| Lesson::new(key.clone(), *cloze_enabled))
            .ok_or_else(|| StorageError::LessonNotFound(key.clone()))
    }

    fn entries(&self) -> Result<Vec<VocabEntry>, StorageError> {
        Ok(self.lock()?.entries.clone())
    }
}
