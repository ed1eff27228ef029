//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use vocab_core::model::LessonKey;

/// Errors emitted by `QuestionGenerator`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("no questions could be generated for lesson {lesson}")]
    NoItemsForLesson { lesson: LessonKey },
    /// Entry at `index` of the input slice was skipped; generation continued.
    #[error("entry {index} has no usable word and was skipped")]
    MalformedEntry { index: usize },
    /// Entry at `index` kept its definition question but no cloze question
    /// could be built that hides the word.
    #[error("entry {index} has no usable cloze sentence; cloze question skipped")]
    ClozeUnavailable { index: usize },
}

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("session is still in progress")]
    NotComplete,
    #[error("no missed questions to review")]
    NoMissedItems,
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
