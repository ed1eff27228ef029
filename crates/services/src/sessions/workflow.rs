use std::sync::Arc;

use rand::{Rng, rng};
use tracing::{debug, warn};

use storage::{StorageError, VocabularyRepository};
use vocab_core::model::{Lesson, LessonKey, QuizSettings, SessionSummary};

use super::service::QuizSession;
use super::view::SubmissionFeedback;
use crate::error::{GenerateError, QuizError};
use crate::generator::QuestionGenerator;

/// A freshly started lesson quiz.
#[derive(Debug, Clone)]
pub struct LessonStart {
    pub session: QuizSession,
    /// Entries of the lesson that could not be turned into questions.
    pub skipped: Vec<GenerateError>,
}

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub feedback: SubmissionFeedback,
    pub is_complete: bool,
    /// Present once the final question has been answered.
    pub summary: Option<SessionSummary>,
}

/// Orchestrates lesson selection, session start, answering and retries.
///
/// Holds no session state: the caller owns each `QuizSession` and passes it
/// back in. Restarting means dropping the session and starting a lesson again.
#[derive(Clone)]
pub struct QuizLoopService {
    vocabulary: Arc<dyn VocabularyRepository>,
    generator: QuestionGenerator,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(vocabulary: Arc<dyn VocabularyRepository>, settings: QuizSettings) -> Self {
        Self {
            vocabulary,
            generator: QuestionGenerator::new(settings),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        self.generator.settings()
    }

    /// Lessons available for selection, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the vocabulary cannot be read.
    pub fn lessons(&self) -> Result<Vec<Lesson>, QuizError> {
        Ok(self.vocabulary.lessons()?)
    }

    /// Start a quiz over one lesson.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::NoItemsForLesson` (wrapped) if the lesson is
    /// unknown or yields no questions.
    pub fn start_lesson(&self, key: &LessonKey) -> Result<LessonStart, QuizError> {
        self.start_lesson_with_rng(key, &mut rng())
    }

    /// Start a quiz over one lesson, shuffling with `rng`.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::NoItemsForLesson` (wrapped) if the lesson is
    /// unknown or yields no questions.
    pub fn start_lesson_with_rng<R: Rng + ?Sized>(
        &self,
        key: &LessonKey,
        rng: &mut R,
    ) -> Result<LessonStart, QuizError> {
        let lesson = match self.vocabulary.lesson(key) {
            Ok(lesson) => lesson,
            Err(StorageError::LessonNotFound(lesson)) => {
                return Err(GenerateError::NoItemsForLesson { lesson }.into());
            }
            Err(err) => return Err(err.into()),
        };
        let entries = self.vocabulary.entries()?;

        let generated = self.generator.generate_with_rng(&entries, &lesson, rng)?;
        if !generated.skipped.is_empty() {
            warn!(
                lesson = %key,
                skipped = generated.skipped.len(),
                "lesson contains entries that were skipped"
            );
        }

        let session = QuizSession::start(generated.items)?;
        debug!(lesson = %key, total = session.total(), "lesson quiz started");
        Ok(LessonStart {
            session,
            skipped: generated.skipped,
        })
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` (wrapped) if the session is finished.
    pub fn submit(
        &self,
        session: &mut QuizSession,
        answer: &str,
    ) -> Result<SubmissionResult, QuizError> {
        let outcome = session.submit(answer)?;
        let summary = if session.is_complete() {
            Some(session.summary()?)
        } else {
            None
        };

        Ok(SubmissionResult {
            feedback: SubmissionFeedback::from(&outcome),
            is_complete: session.is_complete(),
            summary,
        })
    }

    /// Start a review session over the questions missed in `session`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoMissedItems` (wrapped) when there is nothing to
    /// review, or `SessionError::NotComplete` if `session` is unfinished.
    pub fn retry_missed(&self, session: &QuizSession) -> Result<QuizSession, QuizError> {
        Ok(session.retry_missed()?)
    }
}
