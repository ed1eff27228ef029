use rand::seq::SliceRandom;
use rand::{Rng, rng};
use std::fmt;
use tracing::{debug, trace};

use vocab_core::is_correct;
use vocab_core::model::{AnswerOutcome, QuizItem, SessionSummary};

use super::progress::SessionProgress;
use super::view::QuestionView;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One linear run through a shuffled queue of questions.
///
/// The queue is fixed at creation. Each submission scores the current
/// question and moves forward by one; there is no skip or go-back. The session
/// is complete once every question has been answered.
///
/// At every point `score + missed.len() == position`.
#[derive(Clone)]
pub struct QuizSession {
    queue: Vec<QuizItem>,
    position: usize,
    score: usize,
    missed: Vec<QuizItem>,
    last_outcome: Option<AnswerOutcome>,
}

impl QuizSession {
    /// Start a session over `items`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `items` is empty.
    pub fn start(items: Vec<QuizItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::Empty);
        }

        debug!(total = items.len(), "quiz session started");
        Ok(Self {
            queue: items,
            position: 0,
            score: 0,
            missed: Vec::new(),
            last_outcome: None,
        })
    }

    // Accessors
    #[must_use]
    pub fn queue(&self) -> &[QuizItem] {
        &self.queue
    }

    /// Number of questions already answered.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions answered incorrectly, in the order they were missed.
    #[must_use]
    pub fn missed(&self) -> &[QuizItem] {
        &self.missed
    }

    /// Outcome of the most recent submission, kept after completion.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position == self.queue.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total(),
            answered: self.position,
            remaining: self.queue.len() - self.position,
            is_complete: self.is_complete(),
        }
    }

    /// The question awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once every question has been answered.
    pub fn current_item(&self) -> Result<&QuizItem, SessionError> {
        self.queue.get(self.position).ok_or(SessionError::Completed)
    }

    /// Presentation data for the question awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once every question has been answered.
    pub fn current_question(&self) -> Result<QuestionView, SessionError> {
        let item = self.current_item()?;
        Ok(QuestionView::new(item, self.position + 1, self.total()))
    }

    /// Score `raw_answer` against the current question and advance.
    ///
    /// The position moves forward whether or not the answer is correct. A
    /// wrong answer appends the question to the missed list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn submit(&mut self, raw_answer: &str) -> Result<AnswerOutcome, SessionError> {
        let item = self.current_item()?.clone();
        let expected = item.expected_answer().to_owned();

        let outcome = if is_correct(raw_answer, &expected) {
            self.score += 1;
            AnswerOutcome::Correct(expected)
        } else {
            self.missed.push(item);
            AnswerOutcome::Incorrect(expected)
        };
        self.position += 1;
        self.last_outcome = Some(outcome.clone());

        trace!(
            position = self.position,
            score = self.score,
            correct = outcome.is_correct(),
            "answer submitted"
        );
        Ok(outcome)
    }

    /// Final tally.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(SessionSummary {
            score: self.score,
            total: self.total(),
            missed_count: self.missed.len(),
        })
    }

    /// Start a new session over the missed questions, shuffled with the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain, or
    /// `SessionError::NoMissedItems` if every answer was correct.
    pub fn retry_missed(&self) -> Result<Self, SessionError> {
        self.retry_missed_with_rng(&mut rng())
    }

    /// Start a new session over the missed questions, shuffled with `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain, or
    /// `SessionError::NoMissedItems` if every answer was correct.
    pub fn retry_missed_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        if self.missed.is_empty() {
            return Err(SessionError::NoMissedItems);
        }

        let mut items = self.missed.clone();
        items.shuffle(rng);
        debug!(total = items.len(), "retrying missed questions");
        Self::start(items)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("queue_len", &self.queue.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("missed_len", &self.missed.len())
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
