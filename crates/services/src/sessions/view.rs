use serde::Serialize;

use vocab_core::model::{AnswerOutcome, QuestionKind, QuizItem};

/// Presentation-agnostic data for the question on screen.
///
/// This is intentionally **not** a UI view-model: no markup, no line-break
/// rewriting, no localization. `ordinal` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub ordinal: usize,
    pub total: usize,
    pub kind: QuestionKind,
    pub prompt: String,
    pub hint: String,
    pub prompt_label: String,
}

impl QuestionView {
    #[must_use]
    pub fn new(item: &QuizItem, ordinal: usize, total: usize) -> Self {
        Self {
            ordinal,
            total,
            kind: item.kind(),
            prompt: item.prompt().to_owned(),
            hint: item.hint().to_owned(),
            prompt_label: item.prompt_label().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
}

/// What the adapter shows after an answer is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFeedback {
    pub outcome: FeedbackKind,
    pub expected_answer: String,
}

impl From<&AnswerOutcome> for SubmissionFeedback {
    fn from(outcome: &AnswerOutcome) -> Self {
        let kind = if outcome.is_correct() {
            FeedbackKind::Correct
        } else {
            FeedbackKind::Incorrect
        };
        Self {
            outcome: kind,
            expected_answer: outcome.expected_answer().to_owned(),
        }
    }
}
