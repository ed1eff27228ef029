use serde::{Deserialize, Serialize};

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// The two question shapes generated from a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Prompt is the meaning; answer is the word.
    Definition,
    /// Prompt is the example sentence with the word masked out.
    ClozeSentence,
}

//
// ─── QUIZ ITEM ─────────────────────────────────────────────────────────────────
//

/// One generated question.
///
/// Items are plain values: two items with the same fields are interchangeable,
/// and the expected answer is fixed at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    kind: QuestionKind,
    prompt: String,
    expected_answer: String,
    hint: String,
    prompt_label: String,
}

impl QuizItem {
    #[must_use]
    pub fn new(
        kind: QuestionKind,
        prompt: impl Into<String>,
        expected_answer: impl Into<String>,
        hint: impl Into<String>,
        prompt_label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
            hint: hint.into(),
            prompt_label: prompt_label.into(),
        }
    }

    // Accessors
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    /// Part of speech; empty when the source row had none.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn prompt_label(&self) -> &str {
        &self.prompt_label
    }
}
