use serde::{Deserialize, Serialize};

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of evaluating one submitted answer.
///
/// Both variants carry the expected answer so feedback can always show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct(String),
    Incorrect(String),
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct(_))
    }

    #[must_use]
    pub fn expected_answer(&self) -> &str {
        match self {
            Self::Correct(answer) | Self::Incorrect(answer) => answer,
        }
    }
}

//
// ─── SESSION SUMMARY ───────────────────────────────────────────────────────────
//

/// Final tally of a completed quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
    pub missed_count: usize,
}

impl SessionSummary {
    /// Percentage of correct answers, rounded down. Zero for an empty total.
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.score.saturating_mul(100) / self.total
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_exposes_expected_answer() {
        let ok = AnswerOutcome::Correct("apple".into());
        let bad = AnswerOutcome::Incorrect("apple".into());
        assert!(ok.is_correct());
        assert!(!bad.is_correct());
        assert_eq!(bad.expected_answer(), "apple");
    }

    #[test]
    fn percent_rounds_down() {
        let summary = SessionSummary {
            score: 2,
            total: 3,
            missed_count: 1,
        };
        assert_eq!(summary.percent(), 66);
        assert!(!summary.is_perfect());
    }

    #[test]
    fn perfect_session() {
        let summary = SessionSummary {
            score: 4,
            total: 4,
            missed_count: 0,
        };
        assert_eq!(summary.percent(), 100);
        assert!(summary.is_perfect());
    }
}
