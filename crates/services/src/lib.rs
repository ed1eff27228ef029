#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod sessions;

pub use sessions as session;

pub use error::{GenerateError, QuizError, SessionError};
pub use generator::{GeneratedQuiz, QuestionGenerator};

pub use sessions::{
    FeedbackKind, LessonStart, QuestionView, QuizLoopService, QuizSession, SessionProgress,
    SubmissionFeedback, SubmissionResult,
};
