mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use view::{FeedbackKind, QuestionView, SubmissionFeedback};
pub use workflow::{LessonStart, QuizLoopService, SubmissionResult};
