mod entry;
mod ids;
mod item;
mod lesson;
mod outcome;
mod settings;

pub use entry::{EntryError, VocabEntry};
pub use ids::LessonKey;
pub use item::{QuestionKind, QuizItem};
pub use lesson::Lesson;
pub use outcome::{AnswerOutcome, SessionSummary};
pub use settings::{QuizSettings, SettingsError};
