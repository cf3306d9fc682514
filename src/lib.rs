pub mod data;
pub mod error;
pub mod model;
pub mod report;
pub mod session;

pub use error::QuizError;
pub use model::{Difficulty, Question, QuizPool, SessionPhase, Verdict};
pub use report::{
    CompletionReporter, HttpProgressSink, ProgressSink, ProgressUpdate, SessionContext,
};
pub use session::{QuestionView, QuizSession, SummaryRow};
