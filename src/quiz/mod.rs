/// Cybersecurity quiz
///
/// A fixed catalog of multiple-choice questions, asked in order, scored and
/// summarized into a band.

pub mod catalog;
pub mod engine;
pub mod score;

pub use catalog::{QuizQuestion, QUESTIONS};
pub use engine::{QuizEngine, QuizResult};
pub use score::ScoreBand;
