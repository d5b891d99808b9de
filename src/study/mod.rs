// Heuristics that turn extracted text into study material
pub mod keypoints;
pub mod quiz;
pub mod sentences;
pub mod session;
pub mod terms;

pub use keypoints::{format_bullets, KeyPoint, KeyPointExtractor};
pub use quiz::{QuestionKind, QuizGenerator, QuizQuestion};
pub use session::{Feedback, QuizSession, Score};
pub use terms::important_terms;
