pub mod answer_questions;
pub mod loading;
pub mod results;
pub mod select_quiz;

pub use answer_questions::AnswerQuestionsState;
pub use loading::LoadingState;
pub use results::ResultsState;
pub use select_quiz::SelectQuizState;
