use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Question, QuizSelection};

/// QuestionSource supplies the questions for a quiz.
///
/// The TUI only talks to this trait, so tests can run whole quiz flows
/// against an in-memory source instead of the trivia API.
#[async_trait]
pub trait QuestionSource: Send + Sync + 'static {
    /// Fetch one batch of multiple-choice questions for the selection
    ///
    /// Questions are returned in the order the source delivered them, with
    /// all text fields already decoded.
    async fn fetch_questions(&self, selection: &QuizSelection) -> Result<Vec<Question>>;
}
