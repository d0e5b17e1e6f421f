use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::models::{Question, QuizSelection};
use crate::services::question_source::QuestionSource;

/// Mock implementation of QuestionSource for testing
///
/// Returns a fixed batch of questions (or a fixed error) and records every
/// selection it was asked for.
#[derive(Debug, Clone, Default)]
pub struct MockQuestionSource {
    questions: Vec<Question>,
    failure: Option<String>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<QuizSelection>>>,
}

impl MockQuestionSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// A source pre-populated with three simple questions
    pub fn with_test_data() -> Self {
        Self::new(vec![
            question("What is 2 + 2?", "4", &["3", "5", "22"]),
            question("Capital of France?", "Paris", &["Lyon", "Nice", "Lille"]),
            question("Largest planet?", "Jupiter", &["Mars", "Venus", "Saturn"]),
        ])
    }

    /// A source whose every fetch fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Delay each fetch, to observe the loading state
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Selections requested so far
    pub fn requests(&self) -> Vec<QuizSelection> {
        self.requests.lock().unwrap().clone()
    }
}

/// Build a question from string slices
pub fn question(prompt: &str, correct: &str, incorrect: &[&str]) -> Question {
    Question {
        question: prompt.to_string(),
        correct_answer: correct.to_string(),
        incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        category: None,
        difficulty: None,
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_questions(&self, selection: &QuizSelection) -> Result<Vec<Question>> {
        self.requests.lock().unwrap().push(*selection);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(self.questions.clone()),
        }
    }
}
