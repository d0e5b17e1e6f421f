use serde::Deserialize;

/// OpenTDB API models
///
/// Fields the quiz doesn't use (`type`, etc.) are ignored by serde.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Question {
    /// Apply `decode` to every text field
    pub fn map_text<F>(self, decode: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            question: decode(&self.question),
            correct_answer: decode(&self.correct_answer),
            incorrect_answers: self.incorrect_answers.iter().map(|a| decode(a.as_str())).collect(),
            category: self.category.as_deref().map(&decode),
            difficulty: self.difficulty,
        }
    }
}
