pub mod config;
pub mod quiz;
pub mod trivia_api;

// Re-export commonly used types at models root for convenience
pub use config::{AppConfig, ResponseEncoding};
pub use quiz::{Category, Difficulty, QuizSelection};
pub use trivia_api::{ApiResponse, Question};
