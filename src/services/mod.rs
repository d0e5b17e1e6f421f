pub mod decode;
pub mod error;
#[cfg(test)]
pub mod mock_questions;
pub mod opentdb;
pub mod question_source;
pub mod rate_limiter;
pub mod retry;

pub use error::TriviaApiError;
pub use opentdb::OpenTdbService;
pub use question_source::QuestionSource;
pub use rate_limiter::RateLimiter;
pub use retry::RetryConfig;
