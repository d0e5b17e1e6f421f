use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use super::error::TriviaApiError;

/// Configuration for question fetch retry logic
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (default: 3)
    pub max_retries: u32,
    /// Initial delay between retries in milliseconds (default: 500ms)
    pub initial_delay_ms: u64,
    /// Maximum delay between retries in milliseconds (default: 5000ms)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 500,
            max_delay_ms: 5000,
        }
    }
}

impl RetryConfig {
    /// Load retry configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the retry settings from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_retries = lookup("TRIVIA_FETCH_MAX_RETRIES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_retries);

        let initial_delay_ms = lookup("TRIVIA_FETCH_INITIAL_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.initial_delay_ms);

        let max_delay_ms = lookup("TRIVIA_FETCH_MAX_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_delay_ms);

        Self {
            max_retries,
            initial_delay_ms,
            max_delay_ms,
        }
    }

    /// Delay to use after the given delay, doubling up to the cap
    pub fn next_delay(&self, delay_ms: u64) -> u64 {
        delay_ms.saturating_mul(2).min(self.max_delay_ms)
    }
}

/// Run `operation` until it succeeds, fails permanently, or runs out of attempts
///
/// Only errors for which [`TriviaApiError::is_transient`] is true are retried,
/// with exponential backoff between attempts.
pub async fn fetch_with_retry<T, F, Fut>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, TriviaApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TriviaApiError>>,
{
    let max_attempts = config.max_retries.max(1);
    let mut attempt = 0;
    let mut delay_ms = config.initial_delay_ms.min(config.max_delay_ms);

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("Question fetch succeeded after {} attempt(s)", attempt);
                }
                return Ok(value);
            }
            Err(e) => {
                if !e.is_transient() || attempt >= max_attempts {
                    return Err(e);
                }

                warn!(
                    "Question fetch attempt {}/{} failed: {} - retrying in {}ms",
                    attempt, max_attempts, e, delay_ms
                );

                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                delay_ms = config.next_delay(delay_ms);
            }
        }
    }
}
