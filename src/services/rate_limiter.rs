use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// A simple token bucket rate limiter
///
/// OpenTDB answers with response code 5 when a client sends more than one
/// request every 5 seconds, so every question fetch acquires a token first.
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<RateLimiterState>>,
    max_tokens: u32,
    refill_rate: Duration,
}

struct RateLimiterState {
    tokens: u32,
    last_refill: Instant,
}

impl RateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `max_tokens` - Maximum number of tokens (requests) that can be stored
    /// * `refill_rate` - Time between adding new tokens
    ///
    /// # Example
    /// ```
    /// use trivia_quiz::services::RateLimiter;
    /// use std::time::Duration;
    ///
    /// // One request every five seconds
    /// let limiter = RateLimiter::new(1, Duration::from_secs(5));
    /// ```
    pub fn new(max_tokens: u32, refill_rate: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(RateLimiterState {
                // The first quiz starts without waiting
                tokens: 1,
                last_refill: Instant::now(),
            })),
            max_tokens,
            refill_rate,
        }
    }

    /// The limit OpenTDB enforces per client
    pub fn for_open_tdb() -> Self {
        Self::new(1, Duration::from_secs(5))
    }

    /// Wait until a token is available, then consume it
    pub async fn acquire(&self) {
        loop {
            let mut state = self.state.lock().await;

            let now = Instant::now();
            let elapsed = now.duration_since(state.last_refill);
            let tokens_to_add = (elapsed.as_millis() / self.refill_rate.as_millis().max(1)) as u32;

            if tokens_to_add > 0 {
                state.tokens = (state.tokens + tokens_to_add).min(self.max_tokens);
                state.last_refill = now;
            }

            if state.tokens > 0 {
                state.tokens -= 1;
                return;
            }

            // Release the lock while waiting
            drop(state);
            tokio::time::sleep(self.refill_rate / 2).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(1, Duration::from_millis(100));

        let start = Instant::now();
        limiter.acquire().await;
        let first_duration = start.elapsed();

        assert!(
            first_duration < Duration::from_millis(50),
            "First request should be immediate, took {:?}",
            first_duration
        );

        // Second request has to wait for the refill
        let start = Instant::now();
        limiter.acquire().await;
        let second_duration = start.elapsed();

        assert!(
            second_duration >= Duration::from_millis(100),
            "Second request should wait for refill, took {:?}",
            second_duration
        );
        assert!(
            second_duration < Duration::from_millis(200),
            "Second request took too long: {:?}",
            second_duration
        );
    }

    #[tokio::test]
    async fn test_tokens_do_not_accumulate_past_max() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));
        limiter.acquire().await;

        // Several refill periods pass but only one token can be stored
        tokio::time::sleep(Duration::from_millis(200)).await;
        limiter.acquire().await;

        let start = Instant::now();
        limiter.acquire().await;
        assert!(
            start.elapsed() >= Duration::from_millis(40),
            "Bucket should have been empty, took {:?}",
            start.elapsed()
        );
    }

    #[tokio::test]
    async fn test_clones_share_the_bucket() {
        let limiter = RateLimiter::new(1, Duration::from_millis(100));
        let other = limiter.clone();

        limiter.acquire().await;

        let start = Instant::now();
        other.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(90));
    }
}
