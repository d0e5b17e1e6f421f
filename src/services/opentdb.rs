use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{error, info};

use super::decode::decode_text;
use super::error::TriviaApiError;
use super::question_source::QuestionSource;
use super::rate_limiter::RateLimiter;
use super::retry::{fetch_with_retry, RetryConfig};
use crate::models::{ApiResponse, AppConfig, Question, QuizSelection, ResponseEncoding};

/// Question source backed by the Open Trivia Database
pub struct OpenTdbService {
    client: Client,
    api_url: String,
    question_count: u32,
    encoding: ResponseEncoding,
    limiter: RateLimiter,
    retry: RetryConfig,
}

impl OpenTdbService {
    pub fn new(cfg: &AppConfig, retry: RetryConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: cfg.api_url.clone(),
            question_count: cfg.question_count,
            encoding: cfg.encoding,
            limiter: RateLimiter::for_open_tdb(),
            retry,
        })
    }

    /// Override how many questions are requested per quiz
    pub fn with_question_count(mut self, count: u32) -> Self {
        self.question_count = count.max(1);
        self
    }

    /// Build the request URL for a selection
    ///
    /// Only multiple-choice questions are requested.
    pub fn build_url(&self, selection: &QuizSelection) -> Result<Url> {
        let mut params: Vec<(&str, String)> = vec![("amount", self.question_count.to_string())];
        if let Some(encode) = self.encoding.as_param() {
            params.push(("encode", encode.to_string()));
        }
        params.push(("type", "multiple".to_string()));
        params.push(("difficulty", selection.difficulty.as_param().to_string()));
        params.push(("category", selection.category.id.to_string()));

        Url::parse_with_params(&self.api_url, &params)
            .with_context(|| format!("invalid trivia API URL: {}", self.api_url))
    }

    async fn fetch_once(&self, url: &Url) -> Result<Vec<Question>, TriviaApiError> {
        self.limiter.acquire().await;

        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TriviaApiError::Status(status));
        }

        let body = resp.text().await?;
        parse_response(&body, self.encoding)
    }
}

/// Decode an API response body into questions with plain-text fields
pub fn parse_response(body: &str, encoding: ResponseEncoding) -> Result<Vec<Question>, TriviaApiError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    if let Some(err) = TriviaApiError::from_response_code(response.response_code) {
        return Err(err);
    }
    if response.results.is_empty() {
        return Err(TriviaApiError::NoResults);
    }

    Ok(response
        .results
        .into_iter()
        .map(|q| q.map_text(|s| decode_text(encoding, s)))
        .collect())
}

#[async_trait]
impl QuestionSource for OpenTdbService {
    async fn fetch_questions(&self, selection: &QuizSelection) -> Result<Vec<Question>> {
        let url = self.build_url(selection)?;
        info!(
            "Fetching {} {} question(s) in {}",
            self.question_count, selection.difficulty, selection.category
        );

        let url = &url;
        match fetch_with_retry(&self.retry, move || self.fetch_once(url)).await {
            Ok(questions) => {
                info!("Loaded {} question(s)", questions.len());
                Ok(questions)
            }
            Err(e) => {
                error!("Question fetch for {} failed: {}", selection.category, e);
                Err(e).with_context(|| {
                    format!(
                        "could not load {} questions for {}",
                        selection.difficulty.as_param(),
                        selection.category
                    )
                })
            }
        }
    }
}
