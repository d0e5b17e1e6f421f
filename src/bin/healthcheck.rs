use anyhow::Result;
use dotenvy::dotenv;
use std::process;

use trivia_quiz::models::{AppConfig, QuizSelection};
use trivia_quiz::services::{OpenTdbService, QuestionSource, RetryConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Healthcheck failed: {:#}", e);
            process::exit(1);
        }
    };

    match check_api(&cfg).await {
        Ok(count) => {
            println!("Trivia API healthy: received {} question(s) from {}", count, cfg.api_url);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Healthcheck failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Fetch a single question for the default selection
async fn check_api(cfg: &AppConfig) -> Result<usize> {
    // Single attempt
    let retry = RetryConfig {
        max_retries: 1,
        ..RetryConfig::default()
    };
    let service = OpenTdbService::new(cfg, retry)?.with_question_count(1);

    let questions = service.fetch_questions(&QuizSelection::default()).await?;
    Ok(questions.len())
}
