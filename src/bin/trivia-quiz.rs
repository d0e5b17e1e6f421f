use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tracing::{error, info};

use trivia_quiz::models::AppConfig;
use trivia_quiz::services::{OpenTdbService, RetryConfig};
use trivia_quiz::tui::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // The terminal belongs to the UI, so tracing output goes to a file
    let log_path = AppConfig::log_file_from_env();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cfg = AppConfig::from_env().inspect_err(|e| error!("Invalid configuration: {:#}", e))?;

    info!(
        "Using {} ({} questions per quiz, {:?} encoding)",
        cfg.api_url, cfg.question_count, cfg.encoding
    );

    let source = Arc::new(OpenTdbService::new(&cfg, RetryConfig::from_env())?);

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    let mut app = App::new(source);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
