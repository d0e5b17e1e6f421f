use anyhow::{anyhow, Result};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::models::Question;
use crate::quiz::QuizSession;
use crate::services::QuestionSource;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::common;

/// Waits for the background question fetch
pub struct LoadingState {
    task: Option<JoinHandle<Result<Vec<Question>>>>,
    started_at: Option<Instant>,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            task: None,
            started_at: None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.task.is_some()
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("Question fetch cancelled");
        }
        self.started_at = None;
    }

    fn fail<S: QuestionSource>(&mut self, context: &mut AppContext<S>, err: anyhow::Error) -> ScreenTransition {
        error!("Failed to load questions: {:#}", err);
        self.started_at = None;
        context.messages.set_error(format!("{:#}", err));
        ScreenTransition::Reset(ScreenId::SelectQuiz)
    }
}

#[async_trait]
impl<S: QuestionSource> Screen<S> for LoadingState {
    fn render(&self, frame: &mut Frame, context: &AppContext<S>) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Trivia Quiz");

        let elapsed = self
            .started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or_default();

        let body = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

        let widget = Paragraph::new(vec![
            Line::from("Loading"),
            Line::from(format!(
                "{} · {}",
                context.selection.difficulty, context.selection.category
            )),
            Line::from(format!("{}s", elapsed)),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, body[1]);

        common::render_help(frame, chunks[2], &[("Esc", "Cancel")]);
    }

    async fn handle_key(&mut self, context: &mut AppContext<S>, key: KeyEvent) -> Result<ScreenTransition> {
        match key.code {
            KeyCode::Esc => {
                if self.is_fetching() {
                    context.messages.set_info("Quiz loading cancelled".to_string());
                }
                self.cancel();
                Ok(ScreenTransition::Back)
            }
            _ => Ok(ScreenTransition::Stay),
        }
    }

    async fn on_enter(&mut self, context: &mut AppContext<S>) -> Result<()> {
        self.cancel();

        let source = Arc::clone(&context.source);
        let selection = context.selection;
        self.task = Some(tokio::spawn(async move {
            source.fetch_questions(&selection).await
        }));
        self.started_at = Some(Instant::now());
        Ok(())
    }

    async fn on_tick(&mut self, context: &mut AppContext<S>) -> Result<ScreenTransition> {
        let finished = self.task.as_ref().is_some_and(|task| task.is_finished());
        if !finished {
            return Ok(ScreenTransition::Stay);
        }
        let Some(task) = self.task.take() else {
            return Ok(ScreenTransition::Stay);
        };

        let questions = match task.await {
            Ok(Ok(questions)) => questions,
            Ok(Err(e)) => return Ok(self.fail(context, e)),
            Err(join_err) => return Ok(self.fail(context, anyhow!("question fetch task failed: {}", join_err))),
        };

        match QuizSession::new(questions) {
            Ok(session) => {
                info!("Quiz ready with {} question(s)", session.len());
                self.started_at = None;
                context.pending_session = Some(session);
                Ok(ScreenTransition::GoTo(ScreenId::AnswerQuestions))
            }
            Err(e) => Ok(self.fail(context, e)),
        }
    }

    fn id(&self) -> ScreenId {
        ScreenId::Loading
    }
}
