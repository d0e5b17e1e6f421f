use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::QuestionSource;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::common;

pub struct ResultsState {
    pub score: Option<(usize, usize)>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsState {
    pub fn new() -> Self {
        Self { score: None }
    }
}

/// Text for a finished quiz, e.g. "You answered 7 of 10 correctly"
pub fn score_summary(correct: usize, total: usize) -> String {
    format!("You answered {} of {} correctly", correct, total)
}

fn score_color(correct: usize, total: usize) -> Color {
    if total == 0 {
        return Color::White;
    }
    match correct * 100 / total {
        80.. => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

#[async_trait]
impl<S: QuestionSource> Screen<S> for ResultsState {
    fn render(&self, frame: &mut Frame, context: &AppContext<S>) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Results");

        let body = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

        let (correct, total) = self.score.unwrap_or((0, 0));
        let widget = Paragraph::new(vec![
            Line::from(score_summary(correct, total)).style(
                Style::default()
                    .fg(score_color(correct, total))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!(
                "{} · {}",
                context.selection.difficulty, context.selection.category
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, body[1]);

        common::render_help(frame, chunks[2], &[("Enter", "New quiz"), ("q", "Quit")]);
    }

    async fn handle_key(&mut self, _context: &mut AppContext<S>, key: KeyEvent) -> Result<ScreenTransition> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r') => {
                Ok(ScreenTransition::Reset(ScreenId::SelectQuiz))
            }
            KeyCode::Char('q') => Ok(ScreenTransition::Quit),
            _ => Ok(ScreenTransition::Stay),
        }
    }

    async fn on_enter(&mut self, context: &mut AppContext<S>) -> Result<()> {
        self.score = context.last_score.take();
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Results
    }
}
