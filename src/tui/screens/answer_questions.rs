use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, info};

use crate::quiz::{Advance, Phase, QuizSession};
use crate::services::QuestionSource;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::{common, RadioGroup};

/// Shows one question at a time and reveals whether the pick was right
#[derive(Default)]
pub struct AnswerQuestionsState {
    pub session: Option<QuizSession>,
}

impl AnswerQuestionsState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn feedback_line(session: &QuizSession) -> Option<Line<'static>> {
    match session.phase() {
        Phase::Answering { .. } => None,
        Phase::Revealed { correct: true, .. } => Some(
            Line::from("Correct")
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        ),
        Phase::Revealed { correct: false, .. } => Some(
            Line::from(format!(
                "Wrong answer. The correct answer is: {}",
                session.current().question.correct_answer
            ))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        ),
    }
}

#[async_trait]
impl<S: QuestionSource> Screen<S> for AnswerQuestionsState {
    fn render(&self, frame: &mut Frame, context: &AppContext<S>) {
        let chunks = common::render_screen_layout(frame.area());

        let Some(session) = &self.session else {
            common::render_title(frame, chunks[0], "Trivia Quiz");
            common::render_empty_state(frame, chunks[1], "No quiz loaded.");
            common::render_help(frame, chunks[2], &[("Esc", "Back")]);
            return;
        };

        let current = session.current();
        common::render_title(
            frame,
            chunks[0],
            &format!("Question {} of {}", session.index() + 1, session.len()),
        );

        let body = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(current.choices.len() as u16 + 2),
            Constraint::Length(3),
        ])
        .split(chunks[1]);

        let category = current
            .question
            .category
            .clone()
            .unwrap_or_else(|| context.selection.category.to_string());
        let difficulty = current
            .question
            .difficulty
            .clone()
            .unwrap_or_else(|| context.selection.difficulty.as_param().to_string());
        let meta = Paragraph::new(format!("{} · {}", category, difficulty))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(meta, body[0]);

        let prompt = Paragraph::new(current.question.question.as_str())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Question"));
        frame.render_widget(prompt, body[1]);

        let answering = matches!(session.phase(), Phase::Answering { .. });
        let choices = RadioGroup {
            items: current.choices.clone(),
            cursor: session.selected(),
            chosen: session.selected(),
        };
        let correct_answer = current.question.correct_answer.as_str();
        choices.render(frame, body[2], "Answers", answering, |choice| {
            if !answering && choice == correct_answer {
                format!("{}  ✓", choice)
            } else {
                choice.clone()
            }
        });

        if let Some(line) = feedback_line(session) {
            let feedback = Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(feedback, body[3]);
        }

        let help: &[(&str, &str)] = if answering {
            &[("↑/↓", "Select"), ("Enter", "Answer"), ("Esc", "Quit quiz")]
        } else {
            &[("Enter", "Next"), ("Esc", "Quit quiz")]
        };
        common::render_help(frame, chunks[2], help);
    }

    async fn handle_key(&mut self, context: &mut AppContext<S>, key: KeyEvent) -> Result<ScreenTransition> {
        if key.code == KeyCode::Esc {
            if self.session.take().is_some() {
                info!("Quiz abandoned");
            }
            return Ok(ScreenTransition::Reset(ScreenId::SelectQuiz));
        }

        let Some(session) = self.session.as_mut() else {
            return Ok(ScreenTransition::Reset(ScreenId::SelectQuiz));
        };

        match session.phase() {
            Phase::Answering { .. } => {
                match key.code {
                    KeyCode::Up => session.select_previous(),
                    KeyCode::Down => session.select_next(),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Some(correct) = session.submit() {
                            debug!(
                                "Question {} answered {}",
                                session.index() + 1,
                                if correct { "correctly" } else { "incorrectly" }
                            );
                        }
                    }
                    _ => {}
                }
                Ok(ScreenTransition::Stay)
            }
            Phase::Revealed { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
                    match session.advance() {
                        Advance::Finished => {
                            let (correct, total) = session.score();
                            info!("Quiz finished: {}/{} correct", correct, total);
                            context.last_score = Some((correct, total));
                            self.session = None;
                            Ok(ScreenTransition::GoTo(ScreenId::Results))
                        }
                        Advance::NextQuestion | Advance::NotRevealed => Ok(ScreenTransition::Stay),
                    }
                }
                _ => Ok(ScreenTransition::Stay),
            },
        }
    }

    async fn on_enter(&mut self, context: &mut AppContext<S>) -> Result<()> {
        if let Some(session) = context.pending_session.take() {
            self.session = Some(session);
        }
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::AnswerQuestions
    }
}
