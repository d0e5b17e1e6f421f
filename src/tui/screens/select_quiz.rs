use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::info;

use crate::models::{Category, Difficulty, QuizSelection};
use crate::services::QuestionSource;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::{common, RadioGroup};

/// Which control on the setup screen receives arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Difficulty,
    Category,
    Start,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Difficulty => Self::Category,
            Self::Category => Self::Start,
            Self::Start => Self::Difficulty,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Difficulty => Self::Start,
            Self::Category => Self::Difficulty,
            Self::Start => Self::Category,
        }
    }
}

pub struct SelectQuizState {
    pub difficulty: RadioGroup<Difficulty>,
    pub category: RadioGroup<Category>,
    pub focus: Focus,
}

impl Default for SelectQuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectQuizState {
    pub fn new() -> Self {
        Self {
            difficulty: RadioGroup::with_chosen(Difficulty::ALL.to_vec(), &Difficulty::default()),
            category: RadioGroup::with_chosen(Category::all().to_vec(), &Category::default()),
            focus: Focus::Difficulty,
        }
    }

    /// The currently chosen difficulty and category
    pub fn selection(&self) -> QuizSelection {
        QuizSelection::new(
            self.difficulty.chosen_item().copied().unwrap_or_default(),
            self.category.chosen_item().copied().unwrap_or_default(),
        )
    }

    fn start<S: QuestionSource>(&self, context: &mut AppContext<S>) -> ScreenTransition {
        let selection = self.selection();
        info!(
            "Starting {} quiz in {} (category {})",
            selection.difficulty, selection.category, selection.category.id
        );
        context.selection = selection;
        ScreenTransition::GoTo(ScreenId::Loading)
    }
}

#[async_trait]
impl<S: QuestionSource> Screen<S> for SelectQuizState {
    fn render(&self, frame: &mut Frame, _context: &AppContext<S>) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Trivia Quiz");

        let columns = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        let left = Layout::vertical([
            Constraint::Length(Difficulty::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(columns[0]);

        self.difficulty.render(
            frame,
            left[0],
            "Difficulty",
            self.focus == Focus::Difficulty,
            |d| d.label().to_string(),
        );
        common::render_button(frame, left[1], "Start", self.focus == Focus::Start);

        let selection = self.selection();
        let summary = Paragraph::new(vec![
            Line::from(format!("Difficulty: {}", selection.difficulty)),
            Line::from(format!("Category:   {}", selection.category)),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Your quiz"));
        frame.render_widget(summary, left[2]);

        self.category.render(
            frame,
            columns[1],
            "Category",
            self.focus == Focus::Category,
            |c| c.label.to_string(),
        );

        common::render_help(
            frame,
            chunks[2],
            &[
                ("Tab", "Next field"),
                ("↑/↓", "Choose"),
                ("s", "Start"),
                ("q", "Quit"),
            ],
        );
    }

    async fn handle_key(&mut self, context: &mut AppContext<S>, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                ScreenTransition::Stay
            }
            KeyCode::Char('s') => self.start(context),
            _ => match self.focus {
                // Options are picked as the cursor moves over them
                Focus::Difficulty => {
                    if self.difficulty.handle_key(key) {
                        self.difficulty.choose_current();
                    }
                    ScreenTransition::Stay
                }
                Focus::Category => {
                    if self.category.handle_key(key) {
                        self.category.choose_current();
                    }
                    ScreenTransition::Stay
                }
                Focus::Start if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) => {
                    self.start(context)
                }
                Focus::Start => ScreenTransition::Stay,
            },
        };
        Ok(transition)
    }

    fn id(&self) -> ScreenId {
        ScreenId::SelectQuiz
    }
}
