use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::models::QuizSelection;
use crate::quiz::QuizSession;
use crate::services::QuestionSource;
use super::screen_trait::{Screen, ScreenId, ScreenTransition};
use super::screens;
use super::state::MessageDisplay;
use super::state_machine::ScreenStateMachine;

/// Context that screens need access to (everything except screen states)
pub struct AppContext<S: QuestionSource> {
    pub source: Arc<S>,
    pub should_quit: bool,
    pub messages: MessageDisplay,
    pub state_machine: ScreenStateMachine,
    /// Difficulty and category of the quiz being loaded or played
    pub selection: QuizSelection,
    /// Session built by the loading screen, picked up by the question screen
    pub pending_session: Option<QuizSession>,
    /// Score of the quiz that just finished, picked up by the results screen
    pub last_score: Option<(usize, usize)>,
}

/// Container for all screen states
pub struct ScreenStates {
    pub select_quiz_state: screens::SelectQuizState,
    pub loading_state: screens::LoadingState,
    pub answer_questions_state: screens::AnswerQuestionsState,
    pub results_state: screens::ResultsState,
}

pub struct App<S: QuestionSource> {
    pub context: AppContext<S>,
    pub states: ScreenStates,
}

impl<S: QuestionSource> App<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            context: AppContext {
                source,
                should_quit: false,
                messages: MessageDisplay::new(),
                state_machine: ScreenStateMachine::new(),
                selection: QuizSelection::default(),
                pending_session: None,
                last_score: None,
            },
            states: ScreenStates {
                select_quiz_state: screens::SelectQuizState::new(),
                loading_state: screens::LoadingState::new(),
                answer_questions_state: screens::AnswerQuestionsState::new(),
                results_state: screens::ResultsState::new(),
            },
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.context.state_machine.current()
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.enter_current_screen().await?;

        while !self.context.should_quit {
            terminal.draw(|frame| {
                let context = &self.context;
                match context.state_machine.current() {
                    ScreenId::SelectQuiz => self.states.select_quiz_state.render(frame, context),
                    ScreenId::Loading => self.states.loading_state.render(frame, context),
                    ScreenId::AnswerQuestions => {
                        self.states.answer_questions_state.render(frame, context)
                    }
                    ScreenId::Results => self.states.results_state.render(frame, context),
                }
                context.messages.render(frame, frame.area());
            })?;

            // Handle input with timeout so background work is still polled
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await?;
                    }
                }
            }

            self.tick().await?;
        }

        Ok(())
    }

    async fn enter_current_screen(&mut self) -> Result<()> {
        let context = &mut self.context;
        let states = &mut self.states;

        match context.state_machine.current() {
            ScreenId::SelectQuiz => states.select_quiz_state.on_enter(context).await,
            ScreenId::Loading => states.loading_state.on_enter(context).await,
            ScreenId::AnswerQuestions => states.answer_questions_state.on_enter(context).await,
            ScreenId::Results => states.results_state.on_enter(context).await,
        }
    }

    async fn handle_key_for_current_screen(&mut self, key: KeyEvent) -> Result<ScreenTransition> {
        // Split borrows: context and states are separate, so we can borrow both
        let context = &mut self.context;
        let states = &mut self.states;

        match context.state_machine.current() {
            ScreenId::SelectQuiz => states.select_quiz_state.handle_key(context, key).await,
            ScreenId::Loading => states.loading_state.handle_key(context, key).await,
            ScreenId::AnswerQuestions => {
                states.answer_questions_state.handle_key(context, key).await
            }
            ScreenId::Results => states.results_state.handle_key(context, key).await,
        }
    }

    async fn apply_transition(&mut self, transition: ScreenTransition) -> Result<()> {
        let before = self.context.state_machine.current();

        match transition {
            ScreenTransition::Stay => return Ok(()),
            ScreenTransition::GoTo(screen_id) => self.context.state_machine.go_to(screen_id),
            ScreenTransition::Back => {
                self.context.state_machine.go_back();
            }
            ScreenTransition::Reset(screen_id) => self.context.state_machine.reset_to(screen_id),
            ScreenTransition::Quit => {
                self.context.should_quit = true;
                return Ok(());
            }
        }

        let after = self.context.state_machine.current();
        if after != before {
            debug!("Screen transition {:?} -> {:?}", before, after);
            self.enter_current_screen().await?;
        }
        Ok(())
    }

    /// Feed one key press to the app
    ///
    /// A pending popup message swallows the key and is dismissed.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.context.should_quit = true;
            return Ok(());
        }

        if self.context.messages.has_message() {
            self.context.messages.clear();
            return Ok(());
        }

        let transition = self.handle_key_for_current_screen(key).await?;
        self.apply_transition(transition).await
    }

    /// Poll the active screen for background progress
    pub async fn tick(&mut self) -> Result<()> {
        let context = &mut self.context;
        let states = &mut self.states;

        let transition = match context.state_machine.current() {
            ScreenId::SelectQuiz => states.select_quiz_state.on_tick(context).await?,
            ScreenId::Loading => states.loading_state.on_tick(context).await?,
            ScreenId::AnswerQuestions => states.answer_questions_state.on_tick(context).await?,
            ScreenId::Results => states.results_state.on_tick(context).await?,
        };

        self.apply_transition(transition).await
    }
}
