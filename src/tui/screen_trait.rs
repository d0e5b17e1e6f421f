use async_trait::async_trait;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::services::QuestionSource;
use crate::tui::app::AppContext;

/// Screen trait defines the interface for all TUI screens
///
/// Methods take `&mut self` for the screen's own state and `context` for
/// app-level resources, so both can be borrowed at the same time.
#[async_trait]
pub trait Screen<S: QuestionSource>: Send {
    /// Render this screen to the terminal frame
    fn render(&self, frame: &mut Frame, context: &AppContext<S>);

    /// Handle keyboard input and return the next screen transition
    async fn handle_key(&mut self, context: &mut AppContext<S>, key: KeyEvent) -> Result<ScreenTransition>;

    /// Called when entering this screen
    ///
    /// Use this to pick up data handed over by the previous screen.
    async fn on_enter(&mut self, context: &mut AppContext<S>) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Called once per event loop iteration while this screen is active
    ///
    /// Lets a screen react to background work finishing without a key press.
    async fn on_tick(&mut self, context: &mut AppContext<S>) -> Result<ScreenTransition> {
        let _ = context;
        Ok(ScreenTransition::Stay)
    }

    fn id(&self) -> ScreenId;
}

/// Result of handling input or a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen
    Stay,

    /// Navigate to a specific screen
    GoTo(ScreenId),

    /// Go back to the previous screen in history
    Back,

    /// Navigate to a screen and forget the history
    Reset(ScreenId),

    /// Quit the application
    Quit,
}

/// Screen identifier for each screen in the application
///
/// The quiz moves through these in order: pick a quiz, wait for the
/// questions, answer them, see the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    SelectQuiz,
    Loading,
    AnswerQuestions,
    Results,
}
