use crate::tui::screen_trait::ScreenId;

/// ScreenStateMachine tracks which screen is active
///
/// It holds the current screen and the history used by `Back`. The screen
/// states themselves are owned by the App.
pub struct ScreenStateMachine {
    current: ScreenId,
    history: Vec<ScreenId>,
}

impl Default for ScreenStateMachine {
    fn default() -> Self {
        Self {
            current: ScreenId::SelectQuiz,
            history: vec![],
        }
    }
}

impl ScreenStateMachine {
    /// Create a new ScreenStateMachine starting at quiz selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn go_to(&mut self, screen_id: ScreenId) {
        self.history.push(self.current);
        self.current = screen_id;
    }

    /// Go back to the previous screen
    ///
    /// Returns true if we went back, false if there's no history
    pub fn go_back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            true
        } else {
            false
        }
    }

    /// Jump to a screen, dropping all history
    pub fn reset_to(&mut self, screen_id: ScreenId) {
        self.history.clear();
        self.current = screen_id;
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn history(&self) -> &[ScreenId] {
        &self.history
    }
}
