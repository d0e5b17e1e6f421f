//! Popup messages shown on top of whatever screen is active

use ratatui::{layout::Rect, Frame};

use crate::tui::widgets::{DialogType, ModalDialog};

/// Holds at most one pending popup message
///
/// A new message replaces the previous one. The app clears it on the next
/// key press.
///
/// # Example
/// ```
/// use trivia_quiz::tui::state::MessageDisplay;
///
/// let mut messages = MessageDisplay::default();
/// messages.set_error("Could not reach the trivia API".to_string());
/// assert!(messages.has_message());
///
/// messages.clear();
/// assert!(!messages.has_message());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MessageDisplay {
    current: Option<(DialogType, String)>,
}

impl MessageDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, msg: String) {
        self.current = Some((DialogType::Error, msg));
    }

    pub fn set_info(&mut self, msg: String) {
        self.current = Some((DialogType::Info, msg));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn has_message(&self) -> bool {
        self.current.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.current {
            Some((DialogType::Error, msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn info(&self) -> Option<&str> {
        match &self.current {
            Some((DialogType::Info, msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Render the pending message, if any, centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some((kind, msg)) = &self.current {
            let dialog = match kind {
                DialogType::Error => ModalDialog::error(msg.clone()),
                DialogType::Info => ModalDialog::info(msg.clone()),
            };
            dialog.render(frame, area);
        }
    }
}
