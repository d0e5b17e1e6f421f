//! Cursor movement shared by every selectable list in the TUI

/// Trait for types that support list navigation
///
/// Implementors provide the data accessors; next/previous wrap around.
///
/// # Example
/// ```
/// use trivia_quiz::tui::state::Navigable;
///
/// struct AnswerPicker {
///     choices: Vec<&'static str>,
///     cursor: usize,
/// }
///
/// impl Navigable for AnswerPicker {
///     fn len(&self) -> usize {
///         self.choices.len()
///     }
///
///     fn selected(&self) -> usize {
///         self.cursor
///     }
///
///     fn set_selected(&mut self, index: usize) {
///         self.cursor = index;
///     }
/// }
///
/// let mut picker = AnswerPicker { choices: vec!["Thor", "Odin"], cursor: 0 };
/// picker.next();
/// assert_eq!(picker.selected(), 1);
/// picker.next();
/// assert_eq!(picker.selected(), 0);
/// ```
pub trait Navigable {
    fn len(&self) -> usize;

    fn selected(&self) -> usize;

    fn set_selected(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move to the next item, wrapping to the start
    fn next(&mut self) {
        if !self.is_empty() {
            self.set_selected((self.selected() + 1) % self.len());
        }
    }

    /// Move to the previous item, wrapping to the end
    fn previous(&mut self) {
        if !self.is_empty() {
            let current = self.selected();
            if current > 0 {
                self.set_selected(current - 1);
            } else {
                self.set_selected(self.len() - 1);
            }
        }
    }

    fn first(&mut self) {
        if !self.is_empty() {
            self.set_selected(0);
        }
    }

    fn last(&mut self) {
        let len = self.len();
        if len > 0 {
            self.set_selected(len - 1);
        }
    }
}
