use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::state::Navigable;

/// A single-select option list
///
/// This widget provides:
/// - A cursor moved with up/down keys
/// - Exactly one chosen item, picked with Space or Enter
/// - Custom item formatting
#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroup<T: Clone + PartialEq> {
    /// The options in display order
    pub items: Vec<T>,

    /// Index under the cursor
    pub cursor: usize,

    /// Index of the chosen option
    pub chosen: usize,
}

impl<T: Clone + PartialEq> RadioGroup<T> {
    /// Create a RadioGroup with the first item chosen
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            chosen: 0,
        }
    }

    /// Create a RadioGroup with `value` chosen and under the cursor
    ///
    /// Falls back to the first item when `value` isn't one of the options.
    pub fn with_chosen(items: Vec<T>, value: &T) -> Self {
        let index = items.iter().position(|item| item == value).unwrap_or(0);
        Self {
            items,
            cursor: index,
            chosen: index,
        }
    }

    /// Choose the item under the cursor
    pub fn choose_current(&mut self) {
        if self.cursor < self.items.len() {
            self.chosen = self.cursor;
        }
    }

    pub fn is_chosen(&self, index: usize) -> bool {
        index == self.chosen
    }

    pub fn chosen_item(&self) -> Option<&T> {
        self.items.get(self.chosen)
    }

    /// Handle keyboard input
    ///
    /// Returns true if the key was handled
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.previous();
                true
            }
            KeyCode::Down => {
                self.next();
                true
            }
            KeyCode::Home => {
                self.first();
                true
            }
            KeyCode::End => {
                self.last();
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.choose_current();
                true
            }
            _ => false,
        }
    }

    /// Render the group inside a titled block
    ///
    /// The cursor is only highlighted while the group has focus.
    pub fn render<F>(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool, formatter: F)
    where
        F: Fn(&T) -> String,
    {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if self.is_chosen(i) { "(•)" } else { "( )" };
                let on_cursor = focused && i == self.cursor;
                let prefix = if on_cursor { "> " } else { "  " };

                let style = if on_cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else if self.is_chosen(i) {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(format!("{}{} {}", prefix, marker, formatter(item)))).style(style)
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(border_style),
        );

        // Keeps the cursor visible when the list is taller than the area
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl<T: Clone + PartialEq> Navigable for RadioGroup<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn selected(&self) -> usize {
        self.cursor
    }

    fn set_selected(&mut self, index: usize) {
        self.cursor = index;
    }
}
