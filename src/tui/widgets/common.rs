//! Common reusable UI components for the TUI
//!
//! Standard layout, title, and help bar shared by all quiz screens.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Standard 3-section screen layout (title, content, help)
///
/// Returns a 3-element array with fixed-height title and help sections,
/// and a flexible-height content section.
///
/// # Example
/// ```no_run
/// # use ratatui::layout::Rect;
/// # use trivia_quiz::tui::widgets::common::render_screen_layout;
/// # let area = Rect::default();
/// let chunks = render_screen_layout(area);
/// // chunks[0] = title area (height: 3)
/// // chunks[1] = content area (flexible)
/// // chunks[2] = help area (height: 3)
/// ```
pub fn render_screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::vertical([
        Constraint::Length(3),    // Title
        Constraint::Min(0),       // Content
        Constraint::Length(3),    // Help
    ])
    .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Render a centered title with cyan borders
pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(widget, area);
}

/// Render help text with keyboard shortcuts
///
/// Takes an array of (key, description) tuples and renders them
/// as a centered help bar at the bottom of the screen.
pub fn render_help(frame: &mut Frame, area: Rect, items: &[(&str, &str)]) {
    let spans: Vec<Span> = items
        .iter()
        .map(|(key, desc)| Span::raw(format!("[{}] {}  ", key, desc)))
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Render a bordered, centered message in place of empty content
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str) {
    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Calculate a centered rectangle for popups
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `r` - Parent rectangle to center within
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Get selection marker and style for buttons and list items
///
/// Selected items get a ">" prefix and yellow bold styling.
pub fn selection_style(is_selected: bool) -> (String, Style) {
    let prefix = if is_selected {
        "> ".to_string()
    } else {
        "  ".to_string()
    };
    let style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    (prefix, style)
}

/// Render a one-line button, highlighted when focused
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (prefix, style) = selection_style(focused);
    let widget = Paragraph::new(format!("{}[ {} ]", prefix, label))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_style_selected() {
        let (prefix, style) = selection_style(true);
        assert_eq!(prefix, "> ");
        assert_eq!(style.fg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_selection_style_not_selected() {
        let (prefix, style) = selection_style(false);
        assert_eq!(prefix, "  ");
        assert_eq!(style.fg, None);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);

        let centered = centered_rect(50, 50, area);
        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 50);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 25);

        let centered = centered_rect(60, 20, area);
        assert_eq!(centered.width, 60);
        assert_eq!(centered.height, 20);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 40);
    }

    #[test]
    fn test_screen_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let chunks = render_screen_layout(area);

        assert_eq!(chunks[0].height, 3);
        assert_eq!(chunks[0].y, 0);

        // 50 - 3 - 3 = 44
        assert_eq!(chunks[1].height, 44);
        assert_eq!(chunks[1].y, 3);

        assert_eq!(chunks[2].height, 3);
        assert_eq!(chunks[2].y, 47);
    }
}
