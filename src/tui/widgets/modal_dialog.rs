use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::centered_rect;

/// A centered popup for errors and notices
#[derive(Debug, Clone)]
pub struct ModalDialog {
    pub title: String,
    pub content: Vec<Line<'static>>,
    pub dialog_type: DialogType,

    /// Width as percentage of screen (1-100)
    pub width_percent: u16,

    /// Height as percentage of screen (1-100)
    pub height_percent: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    /// Error message (red border)
    Error,

    /// Information message (cyan border)
    Info,
}

impl DialogType {
    pub fn border_color(&self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Info => Color::Cyan,
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Info => "Information",
        }
    }
}

impl ModalDialog {
    pub fn new(dialog_type: DialogType, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: vec![
                Line::from(""),
                Line::from(message.into()).alignment(Alignment::Center),
                Line::from(""),
                Line::from("[Press any key]").alignment(Alignment::Center),
            ],
            dialog_type,
            width_percent: 60,
            height_percent: 25,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DialogType::Error, DialogType::Error.default_title(), message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DialogType::Info, DialogType::Info.default_title(), message)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal_area = centered_rect(self.width_percent, self.height_percent, area);

        frame.render_widget(Clear, modal_area);

        let border_style = Style::default()
            .fg(self.dialog_type.border_color())
            .add_modifier(Modifier::BOLD);

        let block = Block::default()
            .title(self.title.clone())
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(border_style);

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, modal_area);
    }
}
