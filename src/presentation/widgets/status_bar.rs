//! Footer line with a status message and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    /// Informational.
    #[default]
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Message on the left, key hints on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates a bar showing `hints`.
    #[must_use]
    pub fn new(hints: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            hints: hints.into(),
            level: StatusLevel::Info,
        }
    }

    /// Sets the message and its level.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>, level: StatusLevel) -> Self {
        self.message = message.into();
        self.level = level;
        self
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let hint_style = Style::default().fg(Color::DarkGray);

        let width = usize::from(area.width);
        let used = self.message.width() + self.hints.width();
        let padding = width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(self.message.as_str(), message_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(self.hints.as_str(), hint_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
