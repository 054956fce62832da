//! Yes/no confirmation popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::ui::utils::centered_rect;

/// Modal question answered with `y` or `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    prompt: String,
}

impl ConfirmDialog {
    /// Creates a dialog asking `prompt`.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Question shown to the user.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Maps a key to an answer. `None` keeps the dialog open.
    #[must_use]
    pub const fn answer(key: &KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }
}

impl Widget for &ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(50, 25, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(self.prompt.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", key_style),
                Span::raw(": Yes   "),
                Span::styled("n", key_style),
                Span::raw(": No"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    #[test_case(KeyCode::Char('y'), Some(true) ; "yes")]
    #[test_case(KeyCode::Enter, Some(true) ; "enter_confirms")]
    #[test_case(KeyCode::Char('n'), Some(false) ; "no")]
    #[test_case(KeyCode::Esc, Some(false) ; "escape_declines")]
    #[test_case(KeyCode::Char('x'), None ; "other_key_waits")]
    fn test_answer(code: KeyCode, expected: Option<bool>) {
        assert_eq!(
            ConfirmDialog::answer(&KeyEvent::new(code, KeyModifiers::NONE)),
            expected
        );
    }

    #[test]
    fn test_renders_prompt() {
        let dialog = ConfirmDialog::new("Log out?");
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        (&dialog).render(area, &mut buf);

        let rendered: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(rendered.contains("Log out?"));
    }
}
