//! Bottom navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::screen::ScreenId;

/// Screens reachable from the bar, in display order with their shortcut keys.
pub const NAV_ITEMS: [(char, ScreenId); 4] = [
    ('1', ScreenId::Home),
    ('2', ScreenId::Packages),
    ('3', ScreenId::Navigate),
    ('4', ScreenId::Settings),
];

/// Returns the screen bound to a shortcut key.
#[must_use]
pub fn screen_for_key(c: char) -> Option<ScreenId> {
    NAV_ITEMS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, screen)| *screen)
}

/// Tab-style bar highlighting the current screen.
#[derive(Debug, Clone, Copy)]
pub struct NavBar {
    current: ScreenId,
    accent: Color,
}

impl NavBar {
    /// Creates a bar for `current`.
    #[must_use]
    pub const fn new(current: ScreenId, accent: Color) -> Self {
        Self { current, accent }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(NAV_ITEMS.len() * 2);
        for (key, screen) in NAV_ITEMS {
            let style = if screen == self.current {
                Style::default()
                    .fg(Color::Black)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {key} {} ", screen.title()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans).centered()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_map_to_screens() {
        assert_eq!(screen_for_key('1'), Some(ScreenId::Home));
        assert_eq!(screen_for_key('4'), Some(ScreenId::Settings));
        assert_eq!(screen_for_key('5'), None);
    }

    #[test]
    fn test_login_is_not_in_bar() {
        assert!(NAV_ITEMS.iter().all(|(_, s)| *s != ScreenId::Login));
    }
}
