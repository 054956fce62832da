//! Settings screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::elements::{ON, settings};
use crate::domain::ports::PresentationPort;
use crate::infrastructure::view::ViewTree;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{descendant_text, text_of};

/// What the settings screen asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing.
    None,
    /// Flip a setting row.
    Toggle(String),
    /// Ask to log out.
    Logout,
}

/// Row selection on the settings screen. The logout entry follows the rows.
#[derive(Debug, Default)]
pub struct SettingsScreen {
    selected: usize,
}

impl SettingsScreen {
    /// Creates the screen with the first row selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Ids of the setting rows in display order.
    #[must_use]
    pub fn row_ids(view: &ViewTree) -> Vec<String> {
        view.query_all(&format!(".{}", settings::ROW))
            .into_iter()
            .filter_map(|row| view.element(row))
            .filter_map(|el| el.id().map(str::to_string))
            .collect()
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent, rows: &[String]) -> SettingsAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                SettingsAction::None
            }
            KeyCode::Down => {
                if self.selected < rows.len() {
                    self.selected += 1;
                }
                SettingsAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => rows
                .get(self.selected)
                .map_or(SettingsAction::Logout, |id| SettingsAction::Toggle(id.clone())),
            _ => SettingsAction::None,
        }
    }

    /// Draws profile, rows and the logout entry from the element tree.
    pub fn render(&self, view: &ViewTree, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let [profile_area, rows_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(area);

        let profile_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.dimmed_style)
            .title(" Profile ");
        let inner = profile_block.inner(profile_area);
        profile_block.render(profile_area, buf);
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", text_of(view, settings::AVATAR)),
                    theme.active_style,
                ),
                Span::raw(" "),
                Span::styled(
                    text_of(view, settings::NAME),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::raw(text_of(view, settings::EMAIL))),
            Line::from(Span::styled(text_of(view, settings::ROLE), theme.dimmed_style)),
        ])
        .render(inner, buf);

        let rows = Self::row_ids(view);
        let mut lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let on = view
                    .get_element(id)
                    .and_then(|row| view.query_descendant(row, settings::TOGGLE_SELECTOR))
                    .is_some_and(|toggle| view.has_class(toggle, ON));
                let indicator = if on {
                    Span::styled("● ON ", Style::default().fg(Color::Green))
                } else {
                    Span::styled("○ OFF", theme.dimmed_style)
                };
                let mut label_style = Style::default();
                if index == self.selected {
                    label_style = label_style.patch(theme.selection_style);
                }
                Line::from(vec![
                    Span::styled(format!(" {:<24}", descendant_text(view, id, ".label")), label_style),
                    indicator,
                ])
            })
            .collect();

        let mut logout_style = Style::default().fg(Color::Red);
        if self.selected >= rows.len() {
            logout_style = logout_style.patch(theme.selection_style);
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", text_of(view, settings::LOGOUT)),
            logout_style,
        )));

        Paragraph::new(lines).render(rows_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::view::{build_shell_view, demo_packages, demo_settings};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_row_ids_from_view() {
        let view = build_shell_view(&demo_packages(), &demo_settings());

        let rows = SettingsScreen::row_ids(&view);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], "setting-dark-mode");
    }

    #[test]
    fn test_enter_toggles_selected_row() {
        let rows = vec!["setting-a".to_string(), "setting-b".to_string()];
        let mut screen = SettingsScreen::new();
        screen.handle_key(key(KeyCode::Down), &rows);

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &rows),
            SettingsAction::Toggle("setting-b".to_string())
        );
    }

    #[test]
    fn test_last_entry_is_logout() {
        let rows = vec!["setting-a".to_string()];
        let mut screen = SettingsScreen::new();
        for _ in 0..5 {
            screen.handle_key(key(KeyCode::Down), &rows);
        }

        assert_eq!(screen.handle_key(key(KeyCode::Enter), &rows), SettingsAction::Logout);
    }
}
