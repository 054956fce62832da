//! Home dashboard.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::elements::home;
use crate::domain::ports::PresentationPort;
use crate::infrastructure::view::ViewTree;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{is_shown, text_of};

/// Greeting plus the role-specific block.
pub struct HomeScreen<'a> {
    view: &'a ViewTree,
    theme: &'a Theme,
}

impl<'a> HomeScreen<'a> {
    /// Creates the widget over `view`.
    #[must_use]
    pub const fn new(view: &'a ViewTree, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn stats(&self) -> Vec<&'a str> {
        let view = self.view;
        view.get_element(home::DRIVER_STATS)
            .map(|stats| {
                view.children(stats)
                    .into_iter()
                    .filter_map(|stat| view.element(stat))
                    .map(|el| el.text())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [greeting_area, block_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                text_of(self.view, home::GREETING),
                self.theme.dimmed_style,
            )),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", text_of(self.view, home::AVATAR)),
                    self.theme.active_style,
                ),
                Span::raw(" "),
                Span::styled(
                    text_of(self.view, home::NAME),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .render(greeting_area, buf);

        if is_shown(self.view, home::ADMIN_BANNER) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.accent))
                .title(" Fleet ");
            Paragraph::new(text_of(self.view, home::ADMIN_BANNER))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(block_area, buf);
        } else if is_shown(self.view, home::DRIVER_STATS) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.dimmed_style)
                .title(" Today ");
            let line = Line::from(
                self.stats()
                    .into_iter()
                    .flat_map(|stat| [Span::raw(format!(" {stat} ")), Span::raw("│")])
                    .collect::<Vec<_>>(),
            );
            Paragraph::new(line).block(block).render(block_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::view::{build_shell_view, demo_packages, demo_settings};

    fn rendered(view: &ViewTree) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        HomeScreen::new(view, &theme).render(area, &mut buf);
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_driver_view_shows_stats() {
        let view = build_shell_view(&demo_packages(), &demo_settings());

        let text = rendered(&view);

        assert!(text.contains("Good morning,"));
        assert!(text.contains("48 Packages"));
        assert!(!text.contains("Fleet overview"));
    }

    #[test]
    fn test_admin_banner_replaces_stats() {
        let mut view = build_shell_view(&demo_packages(), &demo_settings());
        let banner = view.get_element(home::ADMIN_BANNER).unwrap();
        view.set_visible(banner, true);
        let stats = view.get_element(home::DRIVER_STATS).unwrap();
        view.set_visible(stats, false);

        let text = rendered(&view);

        assert!(text.contains("Fleet overview"));
        assert!(!text.contains("48 Packages"));
    }
}
