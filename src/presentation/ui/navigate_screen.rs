//! Turn-by-turn stop view with the arrival button.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::elements::navigate;
use crate::domain::ports::PresentationPort;
use crate::domain::screen::ScreenId;
use crate::infrastructure::view::{Element, ViewTree};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{descendant_text, text_of};

/// Glyph drawn for an icon name.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "check" => "✓ ",
        _ => "",
    }
}

/// Current stop, ETA and the arrival button.
pub struct NavigateScreen<'a> {
    view: &'a ViewTree,
    theme: &'a Theme,
}

impl<'a> NavigateScreen<'a> {
    /// Creates the widget over `view`.
    #[must_use]
    pub const fn new(view: &'a ViewTree, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn button(&self) -> Option<&'a Element> {
        self.view
            .query_first(navigate::ARRIVED_SELECTOR)
            .and_then(|el| self.view.element(el))
    }
}

impl Widget for NavigateScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [stop_area, eta_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            text_of(self.view, navigate::STOP),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(stop_area, buf);

        let screen = ScreenId::Navigate.element_id();
        Paragraph::new(Span::styled(
            descendant_text(self.view, &screen, ".nav-eta"),
            self.theme.dimmed_style,
        ))
        .render(eta_area, buf);

        if let Some(button) = self.button() {
            let label = format!(
                "  {}{}  ",
                button.icon().map_or("", icon_glyph),
                button.text()
            );
            let style = self
                .theme
                .button(button.background(), button.opacity(), button.is_disabled());
            Paragraph::new(Line::from(Span::styled(label, style)))
                .centered()
                .render(button_area, buf);
        }
    }
}
