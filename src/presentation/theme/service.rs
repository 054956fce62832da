use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use super::adapter::ColorConverter;

/// Styles shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent used for focus and the active screen.
    pub accent: Color,
    /// Selected list row.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Active tab or toggle.
    pub active_style: Style,
    /// Primary button.
    pub button_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    /// Builds a theme around an accent color name or hex code.
    #[must_use]
    pub fn new(accent: &str) -> Self {
        let accent = parse_color(accent).unwrap_or(Color::Cyan);

        let mut selection_hsl = ColorConverter::to_hsl(accent);
        selection_hsl.l = 0.2;
        selection_hsl.s = 0.3;
        let selection_bg = ColorConverter::to_ratatui(selection_hsl);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            active_style: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            button_style: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Button style for the given element state.
    #[must_use]
    pub fn button(&self, background: Option<&str>, opacity: Option<f32>, disabled: bool) -> Style {
        let bg = background.and_then(parse_color).unwrap_or(self.accent);
        if disabled {
            return Style::default().fg(Color::Gray).bg(Color::DarkGray);
        }
        let bg = opacity.map_or(bg, |o| ColorConverter::faded(bg, o));
        self.button_style.bg(bg)
    }
}

/// Parses a color name or `#rrggbb` code.
#[must_use]
pub fn parse_color(s: &str) -> Option<Color> {
    Color::from_str(s.trim()).ok()
}
