//! Package list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::elements::{ACTIVE, OPEN, packages};
use crate::domain::entities::PackageTab;
use crate::domain::ports::PresentationPort;
use crate::infrastructure::view::ViewTree;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::descendant_text;
use crate::presentation::widgets::TextInput;

/// What the package screen asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagesAction {
    /// Nothing.
    None,
    /// Select a status tab.
    SetTab(PackageTab),
    /// Search text changed.
    Filter(String),
    /// Expand or collapse a card.
    ToggleCard(String),
}

/// Selection and search state of the package list.
pub struct PackagesScreen {
    search: TextInput,
    selected: usize,
}

impl PackagesScreen {
    /// Creates the screen with the first card selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: TextInput::new(" Search ").placeholder("Press / to search packages"),
            selected: 0,
        }
    }

    /// Whether the search input has focus.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.search.is_focused()
    }

    /// Ids of the cards currently shown, in list order.
    #[must_use]
    pub fn visible_cards(view: &ViewTree) -> Vec<String> {
        view.query_all(packages::CARD_SELECTOR)
            .into_iter()
            .filter_map(|card| view.element(card))
            .filter(|el| el.is_visible())
            .filter_map(|el| el.id().map(str::to_string))
            .collect()
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent, tab: PackageTab, visible: &[String]) -> PackagesAction {
        if self.is_searching() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.search.set_focused(false);
                    PackagesAction::None
                }
                _ if self.search.handle_key(key) => {
                    self.selected = 0;
                    PackagesAction::Filter(self.search.value().to_string())
                }
                _ => PackagesAction::None,
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.search.set_focused(true);
                PackagesAction::None
            }
            KeyCode::Left | KeyCode::Right => {
                let index = PackageTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
                let len = PackageTab::ALL.len();
                let next = if key.code == KeyCode::Right {
                    (index + 1) % len
                } else {
                    (index + len - 1) % len
                };
                self.selected = 0;
                PackagesAction::SetTab(PackageTab::ALL[next])
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                PackagesAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < visible.len() {
                    self.selected += 1;
                }
                PackagesAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => visible
                .get(self.selected)
                .map_or(PackagesAction::None, |id| PackagesAction::ToggleCard(id.clone())),
            _ => PackagesAction::None,
        }
    }

    /// Draws tabs, search and cards from the element tree.
    pub fn render(&self, view: &ViewTree, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let [search_area, tabs_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        (&self.search).render(search_area, buf);

        let tabs: Vec<Span> = view
            .query_all(packages::TAB_SELECTOR)
            .into_iter()
            .filter_map(|tab| view.element(tab))
            .flat_map(|el| {
                let style = if el.has_class(ACTIVE) {
                    theme.active_style
                } else {
                    theme.dimmed_style
                };
                [Span::styled(format!(" {} ", el.text()), style), Span::raw(" ")]
            })
            .collect();
        Paragraph::new(Line::from(tabs)).render(tabs_area, buf);

        let visible = Self::visible_cards(view);
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme.dimmed_style)
            .title(format!(" {} packages ", visible.len()));
        let inner = block.inner(list_area);
        block.render(list_area, buf);

        let mut lines = Vec::new();
        for (index, id) in visible.iter().enumerate() {
            let open = view.by_id(id).is_some_and(|el| el.has_class(OPEN));
            let marker = if open { "▾" } else { "▸" };
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if index == self.selected {
                style = style.patch(theme.selection_style);
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} {}", descendant_text(view, id, ".pkg-tracking")), style),
                Span::raw("  "),
                Span::raw(descendant_text(view, id, ".pkg-address")),
            ]));
            if open {
                lines.push(Line::from(Span::styled(
                    format!("    {}", descendant_text(view, id, ".pkg-detail")),
                    theme.dimmed_style,
                )));
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No packages", theme.dimmed_style)));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Default for PackagesScreen {
    fn default() -> Self {
        Self::new()
    }
}
