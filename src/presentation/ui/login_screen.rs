//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::elements::{ACTIVE, login};
use crate::domain::login::{CredentialField, LoginMode};
use crate::infrastructure::view::ViewTree;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::text_of;
use crate::presentation::widgets::TextInput;

/// Focusable parts of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    /// Driver/admin switch.
    Mode,
    /// Email input.
    Email,
    /// Password input.
    Password,
    /// Sign-in button.
    Submit,
}

impl LoginFocus {
    const RING: [Self; 4] = [Self::Mode, Self::Email, Self::Password, Self::Submit];

    fn step(self, forward: bool) -> Self {
        let index = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::RING.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::RING[next]
    }
}

/// What the form asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// Nothing.
    None,
    /// Switch login mode.
    SetMode(LoginMode),
    /// A credential input changed.
    Credential(CredentialField, String),
    /// Sign in.
    Submit,
}

/// Login form state that the element tree does not hold.
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: LoginFocus,
}

impl LoginScreen {
    /// Creates the form with the email input focused.
    #[must_use]
    pub fn new() -> Self {
        let mut email = TextInput::new(" Email ").placeholder("you@example.com");
        email.set_focused(true);
        let password = TextInput::new(" Password ")
            .password()
            .placeholder("Enter your password");

        Self {
            email,
            password,
            focus: LoginFocus::Email,
        }
    }

    /// Current focus.
    #[must_use]
    pub const fn focus(&self) -> LoginFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: LoginFocus) {
        self.focus = focus;
        self.email.set_focused(focus == LoginFocus::Email);
        self.password.set_focused(focus == LoginFocus::Password);
    }

    /// Copies input values from the element tree.
    pub fn sync_from(&mut self, view: &ViewTree) {
        for (input, id) in [
            (&mut self.email, login::EMAIL),
            (&mut self.password, login::PASSWORD),
        ] {
            let value = view.by_id(id).map_or("", |el| el.value());
            if input.value() != value {
                input.set_value(value);
            }
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent, mode: LoginMode) -> LoginAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.step(true));
                return LoginAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.step(false));
                return LoginAction::None;
            }
            _ => {}
        }

        match self.focus {
            LoginFocus::Mode => match key.code {
                KeyCode::Left => LoginAction::SetMode(LoginMode::Driver),
                KeyCode::Right => LoginAction::SetMode(LoginMode::Admin),
                KeyCode::Enter | KeyCode::Char(' ') => LoginAction::SetMode(mode.toggled()),
                _ => LoginAction::None,
            },
            LoginFocus::Email | LoginFocus::Password if key.code == KeyCode::Enter => {
                LoginAction::Submit
            }
            LoginFocus::Email => {
                if self.email.handle_key(key) {
                    LoginAction::Credential(CredentialField::Email, self.email.value().to_string())
                } else {
                    LoginAction::None
                }
            }
            LoginFocus::Password => {
                if self.password.handle_key(key) {
                    LoginAction::Credential(
                        CredentialField::Password,
                        self.password.value().to_string(),
                    )
                } else {
                    LoginAction::None
                }
            }
            LoginFocus::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => LoginAction::Submit,
                _ => LoginAction::None,
            },
        }
    }

    /// Draws the form from the element tree.
    pub fn render(&self, view: &ViewTree, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(15),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);
        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(46),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" RouteOptimize ");
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [title_area, _, mode_area, _, email_area, password_area, _, button_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new("Sign in to start your route")
            .style(theme.dimmed_style)
            .centered()
            .render(title_area, buf);

        let toggle = |id: &str| {
            let element = view.by_id(id);
            let label = element.map_or("", |el| el.text());
            let style = if element.is_some_and(|el| el.has_class(ACTIVE)) {
                theme.active_style
            } else {
                theme.dimmed_style
            };
            Span::styled(format!(" {label} "), style)
        };
        let mode_marker = if self.focus == LoginFocus::Mode { "▸ " } else { "  " };
        Paragraph::new(Line::from(vec![
            Span::raw(mode_marker),
            toggle(login::DRIVER_TOGGLE),
            Span::raw("  "),
            toggle(login::ADMIN_TOGGLE),
        ]))
        .centered()
        .render(mode_area, buf);

        (&self.email).render(email_area, buf);
        (&self.password).render(password_area, buf);

        let button = view.by_id(login::SUBMIT);
        let mut style = theme.button(
            button.and_then(|el| el.background()),
            button.and_then(|el| el.opacity()),
            button.is_some_and(|el| el.is_disabled()),
        );
        if self.focus == LoginFocus::Submit {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Paragraph::new(Span::styled(
            format!("  {}  ", text_of(view, login::SUBMIT_LABEL)),
            style,
        ))
        .centered()
        .render(button_area, buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}
