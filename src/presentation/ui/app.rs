//! Main application orchestrator.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tachyonfx::{Effect, Interpolation, fx};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::AppShell;
use crate::application::dto::{LogoutOutcome, SubmitOutcome};
use crate::application::use_cases::LOGOUT_PROMPT;
use crate::domain::errors::ViewError;
use crate::domain::ports::{DeferredTask, PresetAnswer};
use crate::domain::screen::{Direction, ScreenId};
use crate::infrastructure::config::UiConfig;
use crate::infrastructure::scheduler::TimerQueue;
use crate::infrastructure::view::ViewTree;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    HomeScreen, LoginAction, LoginScreen, NavigateScreen, PackagesAction, PackagesScreen,
    SettingsAction, SettingsScreen,
};
use crate::presentation::widgets::{ConfirmDialog, NavBar, StatusBar, StatusLevel, screen_for_key};

const TRANSITION_MS: u32 = 350;

/// Shell type driven by the terminal frontend.
pub type TerminalShell = AppShell<ViewTree, TimerQueue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Terminal frontend over an [`AppShell`].
pub struct App {
    state: AppState,
    shell: TerminalShell,
    theme: Theme,
    login: LoginScreen,
    packages: PackagesScreen,
    settings: SettingsScreen,
    dialog: Option<ConfirmDialog>,
    status: Option<(String, StatusLevel)>,
    transition: Option<Effect>,
    pending_fx: Duration,
    animations: bool,
    tick_rate: Duration,
}

impl App {
    /// Creates the frontend around `shell`.
    #[must_use]
    pub fn new(shell: TerminalShell, ui: &UiConfig) -> Self {
        let mut login = LoginScreen::new();
        login.sync_from(shell.view());

        Self {
            state: AppState::Running,
            shell,
            theme: Theme::new(&ui.accent_color),
            login,
            packages: PackagesScreen::new(),
            settings: SettingsScreen::new(),
            dialog: None,
            status: None,
            transition: None,
            pending_fx: Duration::ZERO,
            animations: ui.enable_animations,
            tick_rate: ui.tick_rate(),
        }
    }

    /// The shell being driven.
    #[must_use]
    pub const fn shell(&self) -> &TerminalShell {
        &self.shell
    }

    /// Runs until the user quits.
    ///
    /// # Errors
    /// Returns error if the terminal fails or a view element is missing
    /// under strict elements.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut ticker = interval(self.tick_rate);
        let mut last_tick = Instant::now();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event)? == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                }

                _ = ticker.tick() => {
                    let now = Instant::now();
                    self.tick(now.duration_since(last_tick))?;
                    last_tick = now;
                }
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> Result<EventResult, ViewError> {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => Ok(EventResult::Continue),
        }
    }

    /// Advances timers by `elapsed` and reacts to what fired.
    ///
    /// # Errors
    /// Returns `ViewError` under strict elements.
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), ViewError> {
        let before = self.shell.current_screen();
        let fired = self.shell.advance(elapsed)?;

        if fired.contains(&DeferredTask::CompleteLogin)
            && let Some(profile) = self.shell.profile()
        {
            self.status = Some((
                format!("Signed in as {}", profile.display_name),
                StatusLevel::Success,
            ));
        }
        self.after_screen_change(before);

        if self.transition.is_some() {
            self.pending_fx = self.pending_fx.saturating_add(elapsed);
        }
        Ok(())
    }

    fn after_screen_change(&mut self, before: ScreenId) {
        let after = self.shell.current_screen();
        if before == after {
            return;
        }

        let direction = Direction::between(before, after);
        debug!(from = %before, to = %after, ?direction, "Screen changed");
        self.pending_fx = Duration::ZERO;
        self.transition = (self.animations && direction == Direction::Forward)
            .then(|| fx::coalesce((TRANSITION_MS, Interpolation::CircOut)));

        if after == ScreenId::Login {
            self.login = LoginScreen::new();
            self.login.sync_from(self.shell.view());
        }
    }

    /// Handles a key press.
    ///
    /// # Errors
    /// Returns `ViewError` under strict elements.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult, ViewError> {
        if !EventHandler::is_actionable(&key) {
            return Ok(EventResult::Continue);
        }

        if self.dialog.is_some() {
            if let Some(answer) = ConfirmDialog::answer(&key) {
                self.dialog = None;
                self.confirm_logout(answer)?;
            }
            return Ok(EventResult::Consumed);
        }

        let screen = self.shell.current_screen();
        let typing = screen == ScreenId::Packages && self.packages.is_searching();
        if EventHandler::is_quit_event(&key, screen == ScreenId::Login, typing) {
            return Ok(EventResult::Exit);
        }

        if screen != ScreenId::Login
            && !typing
            && let KeyCode::Char(c) = key.code
            && let Some(target) = screen_for_key(c)
        {
            self.shell.navigate(target)?;
            self.after_screen_change(screen);
            return Ok(EventResult::Consumed);
        }

        match screen {
            ScreenId::Login => self.handle_login_key(key)?,
            ScreenId::Home => {}
            ScreenId::Packages => self.handle_packages_key(key)?,
            ScreenId::Navigate => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ' | 'a')) {
                    self.shell.mark_arrived()?;
                }
            }
            ScreenId::Settings => self.handle_settings_key(key)?,
        }

        self.after_screen_change(screen);
        Ok(EventResult::Consumed)
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Result<(), ViewError> {
        match self.login.handle_key(key, self.shell.login_mode()) {
            LoginAction::None => {}
            LoginAction::SetMode(mode) => {
                self.shell.set_login_mode(mode)?;
                self.login.sync_from(self.shell.view());
            }
            LoginAction::Credential(field, value) => {
                self.shell.set_credential(field, &value)?;
            }
            LoginAction::Submit => {
                let (message, level) = match self.shell.submit_login()? {
                    SubmitOutcome::Scheduled(_) => ("Signing in...", StatusLevel::Info),
                    SubmitOutcome::Blocked => {
                        ("Enter your email and password", StatusLevel::Warning)
                    }
                    SubmitOutcome::Rejected => ("Sign-in already in progress", StatusLevel::Warning),
                };
                self.status = Some((message.to_string(), level));
            }
        }
        Ok(())
    }

    fn handle_packages_key(&mut self, key: KeyEvent) -> Result<(), ViewError> {
        let visible = PackagesScreen::visible_cards(self.shell.view());
        let tab = self.shell.packages().tab();
        match self.packages.handle_key(key, tab, &visible) {
            PackagesAction::None => {}
            PackagesAction::SetTab(tab) => {
                let shown = self.shell.set_tab(tab)?;
                self.status = Some((format!("{shown} {} packages", tab.title()), StatusLevel::Info));
            }
            PackagesAction::Filter(query) => {
                self.shell.filter_packages(&query)?;
            }
            PackagesAction::ToggleCard(id) => {
                self.shell.toggle_card(&id)?;
            }
        }
        Ok(())
    }

    fn handle_settings_key(&mut self, key: KeyEvent) -> Result<(), ViewError> {
        let rows = SettingsScreen::row_ids(self.shell.view());
        match self.settings.handle_key(key, &rows) {
            SettingsAction::None => {}
            SettingsAction::Toggle(id) => {
                self.shell.toggle_setting(&id)?;
            }
            SettingsAction::Logout => {
                self.dialog = Some(ConfirmDialog::new(LOGOUT_PROMPT));
            }
        }
        Ok(())
    }

    fn confirm_logout(&mut self, answer: bool) -> Result<(), ViewError> {
        let before = self.shell.current_screen();
        let mut confirm = PresetAnswer::new(answer);
        if self.shell.logout(&mut confirm)? == LogoutOutcome::LoggedOut {
            self.status = Some(("Logged out".to_string(), StatusLevel::Info));
        }
        self.after_screen_change(before);
        Ok(())
    }

    fn hints(&self) -> &'static str {
        match self.shell.current_screen() {
            ScreenId::Login => "Tab: Next  ←/→: Mode  Enter: Sign in  Esc: Quit",
            ScreenId::Home => "1-4: Screens  q: Quit",
            ScreenId::Packages if self.packages.is_searching() => "Esc: Done",
            ScreenId::Packages => "←/→: Tab  /: Search  Enter: Expand  q: Quit",
            ScreenId::Navigate => "Enter: Mark arrived  q: Quit",
            ScreenId::Settings => "↑/↓: Select  Enter: Toggle  q: Quit",
        }
    }

    /// Draws the current screen.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let screen = self.shell.current_screen();
        let view = self.shell.view();

        let body = if screen == ScreenId::Login {
            let [body, footer] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            self.login.render(view, &self.theme, body, frame.buffer_mut());
            self.render_status(frame, footer);
            body
        } else {
            let [header, main, nav, footer] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

            let name = self.shell.profile().map_or("", |p| p.display_name);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        " RouteOptimize ",
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("· {}  ", screen.title()), self.theme.dimmed_style),
                    Span::raw(name),
                ])),
                header,
            );

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.dimmed_style)
                .title(format!(" {} ", screen.title()));
            let inner = block.inner(main);
            frame.render_widget(block, main);

            match screen {
                ScreenId::Home => frame.render_widget(HomeScreen::new(view, &self.theme), inner),
                ScreenId::Packages => {
                    self.packages
                        .render(view, &self.theme, inner, frame.buffer_mut());
                }
                ScreenId::Navigate => {
                    frame.render_widget(NavigateScreen::new(view, &self.theme), inner);
                }
                ScreenId::Settings => {
                    self.settings
                        .render(view, &self.theme, inner, frame.buffer_mut());
                }
                ScreenId::Login => {}
            }

            frame.render_widget(NavBar::new(screen, self.theme.accent), nav);
            self.render_status(frame, footer);
            main
        };

        if let Some(dialog) = &self.dialog {
            frame.render_widget(dialog, area);
        }

        if let Some(effect) = &mut self.transition {
            let duration = std::mem::take(&mut self.pending_fx);
            if effect
                .process(duration.into(), frame.buffer_mut(), body)
                .is_some()
            {
                self.transition = None;
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut bar = StatusBar::new(self.hints());
        if let Some((message, level)) = &self.status {
            bar = bar.message(format!(" {message}"), *level);
        }
        frame.render_widget(&bar, area);
    }
}
