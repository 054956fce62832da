//! Session-scoped coordinator that owns every controller.

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::application::dto::{LogoutOutcome, ShellPolicy, SubmitOutcome};
use crate::application::services::{
    ArrivalFeedback, PackageFilter, ScreenRouter, SettingsToggle,
};
use crate::application::use_cases::{LoginController, LogoutController};
use crate::domain::elements::login;
use crate::domain::entities::{PackageCard, PackageTab, SettingRow};
use crate::domain::errors::ViewError;
use crate::domain::login::{CredentialField, LoginMode, LoginPhase};
use crate::domain::ports::{ConfirmPort, DeferredTask, PresentationPort, SchedulerPort, TimerHandle};
use crate::domain::profile::Profile;
use crate::domain::screen::{ScreenId, Transition};

/// Owns the view, the timer queue and all controllers for one session.
///
/// Every user action and every timer tick goes through here, one at a time.
#[derive(Debug)]
pub struct AppShell<V, S> {
    view: V,
    scheduler: S,
    policy: ShellPolicy,
    router: ScreenRouter,
    login: LoginController,
    logout: LogoutController,
    packages: PackageFilter,
    settings: SettingsToggle,
    arrival: ArrivalFeedback,
}

impl<V, S> AppShell<V, S>
where
    V: PresentationPort,
    S: SchedulerPort,
{
    /// Builds the shell and runs the initial submit button check.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the login form is incomplete
    /// and elements are strict.
    pub fn new(
        view: V,
        scheduler: S,
        policy: ShellPolicy,
        cards: Vec<PackageCard>,
        rows: Vec<SettingRow>,
    ) -> Result<Self, ViewError> {
        let mut shell = Self {
            view,
            scheduler,
            policy,
            router: ScreenRouter::new(),
            login: LoginController::new(policy.login_latency)
                .with_reject_concurrent(policy.reject_concurrent_submit)
                .with_cancel_superseded(policy.cancel_superseded_timers),
            logout: LogoutController::new().with_cancel_superseded(policy.cancel_superseded_timers),
            packages: PackageFilter::new(cards),
            settings: SettingsToggle::new(rows),
            arrival: ArrivalFeedback::new(policy.arrival_revert),
        };
        shell.validate_fields()?;
        debug!(?policy, "Shell ready");
        Ok(shell)
    }

    fn settle<T>(
        &self,
        operation: &'static str,
        result: Result<T, ViewError>,
        fallback: T,
    ) -> Result<T, ViewError> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if self.policy.strict_elements => {
                error!(operation, error = %err, "View is missing an element");
                Err(err)
            }
            Err(err) => {
                warn!(operation, error = %err, "Skipping operation, view is missing an element");
                Ok(fallback)
            }
        }
    }

    /// Shows `target`.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn navigate(&mut self, target: ScreenId) -> Result<Option<Transition>, ViewError> {
        let result = self.router.navigate(&mut self.view, target);
        self.settle("navigate", result, None)
    }

    /// Shows the screen named `name`. Unknown names are ignored.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn navigate_by_name(&mut self, name: &str) -> Result<Option<Transition>, ViewError> {
        let result = self.router.navigate_by_name(&mut self.view, name);
        self.settle("navigate", result, None)
    }

    /// Switches the login mode.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn set_login_mode(&mut self, mode: LoginMode) -> Result<(), ViewError> {
        let result = self.login.set_mode(&mut self.view, mode);
        self.settle("set_login_mode", result, ())
    }

    /// Writes a credential input and revalidates the form.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn set_credential(&mut self, field: CredentialField, value: &str) -> Result<bool, ViewError> {
        let id = match field {
            CredentialField::Email => login::EMAIL,
            CredentialField::Password => login::PASSWORD,
        };
        let result = self.view.require(id).and_then(|input| {
            self.view.set_value(input, value);
            self.login.validate_fields(&mut self.view)
        });
        self.settle("set_credential", result, false)
    }

    /// Re-evaluates the submit button state.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn validate_fields(&mut self) -> Result<bool, ViewError> {
        let result = self.login.validate_fields(&mut self.view);
        self.settle("validate_fields", result, false)
    }

    /// Submits the login form. Does nothing while the button is disabled.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn submit_login(&mut self) -> Result<SubmitOutcome, ViewError> {
        if !self.login.is_submit_enabled() {
            debug!("Submit ignored, credentials incomplete");
            return Ok(SubmitOutcome::Blocked);
        }
        let result = self.login.submit(&mut self.view, &mut self.scheduler);
        self.settle("submit_login", result, SubmitOutcome::Blocked)
    }

    /// Logs out after asking `confirm`.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn logout(&mut self, confirm: &mut dyn ConfirmPort) -> Result<LogoutOutcome, ViewError> {
        let result = self.logout.logout(
            &mut self.view,
            confirm,
            &mut self.login,
            &mut self.router,
            &mut self.scheduler,
        );
        self.settle("logout", result, LogoutOutcome::Declined)
    }

    /// Selects a package status tab. Returns how many cards are shown.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn set_tab(&mut self, tab: PackageTab) -> Result<usize, ViewError> {
        let control = tab.element_id();
        let result = self.packages.set_tab(&mut self.view, tab, &control);
        self.settle("set_tab", result, 0)
    }

    /// Expands or collapses a package card.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn toggle_card(&mut self, element_id: &str) -> Result<bool, ViewError> {
        let result = self.packages.toggle_expanded(&mut self.view, element_id);
        self.settle("toggle_card", result, false)
    }

    /// Filters package cards by free text.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn filter_packages(&mut self, query: &str) -> Result<usize, ViewError> {
        let result = self.packages.filter_by_text(&mut self.view, query);
        self.settle("filter_packages", result, 0)
    }

    /// Flips a setting row.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn toggle_setting(&mut self, row_id: &str) -> Result<Option<bool>, ViewError> {
        let result = self.settings.activate(&mut self.view, row_id);
        self.settle("toggle_setting", result, None)
    }

    /// Shows the arrival confirmation.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn mark_arrived(&mut self) -> Result<Option<TimerHandle>, ViewError> {
        let result = self
            .arrival
            .mark_arrived(&mut self.view, &mut self.scheduler)
            .map(Some);
        self.settle("mark_arrived", result, None)
    }

    /// Moves the clock forward and runs every task that became due.
    ///
    /// All due tasks run even if one fails; the first failure is returned.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` under strict elements.
    pub fn advance(&mut self, elapsed: Duration) -> Result<Vec<DeferredTask>, ViewError> {
        let fired = self.scheduler.advance(elapsed);
        let mut first_error = None;

        for task in &fired {
            debug!(%task, "Running deferred task");
            let result = match task {
                DeferredTask::CompleteLogin => self
                    .login
                    .complete(&mut self.view, &mut self.router)
                    .map(drop),
                DeferredTask::RevertArrival => self.arrival.revert(&mut self.view),
            };
            if let Err(err) = self.settle("advance", result, ()) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(fired),
        }
    }

    /// The presentation adapter.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the presentation adapter.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Active policy.
    #[must_use]
    pub const fn policy(&self) -> &ShellPolicy {
        &self.policy
    }

    /// Visible screen.
    #[must_use]
    pub const fn current_screen(&self) -> ScreenId {
        self.router.current()
    }

    /// Current login mode.
    #[must_use]
    pub const fn login_mode(&self) -> LoginMode {
        self.login.mode()
    }

    /// Sign-in progress.
    #[must_use]
    pub fn login_phase(&self) -> LoginPhase {
        self.login.phase()
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub const fn is_submit_enabled(&self) -> bool {
        self.login.is_submit_enabled()
    }

    /// Profile of the signed-in user.
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.login.profile()
    }

    /// Number of deferred tasks waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Package list state.
    #[must_use]
    pub const fn packages(&self) -> &PackageFilter {
        &self.packages
    }

    /// Setting rows state.
    #[must_use]
    pub const fn settings(&self) -> &SettingsToggle {
        &self.settings
    }

    /// Whether the arrival confirmation is showing.
    #[must_use]
    pub const fn is_arrival_confirming(&self) -> bool {
        self.arrival.is_confirming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::elements::{home, navigate};
    use crate::domain::ports::PresetAnswer;
    use crate::domain::ports::mocks::MockConfirmPort;
    use crate::infrastructure::scheduler::TimerQueue;
    use crate::infrastructure::view::{Node, ViewTree, build_shell_view, demo_packages, demo_settings};

    type TestShell = AppShell<ViewTree, TimerQueue>;

    fn shell_with(policy: ShellPolicy) -> TestShell {
        let cards = demo_packages();
        let rows = demo_settings();
        let view = build_shell_view(&cards, &rows);
        AppShell::new(view, TimerQueue::new(), policy, cards, rows).unwrap()
    }

    fn shell() -> TestShell {
        shell_with(ShellPolicy::default().with_strict_elements(true))
    }

    fn sign_in(shell: &mut TestShell, mode: LoginMode) {
        shell.set_login_mode(mode).unwrap();
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        assert!(shell.submit_login().unwrap().is_scheduled());
        shell.advance(Duration::from_millis(900)).unwrap();
    }

    #[test]
    fn test_starts_on_login_with_button_disabled() {
        let shell = shell();

        assert_eq!(shell.current_screen(), ScreenId::Login);
        assert_eq!(shell.login_mode(), LoginMode::Driver);
        assert!(!shell.is_submit_enabled());
        assert!(shell.view().by_id(login::SUBMIT).unwrap().is_disabled());
    }

    #[test]
    fn test_disabled_submit_is_blocked() {
        let mut shell = shell();

        assert_eq!(shell.submit_login().unwrap(), SubmitOutcome::Blocked);
        assert_eq!(shell.pending_timers(), 0);
    }

    #[test]
    fn test_credentials_enable_submit() {
        let mut shell = shell();

        assert!(shell.set_credential(CredentialField::Password, "pw").unwrap());
        assert!(!shell.set_credential(CredentialField::Email, "   ").unwrap());
        assert!(shell.set_credential(CredentialField::Email, "a@b.com").unwrap());
    }

    #[test]
    fn test_admin_sign_in_end_to_end() {
        let mut shell = shell();

        sign_in(&mut shell, LoginMode::Admin);

        assert_eq!(shell.current_screen(), ScreenId::Home);
        assert_eq!(shell.profile(), Some(&Profile::ADMIN));
        assert_eq!(shell.login_phase(), LoginPhase::Idle);
        let view = shell.view();
        assert_eq!(view.by_id(home::GREETING).unwrap().text(), "Welcome back,");
        assert!(view.by_id(home::ADMIN_BANNER).unwrap().is_visible());
        assert!(!view.by_id(home::DRIVER_STATS).unwrap().is_visible());
    }

    #[test]
    fn test_sign_in_waits_for_latency() {
        let mut shell = shell();
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        shell.submit_login().unwrap();

        assert!(shell.advance(Duration::from_millis(899)).unwrap().is_empty());
        assert_eq!(shell.current_screen(), ScreenId::Login);
        assert_eq!(
            shell.advance(Duration::from_millis(1)).unwrap(),
            vec![DeferredTask::CompleteLogin]
        );
        assert_eq!(shell.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_logout_returns_to_driver_login() {
        let mut shell = shell();
        sign_in(&mut shell, LoginMode::Admin);
        shell.navigate(ScreenId::Settings).unwrap();
        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().times(1).returning(|_| true);

        let outcome = shell.logout(&mut confirm).unwrap();

        assert_eq!(outcome, LogoutOutcome::LoggedOut);
        assert_eq!(shell.current_screen(), ScreenId::Login);
        assert_eq!(shell.login_mode(), LoginMode::Driver);
        assert!(shell.profile().is_none());
    }

    #[test]
    fn test_declined_logout_keeps_session() {
        let mut shell = shell();
        sign_in(&mut shell, LoginMode::Driver);
        let mut confirm = PresetAnswer::new(false);

        assert_eq!(shell.logout(&mut confirm).unwrap(), LogoutOutcome::Declined);
        assert_eq!(confirm.asked(), Some("Log out of RouteOptimize?"));
        assert_eq!(shell.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_stale_completion_fires_after_logout_by_default() {
        let mut shell = shell();
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        shell.submit_login().unwrap();
        shell.navigate(ScreenId::Settings).unwrap();
        shell.logout(&mut PresetAnswer::new(true)).unwrap();

        let fired = shell.advance(Duration::from_millis(900)).unwrap();

        assert_eq!(fired, vec![DeferredTask::CompleteLogin]);
        assert_eq!(shell.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_hardened_policy_cancels_stale_completion() {
        let mut shell = shell_with(ShellPolicy::default().hardened().with_strict_elements(true));
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        shell.submit_login().unwrap();
        assert_eq!(shell.submit_login().unwrap(), SubmitOutcome::Rejected);
        shell.navigate(ScreenId::Settings).unwrap();
        shell.logout(&mut PresetAnswer::new(true)).unwrap();

        assert!(shell.advance(Duration::from_millis(900)).unwrap().is_empty());
        assert_eq!(shell.current_screen(), ScreenId::Login);
    }

    #[test]
    fn test_hardened_logout_restores_sign_in_button() {
        let mut shell = shell_with(ShellPolicy::default().hardened().with_strict_elements(true));
        shell.set_login_mode(LoginMode::Admin).unwrap();
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        shell.submit_login().unwrap();
        shell.logout(&mut PresetAnswer::new(true)).unwrap();
        shell.advance(Duration::from_millis(900)).unwrap();

        let view = shell.view();
        let button = view.by_id(login::SUBMIT).unwrap();
        assert_eq!(button.opacity(), None);
        assert!(button.is_interactive());
        assert_eq!(view.by_id(login::SUBMIT_LABEL).unwrap().text(), "Sign In as Driver");
        assert_eq!(shell.login_phase(), LoginPhase::Idle);
        assert_eq!(shell.pending_timers(), 0);
    }

    #[test]
    fn test_packages_and_settings_through_shell() {
        let mut shell = shell();
        sign_in(&mut shell, LoginMode::Driver);
        shell.navigate_by_name("packages").unwrap();

        assert_eq!(shell.set_tab(PackageTab::Completed).unwrap(), 0);
        assert_eq!(shell.filter_packages("DRV-2026").unwrap(), 1);
        assert_eq!(shell.filter_packages("").unwrap(), shell.packages().cards().len());
        assert!(shell.toggle_card("pkg-card-2").unwrap());

        shell.navigate(ScreenId::Settings).unwrap();
        assert_eq!(shell.toggle_setting("setting-dark-mode").unwrap(), Some(true));
    }

    #[test]
    fn test_arrival_reverts_after_delay() {
        let mut shell = shell();
        shell.navigate(ScreenId::Navigate).unwrap();
        let before = shell.view().clone();

        assert!(shell.mark_arrived().unwrap().is_some());
        assert!(shell.is_arrival_confirming());
        shell.advance(Duration::from_millis(1999)).unwrap();
        assert!(shell.is_arrival_confirming());

        assert_eq!(
            shell.advance(Duration::from_millis(1)).unwrap(),
            vec![DeferredTask::RevertArrival]
        );
        assert_eq!(shell.view(), &before);
    }

    fn login_only_view() -> ViewTree {
        let mut view = ViewTree::new();
        let screen = view.append(None, Node::new().id("screen-login").class("screen"));
        for id in [
            login::DRIVER_TOGGLE,
            login::ADMIN_TOGGLE,
            login::EMAIL,
            login::PASSWORD,
            login::SUBMIT,
        ] {
            view.append(Some(screen), Node::new().id(id));
        }
        let button = view.get_element(login::SUBMIT).unwrap();
        view.append(Some(button), Node::new().id(login::SUBMIT_LABEL));
        view
    }

    #[test]
    fn test_strict_shell_propagates_missing_element() {
        let policy = ShellPolicy::default().with_strict_elements(true);
        let mut shell =
            AppShell::new(login_only_view(), TimerQueue::new(), policy, Vec::new(), Vec::new()).unwrap();

        let err = shell.mark_arrived().unwrap_err();

        assert_eq!(err, ViewError::missing(navigate::ARRIVED_SELECTOR));
    }

    #[test]
    fn test_lenient_shell_skips_missing_element() {
        let policy = ShellPolicy::default().with_strict_elements(false);
        let mut shell =
            AppShell::new(login_only_view(), TimerQueue::new(), policy, Vec::new(), Vec::new()).unwrap();
        let before = shell.view().clone();

        assert_eq!(shell.mark_arrived().unwrap(), None);
        assert_eq!(shell.navigate(ScreenId::Home).unwrap(), None);
        assert_eq!(shell.view(), &before);
        assert_eq!(shell.current_screen(), ScreenId::Login);
    }

    #[test]
    fn test_lenient_completion_without_home_is_skipped() {
        let policy = ShellPolicy::default().with_strict_elements(false);
        let mut shell =
            AppShell::new(login_only_view(), TimerQueue::new(), policy, Vec::new(), Vec::new()).unwrap();
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        shell.set_credential(CredentialField::Email, "a@b.com").unwrap();
        assert!(shell.submit_login().unwrap().is_scheduled());

        let fired = shell.advance(Duration::from_millis(900)).unwrap();

        assert_eq!(fired, vec![DeferredTask::CompleteLogin]);
        assert_eq!(shell.current_screen(), ScreenId::Login);
        assert_eq!(shell.login_phase(), LoginPhase::Idle);
    }

    #[test]
    fn test_hardened_submit_allowed_after_skipped_completion() {
        let policy = ShellPolicy::default().hardened().with_strict_elements(false);
        let mut shell =
            AppShell::new(login_only_view(), TimerQueue::new(), policy, Vec::new(), Vec::new()).unwrap();
        shell.set_credential(CredentialField::Password, "secret").unwrap();
        shell.set_credential(CredentialField::Email, "a@b.com").unwrap();
        assert!(shell.submit_login().unwrap().is_scheduled());
        shell.advance(Duration::from_millis(900)).unwrap();

        assert!(shell.submit_login().unwrap().is_scheduled());
        assert_eq!(shell.pending_timers(), 1);
    }
}
