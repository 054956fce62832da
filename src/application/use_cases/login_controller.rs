//! Sign-in form: mode switching, field validation and the simulated round trip.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::dto::SubmitOutcome;
use crate::application::services::ScreenRouter;
use crate::domain::elements::{ACTIVE, home, login, settings};
use crate::domain::errors::ViewError;
use crate::domain::login::{LoginMode, LoginPhase, SIGNING_IN_LABEL, credentials_complete};
use crate::domain::ports::{DeferredTask, ElementRef, PresentationPort, SchedulerPort, TimerHandle};
use crate::domain::profile::Profile;
use crate::domain::screen::ScreenId;

/// Dimmed opacity of the submit button while signing in.
pub const SUBMITTING_OPACITY: f32 = 0.6;

/// Element handles touched when a profile is applied.
struct ProfileTargets {
    button: ElementRef,
    label: ElementRef,
    greeting: ElementRef,
    home_name: ElementRef,
    home_avatar: ElementRef,
    banner: ElementRef,
    stats: ElementRef,
    settings_name: ElementRef,
    settings_email: ElementRef,
    settings_role: ElementRef,
    settings_avatar: ElementRef,
}

impl ProfileTargets {
    fn resolve(view: &dyn PresentationPort) -> Result<Self, ViewError> {
        Ok(Self {
            button: view.require(login::SUBMIT)?,
            label: view.require(login::SUBMIT_LABEL)?,
            greeting: view.require(home::GREETING)?,
            home_name: view.require(home::NAME)?,
            home_avatar: view.require(home::AVATAR)?,
            banner: view.require(home::ADMIN_BANNER)?,
            stats: view.require(home::DRIVER_STATS)?,
            settings_name: view.require(settings::NAME)?,
            settings_email: view.require(settings::EMAIL)?,
            settings_role: view.require(settings::ROLE)?,
            settings_avatar: view.require(settings::AVATAR)?,
        })
    }
}

/// Owns the login mode and drives the sign-in form.
#[derive(Debug, Clone)]
pub struct LoginController {
    mode: LoginMode,
    in_flight: Vec<TimerHandle>,
    submit_enabled: bool,
    profile: Option<Profile>,
    latency: Duration,
    reject_concurrent: bool,
    cancel_superseded: bool,
}

impl LoginController {
    /// Creates a controller in driver mode with no sign-in in flight.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self {
            mode: LoginMode::Driver,
            in_flight: Vec::new(),
            submit_enabled: false,
            profile: None,
            latency,
            reject_concurrent: false,
            cancel_superseded: false,
        }
    }

    /// Rejects a submit while a previous one is still in flight.
    #[must_use]
    pub const fn with_reject_concurrent(mut self, reject: bool) -> Self {
        self.reject_concurrent = reject;
        self
    }

    /// Cancels the previous completion when a new submit supersedes it.
    #[must_use]
    pub const fn with_cancel_superseded(mut self, cancel: bool) -> Self {
        self.cancel_superseded = cancel;
        self
    }

    /// Current login mode.
    #[must_use]
    pub const fn mode(&self) -> LoginMode {
        self.mode
    }

    /// Authenticating while at least one completion is pending.
    #[must_use]
    pub fn phase(&self) -> LoginPhase {
        if self.in_flight.is_empty() {
            LoginPhase::Idle
        } else {
            LoginPhase::Authenticating
        }
    }

    /// Result of the last [`Self::validate_fields`].
    #[must_use]
    pub const fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Profile applied by the last completed sign-in.
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Pending completion handles, oldest first.
    #[must_use]
    pub fn in_flight(&self) -> &[TimerHandle] {
        &self.in_flight
    }

    /// Switches mode, updates toggles, label and pre-filled email, then revalidates.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if a form element is absent; the
    /// form is left untouched in that case.
    pub fn set_mode(
        &mut self,
        view: &mut dyn PresentationPort,
        mode: LoginMode,
    ) -> Result<(), ViewError> {
        let driver = view.require(login::DRIVER_TOGGLE)?;
        let admin = view.require(login::ADMIN_TOGGLE)?;
        let label = view.require(login::SUBMIT_LABEL)?;
        let email = view.require(login::EMAIL)?;
        view.require(login::PASSWORD)?;
        view.require(login::SUBMIT)?;

        view.set_class(driver, ACTIVE, mode == LoginMode::Driver);
        view.set_class(admin, ACTIVE, mode == LoginMode::Admin);
        view.set_text(label, mode.submit_label());
        view.set_value(email, mode.default_email());

        self.mode = mode;
        debug!(%mode, "Login mode set");
        self.validate_fields(view)?;
        Ok(())
    }

    /// Enables the submit button iff both trimmed credentials are non-empty.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if an input or the button is absent.
    pub fn validate_fields(&mut self, view: &mut dyn PresentationPort) -> Result<bool, ViewError> {
        let email = view.require(login::EMAIL)?;
        let password = view.require(login::PASSWORD)?;
        let button = view.require(login::SUBMIT)?;

        let complete = credentials_complete(
            &view.read_trimmed_value(email),
            &view.read_trimmed_value(password),
        );
        view.set_disabled(button, !complete);
        self.submit_enabled = complete;
        Ok(complete)
    }

    /// Dims the button, shows the in-progress label and schedules completion.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the button or its label is absent.
    pub fn submit(
        &mut self,
        view: &mut dyn PresentationPort,
        scheduler: &mut dyn SchedulerPort,
    ) -> Result<SubmitOutcome, ViewError> {
        if self.reject_concurrent && !self.in_flight.is_empty() {
            warn!(in_flight = self.in_flight.len(), "Sign-in already in flight");
            return Ok(SubmitOutcome::Rejected);
        }

        let button = view.require(login::SUBMIT)?;
        let label = view.require(login::SUBMIT_LABEL)?;

        if self.cancel_superseded {
            self.cancel_pending(view, scheduler)?;
        }

        view.set_opacity(button, Some(SUBMITTING_OPACITY));
        view.set_interactive(button, false);
        view.set_text(label, SIGNING_IN_LABEL);

        let handle = scheduler.schedule_after(self.latency, DeferredTask::CompleteLogin);
        self.in_flight.push(handle);
        info!(mode = %self.mode, %handle, "Signing in");
        Ok(SubmitOutcome::Scheduled(handle))
    }

    /// Finishes the oldest pending sign-in with the mode current at fire time.
    ///
    /// Restores the button, applies the profile to home and settings and
    /// navigates home. The fired completion leaves `in_flight` even when the
    /// view cannot take the profile.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if any target is absent; nothing is
    /// applied to the view in that case.
    pub fn complete(
        &mut self,
        view: &mut dyn PresentationPort,
        router: &mut ScreenRouter,
    ) -> Result<Profile, ViewError> {
        if !self.in_flight.is_empty() {
            self.in_flight.remove(0);
        }

        router.preflight(view, ScreenId::Home)?;
        let targets = ProfileTargets::resolve(view)?;
        let profile = Profile::for_mode(self.mode);

        view.set_opacity(targets.button, None);
        view.set_interactive(targets.button, true);

        view.set_text(targets.greeting, profile.greeting);
        view.set_text(targets.home_name, profile.display_name);
        view.set_text(targets.home_avatar, profile.avatar_initials);
        view.set_visible(targets.banner, profile.shows_admin_banner());
        view.set_visible(targets.stats, profile.shows_driver_stats());
        view.set_text(targets.settings_name, profile.display_name);
        view.set_text(targets.settings_email, profile.email);
        view.set_text(targets.settings_role, profile.role_label);
        view.set_text(targets.settings_avatar, profile.avatar_initials);

        view.set_text(targets.label, self.mode.submit_label());

        self.profile = Some(profile.clone());
        info!(mode = %self.mode, name = profile.display_name, "Signed in");

        router.navigate(view, ScreenId::Home)?;
        Ok(profile)
    }

    /// Cancels every pending completion and puts the button back to rest.
    /// Returns how many were cancelled.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the button or its label is
    /// absent; nothing is cancelled in that case.
    pub fn cancel_pending(
        &mut self,
        view: &mut dyn PresentationPort,
        scheduler: &mut dyn SchedulerPort,
    ) -> Result<usize, ViewError> {
        if self.in_flight.is_empty() {
            return Ok(0);
        }

        let button = view.require(login::SUBMIT)?;
        let label = view.require(login::SUBMIT_LABEL)?;

        let cancelled = self
            .in_flight
            .drain(..)
            .filter(|handle| scheduler.cancel(*handle))
            .count();

        view.set_opacity(button, None);
        view.set_interactive(button, true);
        view.set_text(label, self.mode.submit_label());
        debug!(cancelled, "Pending sign-in cancelled");
        Ok(cancelled)
    }

    /// Forgets the signed-in profile.
    pub fn end_session(&mut self) {
        self.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scheduler::TimerQueue;
    use crate::infrastructure::view::{Element, ViewTree, build_shell_view, demo_packages, demo_settings};
    use test_case::test_case;

    const LATENCY: Duration = Duration::from_millis(900);

    fn setup() -> (LoginController, ViewTree, TimerQueue, ScreenRouter) {
        (
            LoginController::new(LATENCY),
            build_shell_view(&demo_packages(), &demo_settings()),
            TimerQueue::new(),
            ScreenRouter::new(),
        )
    }

    fn el<'a>(view: &'a ViewTree, id: &str) -> &'a Element {
        view.by_id(id).unwrap()
    }

    fn fill(view: &mut ViewTree, email: &str, password: &str) {
        let e = view.get_element(login::EMAIL).unwrap();
        view.set_value(e, email);
        let p = view.get_element(login::PASSWORD).unwrap();
        view.set_value(p, password);
    }

    fn run_submit(mode: LoginMode) -> (LoginController, ViewTree, ScreenRouter, Profile) {
        let (mut ctl, mut view, mut timers, mut router) = setup();
        ctl.set_mode(&mut view, mode).unwrap();
        fill(&mut view, mode.default_email(), "secret");
        ctl.validate_fields(&mut view).unwrap();

        ctl.submit(&mut view, &mut timers).unwrap();
        assert!(timers.advance(Duration::from_millis(899)).is_empty());
        assert_eq!(router.current(), ScreenId::Login);

        let fired = timers.advance(Duration::from_millis(1));
        assert_eq!(fired, vec![DeferredTask::CompleteLogin]);
        let profile = ctl.complete(&mut view, &mut router).unwrap();
        (ctl, view, router, profile)
    }

    #[test]
    fn test_set_mode_round_trip_restores_form() {
        let (mut ctl, mut view, _, _) = setup();
        ctl.set_mode(&mut view, LoginMode::Driver).unwrap();
        let before = view.clone();

        ctl.set_mode(&mut view, LoginMode::Admin).unwrap();
        assert!(el(&view, login::ADMIN_TOGGLE).has_class(ACTIVE));
        assert!(!el(&view, login::DRIVER_TOGGLE).has_class(ACTIVE));
        assert_eq!(el(&view, login::SUBMIT_LABEL).text(), "Sign In as Admin");
        assert_eq!(el(&view, login::EMAIL).value(), "admin@routeoptimize.com");

        ctl.set_mode(&mut view, LoginMode::Driver).unwrap();
        assert_eq!(view, before);
        assert_eq!(ctl.mode(), LoginMode::Driver);
    }

    #[test_case("a@b.com", "x", true ; "both_present")]
    #[test_case("", "x", false ; "missing_email")]
    #[test_case("a@b.com", "", false ; "missing_password")]
    #[test_case("  ", "  ", false ; "whitespace_only")]
    fn test_validate_fields_gates_button(email: &str, password: &str, enabled: bool) {
        let (mut ctl, mut view, _, _) = setup();
        fill(&mut view, email, password);

        assert_eq!(ctl.validate_fields(&mut view).unwrap(), enabled);
        assert_eq!(el(&view, login::SUBMIT).is_disabled(), !enabled);
        assert_eq!(ctl.is_submit_enabled(), enabled);
    }

    #[test]
    fn test_set_mode_revalidates() {
        let (mut ctl, mut view, _, _) = setup();
        fill(&mut view, "", "pw");
        ctl.validate_fields(&mut view).unwrap();
        assert!(!ctl.is_submit_enabled());

        ctl.set_mode(&mut view, LoginMode::Admin).unwrap();

        assert!(ctl.is_submit_enabled());
        assert!(!el(&view, login::SUBMIT).is_disabled());
    }

    #[test]
    fn test_submit_dims_button_immediately() {
        let (mut ctl, mut view, mut timers, _) = setup();

        let outcome = ctl.submit(&mut view, &mut timers).unwrap();

        assert!(outcome.is_scheduled());
        let button = el(&view, login::SUBMIT);
        assert_eq!(button.opacity(), Some(SUBMITTING_OPACITY));
        assert!(!button.is_interactive());
        assert_eq!(el(&view, login::SUBMIT_LABEL).text(), SIGNING_IN_LABEL);
        assert_eq!(ctl.phase(), LoginPhase::Authenticating);
    }

    #[test]
    fn test_admin_submit_completes_after_latency() {
        let (ctl, view, router, profile) = run_submit(LoginMode::Admin);

        assert_eq!(profile, Profile::ADMIN);
        assert_eq!(router.current(), ScreenId::Home);
        assert_eq!(el(&view, home::GREETING).text(), "Welcome back,");
        assert_eq!(el(&view, home::NAME).text(), "Admin User");
        assert_eq!(el(&view, home::AVATAR).text(), "AU");
        assert!(el(&view, home::ADMIN_BANNER).is_visible());
        assert!(!el(&view, home::DRIVER_STATS).is_visible());
        assert_eq!(el(&view, settings::ROLE).text(), "Admin · Fleet Manager");
        assert_eq!(el(&view, login::SUBMIT_LABEL).text(), "Sign In as Admin");
        assert_eq!(el(&view, login::SUBMIT).opacity(), None);
        assert!(el(&view, login::SUBMIT).is_interactive());
        assert_eq!(ctl.phase(), LoginPhase::Idle);
    }

    #[test]
    fn test_driver_submit_completes_after_latency() {
        let (ctl, view, router, profile) = run_submit(LoginMode::Driver);

        assert_eq!(profile, Profile::DRIVER);
        assert_eq!(router.current(), ScreenId::Home);
        assert_eq!(el(&view, home::GREETING).text(), "Good morning,");
        assert_eq!(el(&view, home::NAME).text(), "John Driver");
        assert_eq!(el(&view, home::AVATAR).text(), "JD");
        assert!(!el(&view, home::ADMIN_BANNER).is_visible());
        assert!(el(&view, home::DRIVER_STATS).is_visible());
        assert_eq!(el(&view, settings::EMAIL).text(), "john.driver@example.com");
        assert_eq!(ctl.profile(), Some(&Profile::DRIVER));
    }

    #[test]
    fn test_completion_uses_mode_at_fire_time() {
        let (mut ctl, mut view, mut timers, mut router) = setup();
        ctl.submit(&mut view, &mut timers).unwrap();
        ctl.set_mode(&mut view, LoginMode::Admin).unwrap();

        timers.advance(LATENCY);
        let profile = ctl.complete(&mut view, &mut router).unwrap();

        assert_eq!(profile, Profile::ADMIN);
    }

    #[test]
    fn test_concurrent_submit_is_allowed_by_default() {
        let (mut ctl, mut view, mut timers, _) = setup();

        ctl.submit(&mut view, &mut timers).unwrap();
        let second = ctl.submit(&mut view, &mut timers).unwrap();

        assert!(second.is_scheduled());
        assert_eq!(timers.pending(), 2);
        assert_eq!(ctl.in_flight().len(), 2);
    }

    #[test]
    fn test_concurrent_submit_rejected_when_guarded() {
        let (ctl, mut view, mut timers, _) = setup();
        let mut ctl = ctl.with_reject_concurrent(true);

        ctl.submit(&mut view, &mut timers).unwrap();
        let second = ctl.submit(&mut view, &mut timers).unwrap();

        assert_eq!(second, SubmitOutcome::Rejected);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_superseded_submit_is_cancelled() {
        let (ctl, mut view, mut timers, _) = setup();
        let mut ctl = ctl.with_cancel_superseded(true);

        let first = ctl.submit(&mut view, &mut timers).unwrap();
        timers.advance(Duration::from_millis(500));
        ctl.submit(&mut view, &mut timers).unwrap();

        let SubmitOutcome::Scheduled(first) = first else {
            panic!("first submit should be scheduled");
        };
        assert!(!timers.is_pending(first));
        assert_eq!(timers.pending(), 1);
        assert!(timers.advance(Duration::from_millis(400)).is_empty());
    }

    #[test]
    fn test_complete_without_home_screen_applies_nothing() {
        let (mut ctl, mut view, mut timers, _) = setup();
        ctl.submit(&mut view, &mut timers).unwrap();
        let mut router = ScreenRouter::new();
        let mut bare = ViewTree::new();

        assert!(ctl.complete(&mut bare, &mut router).is_err());
        assert!(bare.is_empty());
        assert_eq!(ctl.phase(), LoginPhase::Idle);
        assert!(ctl.in_flight().is_empty());
    }

    #[test]
    fn test_cancel_pending_restores_button() {
        let (mut ctl, mut view, mut timers, _) = setup();
        ctl.set_mode(&mut view, LoginMode::Admin).unwrap();
        ctl.submit(&mut view, &mut timers).unwrap();

        assert_eq!(ctl.cancel_pending(&mut view, &mut timers).unwrap(), 1);

        let button = view.by_id(login::SUBMIT).unwrap();
        assert_eq!(button.opacity(), None);
        assert!(button.is_interactive());
        assert_eq!(view.by_id(login::SUBMIT_LABEL).unwrap().text(), "Sign In as Admin");
        assert_eq!(ctl.phase(), LoginPhase::Idle);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_cancel_pending_with_nothing_in_flight_needs_no_view() {
        let (mut ctl, _, mut timers, _) = setup();
        let mut bare = ViewTree::new();

        assert_eq!(ctl.cancel_pending(&mut bare, &mut timers).unwrap(), 0);
    }
}
