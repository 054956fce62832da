//! Confirmation-gated logout.

use tracing::{debug, info};

use crate::application::dto::LogoutOutcome;
use crate::application::services::ScreenRouter;
use crate::domain::errors::ViewError;
use crate::domain::login::LoginMode;
use crate::domain::ports::{ConfirmPort, PresentationPort, SchedulerPort};
use crate::domain::screen::ScreenId;

use super::LoginController;

/// Question asked before logging out.
pub const LOGOUT_PROMPT: &str = "Log out of RouteOptimize?";

/// Returns the user to the login screen after confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutController {
    cancel_superseded: bool,
}

impl LogoutController {
    /// Creates a controller that leaves pending sign-ins alone.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cancel_superseded: false,
        }
    }

    /// Cancels pending sign-in completions on logout.
    #[must_use]
    pub const fn with_cancel_superseded(mut self, cancel: bool) -> Self {
        self.cancel_superseded = cancel;
        self
    }

    /// Asks for confirmation, then resets the login form to driver mode and
    /// shows the login screen. A declined prompt changes nothing.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the login screen or a form
    /// element is absent; nothing is changed in that case.
    pub fn logout(
        &self,
        view: &mut dyn PresentationPort,
        confirm: &mut dyn ConfirmPort,
        login: &mut LoginController,
        router: &mut ScreenRouter,
        scheduler: &mut dyn SchedulerPort,
    ) -> Result<LogoutOutcome, ViewError> {
        if !confirm.confirm(LOGOUT_PROMPT) {
            debug!("Logout declined");
            return Ok(LogoutOutcome::Declined);
        }

        router.preflight(view, ScreenId::Login)?;

        login.set_mode(view, LoginMode::Driver)?;
        if self.cancel_superseded {
            login.cancel_pending(view, scheduler)?;
        }
        login.end_session();
        router.navigate(view, ScreenId::Login)?;

        info!("Logged out");
        Ok(LogoutOutcome::LoggedOut)
    }
}
