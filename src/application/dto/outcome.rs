//! Results of shell operations.

use crate::domain::ports::TimerHandle;

/// Result of a sign-in request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Completion scheduled.
    Scheduled(TimerHandle),
    /// Submit affordance disabled, nothing happened.
    Blocked,
    /// A sign-in is already in flight and concurrent submits are rejected.
    Rejected,
}

impl SubmitOutcome {
    /// Returns whether a completion was scheduled.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled(_))
    }
}

/// Result of a logout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Confirmed; mode reset and back on the login screen.
    LoggedOut,
    /// Declined or skipped; nothing changed.
    Declined,
}
