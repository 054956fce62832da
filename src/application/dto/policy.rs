//! Behavior knobs for the shell.

use std::time::Duration;

/// Default simulated sign-in latency.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(900);
/// Default time the arrival confirmation stays visible.
pub const DEFAULT_ARRIVAL_REVERT: Duration = Duration::from_millis(2000);

/// Timing and re-entrancy policy of an [`AppShell`](crate::application::AppShell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellPolicy {
    /// Delay before a submitted sign-in completes.
    pub login_latency: Duration,
    /// Delay before the arrival confirmation reverts.
    pub arrival_revert: Duration,
    /// Reject a submit while another one is in flight.
    pub reject_concurrent_submit: bool,
    /// Cancel pending completions superseded by logout or a new submit.
    pub cancel_superseded_timers: bool,
    /// Propagate missing-element errors instead of skipping the operation.
    pub strict_elements: bool,
}

impl Default for ShellPolicy {
    fn default() -> Self {
        Self {
            login_latency: DEFAULT_LOGIN_LATENCY,
            arrival_revert: DEFAULT_ARRIVAL_REVERT,
            reject_concurrent_submit: false,
            cancel_superseded_timers: false,
            strict_elements: cfg!(debug_assertions),
        }
    }
}

impl ShellPolicy {
    /// Enables both re-entrancy guards.
    #[must_use]
    pub const fn hardened(mut self) -> Self {
        self.reject_concurrent_submit = true;
        self.cancel_superseded_timers = true;
        self
    }

    /// Sets missing-element strictness.
    #[must_use]
    pub const fn with_strict_elements(mut self, strict: bool) -> Self {
        self.strict_elements = strict;
        self
    }
}
