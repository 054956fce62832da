//! Deferred task scheduling port.

use std::fmt;
use std::time::Duration;

/// Work carried by a timer until it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Finish the simulated sign-in.
    CompleteLogin,
    /// Restore the arrival button.
    RevertArrival,
}

impl fmt::Display for DeferredTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompleteLogin => write!(f, "complete-login"),
            Self::RevertArrival => write!(f, "revert-arrival"),
        }
    }
}

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps a raw timer id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Port for delayed execution.
///
/// The host event loop drives time through [`SchedulerPort::advance`]; fired
/// tasks are returned to the caller for dispatch.
pub trait SchedulerPort: Send {
    /// Schedules `task` to fire once `delay` has elapsed.
    fn schedule_after(&mut self, delay: Duration, task: DeferredTask) -> TimerHandle;

    /// Cancels a pending task. Returns `false` if it already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Moves the clock forward and returns the tasks that became due, in due order.
    fn advance(&mut self, elapsed: Duration) -> Vec<DeferredTask>;

    /// Number of tasks still pending.
    fn pending(&self) -> usize;
}
