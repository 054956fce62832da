//! Virtual-clock timer queue.

use std::time::Duration;

use tracing::trace;

use crate::domain::ports::{DeferredTask, SchedulerPort, TimerHandle};

#[derive(Debug, Clone)]
struct Entry {
    handle: TimerHandle,
    due: Duration,
    task: DeferredTask,
}

/// Deterministic scheduler driven by explicit clock advances.
///
/// The clock only moves when [`SchedulerPort::advance`] is called, so tests
/// control time exactly and the event loop feeds it real elapsed time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Creates an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }
}

impl SchedulerPort for TimerQueue {
    fn schedule_after(&mut self, delay: Duration, task: DeferredTask) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        let due = self.now.saturating_add(delay);
        trace!(%handle, %task, delay_ms = delay.as_millis(), "Timer scheduled");
        self.entries.push(Entry { handle, due, task });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let cancelled = self.entries.len() != before;
        if cancelled {
            trace!(%handle, "Timer cancelled");
        }
        cancelled
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<DeferredTask> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let (mut due, pending): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = pending;

        due.sort_by_key(|e| (e.due, e.handle));
        due.into_iter()
            .map(|e| {
                trace!(handle = %e.handle, task = %e.task, "Timer fired");
                e.task
            })
            .collect()
    }

    fn pending(&self) -> usize {
        self.entries.len()
    }
}
