//! Timed arrival confirmation on the navigate screen.

use std::time::Duration;

use tracing::{debug, info};

use crate::domain::elements::navigate::{ARRIVED_ICON, ARRIVED_LABEL, ARRIVED_SELECTOR};
use crate::domain::errors::ViewError;
use crate::domain::ports::{DeferredTask, PresentationPort, SchedulerPort, TimerHandle};

/// Label shown while the arrival is confirmed.
pub const CONFIRMED_LABEL: &str = "✓ Marked Arrived!";
/// Background while confirmed.
pub const SUCCESS_COLOR: &str = "#00a37a";

/// Swaps the arrival button into a confirmation state and reverts it later.
#[derive(Debug, Clone)]
pub struct ArrivalFeedback {
    revert_after: Duration,
    pending: Option<TimerHandle>,
}

impl ArrivalFeedback {
    /// Creates a controller that reverts after `revert_after`.
    #[must_use]
    pub const fn new(revert_after: Duration) -> Self {
        Self {
            revert_after,
            pending: None,
        }
    }

    /// Whether the confirmation is currently shown.
    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.pending.is_some()
    }

    /// Shows the confirmation and schedules the revert.
    ///
    /// A pending revert is cancelled first, so only the latest one fires.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the arrival button is absent.
    pub fn mark_arrived(
        &mut self,
        view: &mut dyn PresentationPort,
        scheduler: &mut dyn SchedulerPort,
    ) -> Result<TimerHandle, ViewError> {
        let button = view.require_first(ARRIVED_SELECTOR)?;

        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
            debug!(%previous, "Restarting arrival confirmation");
        }

        view.set_icon(button, None);
        view.set_text(button, CONFIRMED_LABEL);
        view.set_background(button, Some(SUCCESS_COLOR));

        let handle = scheduler.schedule_after(self.revert_after, DeferredTask::RevertArrival);
        self.pending = Some(handle);
        info!(%handle, "Stop marked arrived");
        Ok(handle)
    }

    /// Restores the resting label, icon and background.
    ///
    /// The fired revert is consumed even when the button is gone.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the arrival button is absent.
    pub fn revert(&mut self, view: &mut dyn PresentationPort) -> Result<(), ViewError> {
        self.pending = None;
        let button = view.require_first(ARRIVED_SELECTOR)?;

        view.set_icon(button, Some(ARRIVED_ICON));
        view.set_text(button, ARRIVED_LABEL);
        view.set_background(button, None);

        debug!("Arrival confirmation reverted");
        Ok(())
    }
}
