//! Screen navigation state machine.

use tracing::{debug, info};

use crate::domain::elements::{HIDDEN, SCROLL_SELECTOR, SLIDE_LEFT};
use crate::domain::errors::ViewError;
use crate::domain::ports::PresentationPort;
use crate::domain::screen::{Direction, ScreenId, Transition};

/// Owns the current screen and performs enter/exit transitions.
#[derive(Debug, Clone, Default)]
pub struct ScreenRouter {
    current: ScreenId,
}

impl ScreenRouter {
    /// Creates a router showing the login screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: ScreenId::Login,
        }
    }

    /// Returns the visible screen.
    #[must_use]
    pub const fn current(&self) -> ScreenId {
        self.current
    }

    /// Checks that both screens involved in a move to `target` exist.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` for the first absent screen.
    pub fn preflight(
        &self,
        view: &dyn PresentationPort,
        target: ScreenId,
    ) -> Result<(), ViewError> {
        view.require(&self.current.element_id())?;
        view.require(&target.element_id())?;
        Ok(())
    }

    /// Navigates by screen name. Unknown names are ignored.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if a screen element is absent.
    pub fn navigate_by_name(
        &mut self,
        view: &mut dyn PresentationPort,
        name: &str,
    ) -> Result<Option<Transition>, ViewError> {
        match name.parse::<ScreenId>() {
            Ok(target) => self.navigate(view, target),
            Err(err) => {
                debug!(error = %err, "Ignoring navigation");
                Ok(None)
            }
        }
    }

    /// Moves to `target`. Returns `None` when already there.
    ///
    /// Forward exits slide out, backward exits are hidden without a slide.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if a screen element is absent; no
    /// element is touched in that case.
    pub fn navigate(
        &mut self,
        view: &mut dyn PresentationPort,
        target: ScreenId,
    ) -> Result<Option<Transition>, ViewError> {
        if target == self.current {
            debug!(screen = %target, "Already on screen");
            return Ok(None);
        }

        let prev = view.require(&self.current.element_id())?;
        let next = view.require(&target.element_id())?;
        let direction = Direction::between(self.current, target);

        match direction {
            Direction::Forward => {
                view.add_class(prev, SLIDE_LEFT);
                view.remove_class(prev, HIDDEN);
            }
            Direction::Backward => {
                view.add_class(prev, HIDDEN);
                view.remove_class(prev, SLIDE_LEFT);
            }
        }

        view.remove_class(next, HIDDEN);
        view.remove_class(next, SLIDE_LEFT);

        if let Some(scroll) = view.query_descendant(next, SCROLL_SELECTOR) {
            view.set_scroll_top(scroll, 0);
        }

        let transition = Transition {
            from: self.current,
            to: target,
            direction,
        };
        self.current = target;

        info!(from = %transition.from, to = %transition.to, ?direction, "Navigated");
        Ok(Some(transition))
    }
}
