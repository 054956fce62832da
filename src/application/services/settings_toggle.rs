//! On/off setting rows.

use tracing::debug;

use crate::domain::elements::{ON, settings};
use crate::domain::entities::{SettingKind, SettingRow};
use crate::domain::errors::ViewError;
use crate::domain::ports::PresentationPort;

/// Flips setting row indicators.
#[derive(Debug, Clone)]
pub struct SettingsToggle {
    rows: Vec<SettingRow>,
}

impl SettingsToggle {
    /// Creates a controller over `rows`.
    #[must_use]
    pub fn new(rows: Vec<SettingRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[SettingRow] {
        &self.rows
    }

    /// Flips the indicator of a row.
    ///
    /// Returns the new state, or `None` when the row has no indicator.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the row element is absent.
    pub fn toggle(
        &mut self,
        view: &mut dyn PresentationPort,
        row_id: &str,
    ) -> Result<Option<bool>, ViewError> {
        let row = view.require(row_id)?;
        let Some(indicator) = view.query_descendant(row, settings::TOGGLE_SELECTOR) else {
            debug!(row = row_id, "Setting row has no indicator");
            return Ok(None);
        };

        let on = view.toggle_class(indicator, ON);
        if let Some(entry) = self.rows.iter_mut().find(|r| r.element_id() == row_id) {
            if entry.is_on() != on {
                entry.flip();
            }
        }

        debug!(row = row_id, on, "Setting toggled");
        Ok(Some(on))
    }

    /// Flips the dark mode row.
    ///
    /// Only the indicator changes; no theme is applied yet.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the row element is absent.
    pub fn toggle_dark_mode(
        &mut self,
        view: &mut dyn PresentationPort,
        row_id: &str,
    ) -> Result<Option<bool>, ViewError> {
        let on = self.toggle(view, row_id)?;
        debug!(row = row_id, ?on, "Dark mode indicator flipped");
        Ok(on)
    }

    /// Dispatches to [`Self::toggle`] or [`Self::toggle_dark_mode`] by row kind.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the row element is absent.
    pub fn activate(
        &mut self,
        view: &mut dyn PresentationPort,
        row_id: &str,
    ) -> Result<Option<bool>, ViewError> {
        let kind = self
            .rows
            .iter()
            .find(|r| r.element_id() == row_id)
            .map_or(SettingKind::Standard, SettingRow::kind);

        match kind {
            SettingKind::Standard => self.toggle(view, row_id),
            SettingKind::DarkMode => self.toggle_dark_mode(view, row_id),
        }
    }
}
