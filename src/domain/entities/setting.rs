//! Setting row entity.

/// Behavior attached to a setting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Plain on/off preference.
    Standard,
    /// Theme switch. Only the indicator flips for now.
    DarkMode,
}

/// An independently toggleable preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    element_id: String,
    label: String,
    kind: SettingKind,
    on: bool,
}

impl SettingRow {
    /// Creates a row.
    #[must_use]
    pub fn new(
        element_id: impl Into<String>,
        label: impl Into<String>,
        kind: SettingKind,
        on: bool,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            label: label.into(),
            kind,
            on,
        }
    }

    /// Element id of the row.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Row caption.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Row behavior.
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        self.kind
    }

    /// Whether the indicator is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Flips the indicator, returns the new state.
    pub fn flip(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}
