//! Package card entity.

use std::fmt;

/// Delivery status of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageStatus {
    /// Out for delivery.
    Active,
    /// Waiting to be loaded.
    Pending,
    /// Delivered.
    Completed,
}

impl PackageStatus {
    /// Returns lowercase status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status tab of the package list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageTab {
    /// Shows active cards.
    #[default]
    Active,
    /// Shows pending cards.
    Pending,
    /// Shows completed cards.
    Completed,
}

impl PackageTab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Completed];

    /// Status a card must have to be listed under this tab.
    #[must_use]
    pub const fn status(self) -> PackageStatus {
        match self {
            Self::Active => PackageStatus::Active,
            Self::Pending => PackageStatus::Pending,
            Self::Completed => PackageStatus::Completed,
        }
    }

    /// Whether a card with `status` belongs under this tab.
    #[must_use]
    pub fn matches(self, status: PackageStatus) -> bool {
        self.status() == status
    }

    /// Element id of the tab control.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("pkg-tab-{}", self.status().as_str())
    }

    /// Tab caption.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// A package in the driver's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCard {
    element_id: String,
    status: PackageStatus,
    tracking: String,
    address: String,
    expanded: bool,
}

impl PackageCard {
    /// Creates a collapsed card.
    #[must_use]
    pub fn new(
        element_id: impl Into<String>,
        status: PackageStatus,
        tracking: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            status,
            tracking: tracking.into(),
            address: address.into(),
            expanded: false,
        }
    }

    /// Element id of the card.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Delivery status.
    #[must_use]
    pub const fn status(&self) -> PackageStatus {
        self.status
    }

    /// Tracking number.
    #[must_use]
    pub fn tracking(&self) -> &str {
        &self.tracking
    }

    /// Delivery address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Whether the detail panel is open.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the detail panel, returns the new state.
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}
