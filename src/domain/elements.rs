//! Element ids, classes and selectors shared by the controllers and the shell markup.

/// Class marking an exited screen slid out to the trailing edge.
pub const SLIDE_LEFT: &str = "slide-left";
/// Class marking a hidden screen.
pub const HIDDEN: &str = "hidden";
/// Class marking the selected toggle or tab.
pub const ACTIVE: &str = "active";
/// Class marking a switched-on indicator.
pub const ON: &str = "on";
/// Class marking an expanded card.
pub const OPEN: &str = "open";
/// Class of every screen container.
pub const SCREEN: &str = "screen";
/// Selector of a screen's scrollable region.
pub const SCROLL_SELECTOR: &str = ".scroll";

/// Login screen elements.
pub mod login {
    /// Driver mode toggle.
    pub const DRIVER_TOGGLE: &str = "driver-toggle";
    /// Admin mode toggle.
    pub const ADMIN_TOGGLE: &str = "admin-toggle";
    /// Email input.
    pub const EMAIL: &str = "login-email";
    /// Password input.
    pub const PASSWORD: &str = "login-pw";
    /// Submit button.
    pub const SUBMIT: &str = "sign-btn";
    /// Submit button label.
    pub const SUBMIT_LABEL: &str = "sign-btn-label";
}

/// Home screen elements.
pub mod home {
    /// Greeting line.
    pub const GREETING: &str = "home-greeting";
    /// Display name.
    pub const NAME: &str = "home-name";
    /// Avatar initials.
    pub const AVATAR: &str = "home-avatar";
    /// Admin fleet banner.
    pub const ADMIN_BANNER: &str = "admin-home-banner";
    /// Driver stats grid.
    pub const DRIVER_STATS: &str = "driver-stats";
}

/// Settings screen elements.
pub mod settings {
    /// Display name.
    pub const NAME: &str = "settings-name";
    /// Account email.
    pub const EMAIL: &str = "settings-email";
    /// Role or driver id line.
    pub const ROLE: &str = "settings-driverid";
    /// Avatar initials.
    pub const AVATAR: &str = "settings-avatar";
    /// Class of a setting row.
    pub const ROW: &str = "setting-row";
    /// Selector of a row's on/off indicator.
    pub const TOGGLE_SELECTOR: &str = ".toggle";
    /// Logout entry.
    pub const LOGOUT: &str = "logout-btn";
}

/// Packages screen elements.
pub mod packages {
    /// Selector of every status tab.
    pub const TAB_SELECTOR: &str = ".pkg-tab";
    /// Selector of every package card.
    pub const CARD_SELECTOR: &str = ".pkg-card";
    /// Search input.
    pub const SEARCH: &str = "pkg-search";
}

/// Navigate screen elements.
pub mod navigate {
    /// Selector of the arrival button.
    pub const ARRIVED_SELECTOR: &str = ".nav-btn-arrived";
    /// Current stop summary.
    pub const STOP: &str = "nav-stop";
    /// Arrival button label at rest.
    pub const ARRIVED_LABEL: &str = "Arrived";
    /// Arrival button icon at rest.
    pub const ARRIVED_ICON: &str = "check";
}
