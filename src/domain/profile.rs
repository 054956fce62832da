//! Role-scoped profile bundle.

use super::login::{ADMIN_EMAIL, DRIVER_EMAIL, LoginMode};

/// Role-specific block shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleBlock {
    /// Fleet overview banner.
    AdminBanner,
    /// Daily delivery stats grid.
    DriverStats,
}

/// Display strings substituted into the home and settings views after sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Home screen greeting.
    pub greeting: &'static str,
    /// Full display name.
    pub display_name: &'static str,
    /// Avatar initials.
    pub avatar_initials: &'static str,
    /// Role or ID line on the settings screen.
    pub role_label: &'static str,
    /// Account email.
    pub email: &'static str,
    /// Block shown on the home screen.
    pub role_block: RoleBlock,
}

impl Profile {
    /// Driver profile.
    pub const DRIVER: Self = Self {
        greeting: "Good morning,",
        display_name: "John Driver",
        avatar_initials: "JD",
        role_label: "Driver ID: DRV-2026-456",
        email: DRIVER_EMAIL,
        role_block: RoleBlock::DriverStats,
    };

    /// Admin profile.
    pub const ADMIN: Self = Self {
        greeting: "Welcome back,",
        display_name: "Admin User",
        avatar_initials: "AU",
        role_label: "Admin · Fleet Manager",
        email: ADMIN_EMAIL,
        role_block: RoleBlock::AdminBanner,
    };

    /// Returns the profile for a login mode.
    #[must_use]
    pub const fn for_mode(mode: LoginMode) -> Self {
        match mode {
            LoginMode::Driver => Self::DRIVER,
            LoginMode::Admin => Self::ADMIN,
        }
    }

    /// Whether the admin banner is visible.
    #[must_use]
    pub fn shows_admin_banner(&self) -> bool {
        self.role_block == RoleBlock::AdminBanner
    }

    /// Whether the driver stats grid is visible.
    #[must_use]
    pub fn shows_driver_stats(&self) -> bool {
        self.role_block == RoleBlock::DriverStats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_exclusive() {
        for mode in [LoginMode::Driver, LoginMode::Admin] {
            let profile = Profile::for_mode(mode);
            assert_ne!(profile.shows_admin_banner(), profile.shows_driver_stats());
            assert_eq!(profile.email, mode.default_email());
        }
    }

    #[test]
    fn test_admin_profile() {
        let profile = Profile::for_mode(LoginMode::Admin);
        assert_eq!(profile.greeting, "Welcome back,");
        assert_eq!(profile.display_name, "Admin User");
        assert_eq!(profile.avatar_initials, "AU");
        assert!(profile.shows_admin_banner());
    }
}
