//! Login mode and credential rules.

use std::fmt;

/// Default email pre-filled in driver mode.
pub const DRIVER_EMAIL: &str = "john.driver@example.com";
/// Default email pre-filled in admin mode.
pub const ADMIN_EMAIL: &str = "admin@routeoptimize.com";
/// Submit label while authentication is in progress.
pub const SIGNING_IN_LABEL: &str = "Signing in...";

/// Role the user signs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoginMode {
    /// Delivery driver.
    #[default]
    Driver,
    /// Fleet administrator.
    Admin,
}

impl LoginMode {
    /// Label of the submit button in this mode.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Driver => "Sign In as Driver",
            Self::Admin => "Sign In as Admin",
        }
    }

    /// Email pre-filled when switching to this mode.
    #[must_use]
    pub const fn default_email(self) -> &'static str {
        match self {
            Self::Driver => DRIVER_EMAIL,
            Self::Admin => ADMIN_EMAIL,
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Driver => Self::Admin,
            Self::Admin => Self::Driver,
        }
    }
}

impl fmt::Display for LoginMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => write!(f, "driver"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Progress of the simulated sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// Completion scheduled, not yet fired.
    Authenticating,
}

/// Credential input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    /// Email address.
    Email,
    /// Password.
    Password,
}

/// Returns whether both credentials are present after trimming.
#[must_use]
pub fn credentials_complete(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.trim().is_empty()
}
