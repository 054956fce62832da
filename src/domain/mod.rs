//! Domain layer with core view-state types and port definitions.

/// Element ids, classes and selectors.
pub mod elements;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Login mode and credential rules.
pub mod login;
/// Port definitions.
pub mod ports;
/// Role-scoped profile bundle.
pub mod profile;
/// Screen identifiers and transition direction.
pub mod screen;

pub use entities::{PackageCard, PackageStatus, PackageTab, SettingKind, SettingRow};
pub use errors::ViewError;
pub use login::{CredentialField, LoginMode, LoginPhase};
pub use ports::{ConfirmPort, PresentationPort, SchedulerPort};
pub use profile::{Profile, RoleBlock};
pub use screen::{Direction, SCREEN_ORDER, ScreenId, Transition};
