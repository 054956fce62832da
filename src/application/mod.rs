//! Application layer with controllers, the shell coordinator and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful view controllers.
pub mod services;
/// Shell coordinator.
pub mod shell;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LogoutOutcome, ShellPolicy, SubmitOutcome};
pub use services::{ArrivalFeedback, PackageFilter, ScreenRouter, SettingsToggle};
pub use shell::AppShell;
pub use use_cases::{LoginController, LogoutController};
