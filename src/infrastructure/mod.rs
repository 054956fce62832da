//! Infrastructure layer with configuration and in-memory adapters.

/// Application configuration.
pub mod config;
/// Deferred task scheduling.
pub mod scheduler;
/// In-memory view tree and shell markup.
pub mod view;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use scheduler::TimerQueue;
pub use view::{ViewTree, build_shell_view, demo_packages, demo_settings};
