//! RouteOptimize - terminal shell for the driver and fleet delivery app.
//!
//! This crate coordinates the view state of the app: screen routing, the
//! two-role sign-in flow, package filtering, setting toggles and arrival
//! feedback, over an in-memory element tree drawn with a TUI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing controllers, the shell and DTOs.
pub mod application;
/// Domain layer containing view-state types, errors and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and in-memory adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "routeoptimize";
