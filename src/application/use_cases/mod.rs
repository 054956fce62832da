//! Use case implementations.

mod login_controller;
mod logout_controller;

pub use login_controller::{LoginController, SUBMITTING_OPACITY};
pub use logout_controller::{LOGOUT_PROMPT, LogoutController};
