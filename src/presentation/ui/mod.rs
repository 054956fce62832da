//! UI screens.

mod app;
mod home_screen;
mod login_screen;
mod navigate_screen;
mod packages_screen;
mod settings_screen;
/// Layout and element lookup helpers.
pub mod utils;

pub use app::{App, TerminalShell};
pub use home_screen::HomeScreen;
pub use login_screen::{LoginAction, LoginFocus, LoginScreen};
pub use navigate_screen::NavigateScreen;
pub use packages_screen::{PackagesAction, PackagesScreen};
pub use settings_screen::{SettingsAction, SettingsScreen};
