mod confirm_dialog;
mod input;
mod nav_bar;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use input::TextInput;
pub use nav_bar::{NAV_ITEMS, NavBar, screen_for_key};
pub use status_bar::{StatusBar, StatusLevel};
