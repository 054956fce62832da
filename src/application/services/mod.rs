//! Stateful view controllers.

mod arrival_feedback;
mod package_filter;
mod screen_router;
mod settings_toggle;

pub use arrival_feedback::{ArrivalFeedback, CONFIRMED_LABEL, SUCCESS_COLOR};
pub use package_filter::PackageFilter;
pub use screen_router::ScreenRouter;
pub use settings_toggle::SettingsToggle;
