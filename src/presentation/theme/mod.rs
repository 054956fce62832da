//! Color theme.

mod adapter;
mod service;

pub use adapter::ColorConverter;
pub use service::{Theme, parse_color};
