//! Domain error types.

mod view_error;

pub use view_error::ViewError;
