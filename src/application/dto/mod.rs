//! Data transfer objects for the application layer.

mod outcome;
mod policy;

pub use outcome::{LogoutOutcome, SubmitOutcome};
pub use policy::{DEFAULT_ARRIVAL_REVERT, DEFAULT_LOGIN_LATENCY, ShellPolicy};
