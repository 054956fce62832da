mod confirm_port;
mod presentation_port;
mod scheduler_port;

pub use confirm_port::{ConfirmPort, PresetAnswer};
pub use presentation_port::{ElementRef, PresentationPort};
pub use scheduler_port::{DeferredTask, SchedulerPort, TimerHandle};

#[cfg(test)]
pub mod mocks {
    pub use super::confirm_port::MockConfirmPort;
}
