//! Confirmation port definition.

/// Port for synchronous yes/no prompts.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPort {
    /// Asks the user to confirm, returns the answer.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Confirmation whose answer was collected before the operation ran.
///
/// Event-driven frontends ask first and replay the answer here.
#[derive(Debug, Clone)]
pub struct PresetAnswer {
    answer: bool,
    asked: Option<String>,
}

impl PresetAnswer {
    /// Creates a preset answer.
    #[must_use]
    pub const fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: None,
        }
    }

    /// Returns the prompt that was asked, if any.
    #[must_use]
    pub fn asked(&self) -> Option<&str> {
        self.asked.as_deref()
    }
}

impl ConfirmPort for PresetAnswer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.asked = Some(prompt.to_string());
        self.answer
    }
}
