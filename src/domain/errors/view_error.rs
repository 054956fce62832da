//! Presentation element error types.

use thiserror::Error;

/// Errors raised when the presentation layer does not match the shell markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ViewError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
}

impl ViewError {
    /// Creates missing element error.
    #[must_use]
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// Returns the selector that failed to resolve.
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::MissingElement { selector } => selector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = ViewError::missing("sign-btn");
        assert_eq!(err.to_string(), "required element not found: sign-btn");
        assert_eq!(err.selector(), "sign-btn");
    }
}
