//! Unified error handling for aocgen-core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single `AocgenResult` surface, with categories and user-actionable
//! suggestions threaded through from the layer that produced the error.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for aocgen-core operations.
#[derive(Debug, Error, Clone)]
pub enum AocgenError {
    /// Errors from the domain layer (argument and layout validation).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl AocgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in aocgen".into(),
                "Please report it with the full command line you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type AocgenResult<T> = Result<T, AocgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_day_is_a_validation_error() {
        let err: AocgenError = DomainError::InvalidDay { value: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "invalid argument DAY: x");
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: AocgenError = ApplicationError::FilesystemError {
            path: "input/5.txt".into(),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn suggestions_are_never_empty() {
        let errs: Vec<AocgenError> = vec![
            DomainError::InvalidDay { value: "x".into() }.into(),
            DomainError::InvalidLayout {
                reason: "abs".into(),
            }
            .into(),
            ApplicationError::RenderingFailed {
                reason: "left".into(),
            }
            .into(),
            AocgenError::Internal {
                message: "bug".into(),
            },
        ];
        for err in errs {
            assert!(!err.suggestions().is_empty(), "no suggestions for {err}");
        }
    }
}
