//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed (a placeholder survived substitution).
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A template could not be loaded from its source.
    #[error("template source error: {reason}")]
    TemplateSourceError { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "If you use custom templates, check them for typos in {{...}} markers".into(),
                "Unset AOCGEN_TEMPLATES_DIR to fall back to the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that --root points at your project".into(),
            ],
            Self::TemplateSourceError { reason } => vec![
                format!("Template loading failed: {}", reason),
                "Check the directory AOCGEN_TEMPLATES_DIR points at".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateSourceError { .. } => ErrorCategory::Configuration,
        }
    }
}
