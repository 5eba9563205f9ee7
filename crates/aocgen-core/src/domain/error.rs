use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The day argument could not be parsed as a base-10 integer.
    #[error("invalid argument DAY: {value}")]
    InvalidDay { value: String },

    /// A layout directory is unusable (absolute, empty, or escaping the root).
    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDay { value } => vec![
                format!("'{}' is not a whole number", value),
                "DAY must be a base-10 integer, e.g. 1, 13, 25".into(),
                "Example: aocgen 5".into(),
            ],
            Self::InvalidLayout { reason } => vec![
                format!("Layout problem: {}", reason),
                "Layout directories must be relative paths inside the project".into(),
                "Check [layout] in your .aocgen.toml".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDay { .. } => ErrorCategory::Validation,
            Self::InvalidLayout { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
