//! Error handling for the aocgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use aocgen_core::error::AocgenError;

// Re-export so callers only need `use crate::error::*`.
pub use aocgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No day argument was supplied.
    #[error("missing argument DAY")]
    MissingDay,

    /// The day argument is not a base-10 integer.
    ///
    /// Also exists as `DomainError::InvalidDay` for library users; this
    /// variant is produced at the CLI boundary so the argument is rejected
    /// before any adapter is constructed.
    #[error("invalid argument DAY: {value}")]
    InvalidDay { value: String },

    /// A configuration file could not be read, parsed, or written.
    #[error("configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `aocgen-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("scaffolding failed: {0}")]
    Core(#[from] AocgenError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingDay => vec![
                "Pass the day number to scaffold".into(),
                "Usage: aocgen <DAY>".into(),
                "Example: aocgen 5".into(),
            ],

            Self::InvalidDay { value } => vec![
                format!("'{}' is not a whole number", value),
                "DAY must be a base-10 integer literal, e.g. 1, 13, 25".into(),
                "Example: aocgen 5".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ./.aocgen.toml".into(),
                "Use 'aocgen init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDay | Self::InvalidDay { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();

        let _ = write!(
            out,
            "\n{} {}\n\n  {}\n",
            "\u{2717}".red().bold(), // ✗
            "error:".red().bold(),
            self.to_string().red()
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(out, "\n  {} {}\n", "\u{2192}".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(out, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = write!(
                out,
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        out
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nerror: {self}\n");

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn missing_day_message_is_the_documented_diagnostic() {
        assert_eq!(CliError::MissingDay.to_string(), "missing argument DAY");
    }

    #[test]
    fn invalid_day_message_carries_the_raw_value() {
        let err = CliError::InvalidDay {
            value: "day5".into(),
        };
        assert_eq!(err.to_string(), "invalid argument DAY: day5");
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_day_suggests_usage() {
        assert!(
            CliError::MissingDay
                .suggestions()
                .iter()
                .any(|s| s.contains("aocgen <DAY>"))
        );
    }

    #[test]
    fn invalid_day_suggestions_mention_integers() {
        let err = CliError::InvalidDay { value: "x".into() };
        assert!(err.suggestions().iter().any(|s| s.contains("base-10")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(CliError::MissingDay.exit_code(), 2);
        assert_eq!(CliError::InvalidDay { value: "x".into() }.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn core_validation_maps_to_user_error() {
        let core: AocgenError =
            aocgen_core::domain::DomainError::InvalidDay { value: "z".into() }.into();
        assert_eq!(CliError::Core(core).exit_code(), 2);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let s = CliError::MissingDay.format_plain(false);
        assert!(s.contains("error: missing argument DAY"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::MissingDay.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
