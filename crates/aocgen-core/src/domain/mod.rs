//! Core domain layer for aocgen.
//!
//! Pure business logic with zero I/O: day parsing, project layout, the
//! rendering context, and the scaffold plan.  All filesystem and template
//! concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: only std + thiserror

pub mod context;
pub mod day;
pub mod error;
pub mod layout;
pub mod plan;

// Re-exports for convenience
pub use context::RenderContext;
pub use day::Day;
pub use error::{DomainError, ErrorCategory};
pub use layout::{DEFAULT_INPUT_DIR, DEFAULT_PUZZLES_DIR, Layout};
pub use plan::{PlannedFile, ScaffoldPlan, WriteMode};

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-module behavior that doesn't belong to a single unit's tests:
    // the layout and day types must agree on how artifact names are formed.

    #[test]
    fn stub_path_uses_day_display() {
        let layout = Layout::default();
        let day: Day = "11".parse().unwrap();
        assert!(
            layout
                .stub_path(day)
                .to_string_lossy()
                .ends_with("day_11.rs")
        );
    }

    #[test]
    fn fixture_and_include_path_agree() {
        let layout = Layout::default();
        let day = Day::new(9);
        let include = layout.fixture_include_path(day);
        let fixture = layout.fixture_path(day);
        assert!(include.ends_with("input/9.txt"));
        assert!(fixture.to_string_lossy().ends_with("9.txt"));
    }

    #[test]
    fn invalid_day_error_carries_raw_input() {
        let err = "day5".parse::<Day>().unwrap_err();
        assert_eq!(err.to_string(), "invalid argument DAY: day5");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
