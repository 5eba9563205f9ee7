//! The scaffold plan: every filesystem effect, decided before any I/O.
//!
//! A [`ScaffoldPlan`] is fully rendered and validated in memory; applying
//! it is a dumb walk over three entries.  This is what guarantees that an
//! argument or rendering failure performs zero filesystem writes.

use std::path::{Path, PathBuf};

use crate::domain::day::Day;

/// How a planned file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and replace whatever is there.
    Overwrite,
    /// Create an empty file if absent; existing content is left untouched.
    CreateIfMissing,
}

/// One file the generator will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the plan root.
    pub path: PathBuf,
    /// Rendered content; empty for [`WriteMode::CreateIfMissing`] entries.
    pub content: String,
    pub mode: WriteMode,
}

impl PlannedFile {
    pub fn overwrite(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: WriteMode::Overwrite,
        }
    }

    pub fn touch(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: String::new(),
            mode: WriteMode::CreateIfMissing,
        }
    }
}

/// The three artifacts of one generator run.
///
/// The stub and aggregator are regenerated unconditionally; the fixture is
/// only ever created, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    root: PathBuf,
    day: Day,
    pub stub: PlannedFile,
    pub aggregator: PlannedFile,
    pub fixture: PlannedFile,
}

impl ScaffoldPlan {
    pub fn new(
        root: impl Into<PathBuf>,
        day: Day,
        stub: PlannedFile,
        aggregator: PlannedFile,
        fixture: PlannedFile,
    ) -> Self {
        Self {
            root: root.into(),
            day,
            stub,
            aggregator,
            fixture,
        }
    }

    /// Project root all relative paths are anchored to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The day this plan scaffolds.
    pub fn day(&self) -> Day {
        self.day
    }

    /// The planned files in write order: stub, aggregator, fixture.
    pub fn files(&self) -> [&PlannedFile; 3] {
        [&self.stub, &self.aggregator, &self.fixture]
    }

    /// Absolute (root-joined) path of a planned file.
    pub fn resolve(&self, file: &PlannedFile) -> PathBuf {
        self.root.join(&file.path)
    }
}
