//! Project layout: where the generated artifacts live.
//!
//! [`Layout`] owns the two directories this tool writes into and derives
//! every artifact path from them, so path construction happens in exactly
//! one place:
//!
//! ```text
//! <root>/src/puzzles/day_<D>.rs   stub (overwritten)
//! <root>/src/puzzles/mod.rs       aggregator (regenerated)
//! <root>/input/<D>.txt            fixture (touched)
//! ```
//!
//! Both directories are validated at construction: they must be relative
//! and must not contain `..` components.  Everything downstream can then
//! join them onto the project root without re-checking.

use std::path::{Component, Path, PathBuf};

use crate::domain::day::Day;
use crate::domain::error::DomainError;

/// Default puzzle-source directory, relative to the project root.
pub const DEFAULT_PUZZLES_DIR: &str = "src/puzzles";

/// Default input-fixture directory, relative to the project root.
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Relative directories the generator writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    puzzles_dir: PathBuf,
    input_dir: PathBuf,
}

impl Layout {
    /// Build a layout from two relative directories.
    pub fn new(
        puzzles_dir: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let puzzles_dir = puzzles_dir.into();
        let input_dir = input_dir.into();

        validate_dir("puzzles directory", &puzzles_dir)?;
        validate_dir("input directory", &input_dir)?;

        Ok(Self {
            puzzles_dir,
            input_dir,
        })
    }

    /// Path of the per-day stub: `<puzzles-dir>/day_<D>.rs`.
    pub fn stub_path(&self, day: Day) -> PathBuf {
        self.puzzles_dir.join(format!("day_{day}.rs"))
    }

    /// Path of the aggregator module: `<puzzles-dir>/mod.rs`.
    pub fn aggregator_path(&self) -> PathBuf {
        self.puzzles_dir.join("mod.rs")
    }

    /// Path of the input fixture: `<input-dir>/<D>.txt`.
    pub fn fixture_path(&self, day: Day) -> PathBuf {
        self.input_dir.join(format!("{day}.txt"))
    }

    /// The `include_str!` argument embedded in the stub: the fixture path
    /// relative to the puzzles directory, always `/`-separated because it is
    /// Rust source text, not an OS path.
    ///
    /// For the default layout and day 5: `../../input/5.txt`.
    pub fn fixture_include_path(&self, day: Day) -> String {
        let ups = self.puzzles_dir.components().count();
        let mut out = String::new();
        for _ in 0..ups {
            out.push_str("../");
        }
        out.push_str(&slash_path(&self.input_dir));
        out.push('/');
        out.push_str(&format!("{day}.txt"));
        out
    }
}

impl Default for Layout {
    fn default() -> Self {
        // The defaults are known-good relative paths; validation cannot fail.
        Self {
            puzzles_dir: PathBuf::from(DEFAULT_PUZZLES_DIR),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
        }
    }
}

/// Render a relative path with `/` separators regardless of platform.
pub fn slash_path(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

fn validate_dir(what: &str, dir: &Path) -> Result<(), DomainError> {
    if dir.as_os_str().is_empty() {
        return Err(DomainError::InvalidLayout {
            reason: format!("{what} is empty"),
        });
    }
    if dir.is_absolute() {
        return Err(DomainError::InvalidLayout {
            reason: format!("{what} '{}' must be relative", dir.display()),
        });
    }
    for component in dir.components() {
        match component {
            Component::Normal(_) => {}
            _ => {
                return Err(DomainError::InvalidLayout {
                    reason: format!(
                        "{what} '{}' must not contain '.' or '..' components",
                        dir.display()
                    ),
                });
            }
        }
    }
    Ok(())
}
