//! Template sources: embedded defaults plus on-disk overrides.
//!
//! # Template resolution order
//!
//! 1. **`$AOCGEN_TEMPLATES_DIR`** — environment variable override.  Point it
//!    at a directory containing `stub.rs.tmpl` and/or `mod.rs.tmpl`; any
//!    file missing from that directory falls back to the built-in text.
//! 2. **Built-ins** — the embedded templates below.
//!
//! The built-in templates are the contract the rest of the repo is tested
//! against: the stub exposes `part_1`/`part_2` wired to the "no solution
//! yet" sentinel, compiles its fixture in via `include_str!`, and links the
//! puzzle description; the aggregator declares every day module and
//! registers one boxed instance per day.

use std::path::PathBuf;

use aocgen_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::AocgenResult,
};
use tracing::{debug, info};

/// Environment variable naming a template-override directory.
pub const TEMPLATES_DIR_ENV: &str = "AOCGEN_TEMPLATES_DIR";

/// Override file name for the stub template.
pub const STUB_TEMPLATE_FILE: &str = "stub.rs.tmpl";

/// Override file name for the aggregator template.
pub const AGGREGATOR_TEMPLATE_FILE: &str = "mod.rs.tmpl";

/// The per-day solution stub.
///
/// Variables: `STUB_PATH`, `YEAR`, `DAY`, `INPUT_PATH`.
pub const STUB_TEMPLATE: &str = r#"/*
** {{STUB_PATH}}
** https://adventofcode.com/{{YEAR}}/day/{{DAY}}
*/

use crate::types::{Puzzle, PuzzleError, Result, Solution};

const INPUT: &str = include_str!("{{INPUT_PATH}}");

pub struct Day{{DAY}} {}

impl Day{{DAY}} {
    pub fn new() -> Self {
        Self {}
    }
}

impl Puzzle for Day{{DAY}} {
    // [QUESTION]
    fn part_1(&self) -> Result<Solution> {
        Err(PuzzleError::NoSolution.into())
    }

    // [QUESTION]
    fn part_2(&self) -> Result<Solution> {
        Err(PuzzleError::NoSolution.into())
    }
}
"#;

/// The aggregator module listing every day up to `D`.
///
/// Variables: `AGGREGATOR_PATH`, `MODULES`, `REGISTRY`.
pub const AGGREGATOR_TEMPLATE: &str = r#"/*
** {{AGGREGATOR_PATH}}
*/

{{MODULES}}

use crate::types::Puzzle;

pub fn all() -> Vec<Box<dyn Puzzle>> {
    vec![
{{REGISTRY}}
    ]
}
"#;

/// The templates that ship with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for BuiltinTemplates {
    fn stub(&self) -> AocgenResult<String> {
        Ok(STUB_TEMPLATE.to_string())
    }

    fn aggregator(&self) -> AocgenResult<String> {
        Ok(AGGREGATOR_TEMPLATE.to_string())
    }
}

/// Template overrides loaded from a directory on disk.
///
/// Missing override files fall back to the built-ins, so a directory with
/// only `stub.rs.tmpl` customizes the stub while keeping the standard
/// aggregator.
#[derive(Debug, Clone)]
pub struct FileTemplates {
    dir: PathBuf,
}

impl FileTemplates {
    /// Use templates from an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Check `$AOCGEN_TEMPLATES_DIR` for an override directory.
    ///
    /// Returns `None` when the variable is unset or points at a
    /// non-directory; an unreadable file inside an existing directory is an
    /// error at load time, not at discovery time.
    pub fn discover() -> Option<Self> {
        let dir = PathBuf::from(std::env::var_os(TEMPLATES_DIR_ENV)?);
        if !dir.is_dir() {
            debug!(
                path = %dir.display(),
                "{TEMPLATES_DIR_ENV} does not point at a directory, ignoring"
            );
            return None;
        }
        Some(Self::new(dir))
    }

    fn load(&self, file_name: &str, builtin: &str) -> AocgenResult<String> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            debug!(path = %path.display(), "no override file, using builtin template");
            return Ok(builtin.to_string());
        }
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateSourceError {
                reason: format!("cannot read {}: {}", path.display(), e),
            }
            .into()
        })
    }
}

impl TemplateSource for FileTemplates {
    fn stub(&self) -> AocgenResult<String> {
        self.load(STUB_TEMPLATE_FILE, STUB_TEMPLATE)
    }

    fn aggregator(&self) -> AocgenResult<String> {
        self.load(AGGREGATOR_TEMPLATE_FILE, AGGREGATOR_TEMPLATE)
    }
}

/// Pick the template source for this invocation: overrides if discovered,
/// built-ins otherwise.
pub fn resolve() -> Box<dyn TemplateSource> {
    match FileTemplates::discover() {
        Some(templates) => {
            info!(path = %templates.dir.display(), "using template overrides");
            Box::new(templates)
        }
        None => Box::new(BuiltinTemplates::new()),
    }
}
