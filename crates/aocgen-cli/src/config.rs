//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `AOCGEN_*` environment variables (`AOCGEN_PUZZLE__YEAR=2022`)
//! 3. Config file (`--config FILE`, else `./.aocgen.toml`, else the global
//!    config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use aocgen_core::{
    domain::{DEFAULT_INPUT_DIR, DEFAULT_PUZZLES_DIR, Layout},
    error::AocgenResult,
};

/// Year the built-in templates were written against.
pub const DEFAULT_YEAR: u16 = 2021;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where generated files live, relative to the project root.
    pub layout: LayoutConfig,
    /// Puzzle metadata baked into the stub.
    pub puzzle: PuzzleConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub puzzles_dir: String,
    pub input_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig {
                puzzles_dir: DEFAULT_PUZZLES_DIR.into(),
                input_dir: DEFAULT_INPUT_DIR.into(),
            },
            puzzle: PuzzleConfig { year: DEFAULT_YEAR },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to probe the default locations).  A missing
    /// default-location file is fine; an explicitly passed file must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("layout.puzzles_dir", DEFAULT_PUZZLES_DIR)?
            .set_default("layout.input_dir", DEFAULT_INPUT_DIR)?
            .set_default("puzzle.year", i64::from(DEFAULT_YEAR))?
            .set_default("output.no_color", false)?;

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone())),
            None => builder
                .add_source(config::File::from(Self::global_config_path()).required(false))
                .add_source(config::File::with_name(".aocgen").required(false)),
        };

        // Environment wins over files: AOCGEN_LAYOUT__INPUT_DIR, etc.
        builder = builder.add_source(config::Environment::with_prefix("AOCGEN").separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Convert the configured directories into a validated [`Layout`].
    pub fn layout(&self) -> AocgenResult<Layout> {
        Layout::new(&self.layout.puzzles_dir, &self.layout.input_dir).map_err(Into::into)
    }

    /// Path `aocgen init` writes to: a local, per-project file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".aocgen.toml")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.aocgen.toml` in the current directory.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "aocgen", "aocgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".aocgen.toml"))
    }
}
