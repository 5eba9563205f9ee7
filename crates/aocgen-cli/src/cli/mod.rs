//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! The primary invocation is a bare positional: `aocgen <DAY>`.  The few
//! housekeeping subcommands (`init`, `completions`) conflict with it, so a
//! run is either a scaffold or a housekeeping action, never both.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "aocgen",
    bin_name = "aocgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f384} Advent of Code puzzle scaffolding",
    long_about = "aocgen writes a day's solution stub, regenerates the puzzle \
                  aggregator module, and makes sure the input fixture exists.",
    after_help = "EXAMPLES:\n\
        \x20 aocgen 5\n\
        \x20 aocgen 12 --year 2022 --root ../aoc2022\n\
        \x20 aocgen 3 --dry-run\n\
        \x20 aocgen completions bash > /usr/share/bash-completion/completions/aocgen",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available everywhere.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The default action: scaffold a day.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Housekeeping subcommands.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise an aocgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 aocgen init          # write ./.aocgen.toml\n\
            \x20 aocgen init --force  # overwrite an existing one"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 aocgen completions bash > ~/.local/share/bash-completion/completions/aocgen\n\
            \x20 aocgen completions zsh  > ~/.zfunc/_aocgen\n\
            \x20 aocgen completions fish > ~/.config/fish/completions/aocgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate (the bare invocation) ────────────────────────────────────────────

/// Arguments for the default scaffold action.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// The day to scaffold.  Kept as a string; integer parsing is the
    /// command's first validation step, not clap's.
    #[arg(value_name = "DAY", help = "Day number to scaffold")]
    pub day: Option<String>,

    /// Project root all generated paths are anchored to.
    #[arg(
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Puzzle year for the stub's documentation URL.
    #[arg(
        long = "year",
        value_name = "YEAR",
        help = "Advent of Code year for the stub's puzzle URL"
    )]
    pub year: Option<u16>,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `aocgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `aocgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
