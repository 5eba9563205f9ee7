//! The default action: scaffold one day.
//!
//! Responsibility: validate the day argument, assemble the adapters, call
//! the core scaffold service, and display results.  No templating or path
//! logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use aocgen_adapters::{LocalFilesystem, SimpleRenderer, templates};
use aocgen_core::{
    application::ScaffoldService,
    domain::{Day, WriteMode},
    error::AocgenError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the scaffold action.
///
/// Dispatch sequence:
/// 1. Validate the DAY argument (before any file I/O)
/// 2. Resolve layout, year, and root from flags + config
/// 3. Plan; early-exit if `--dry-run`
/// 4. Apply via `ScaffoldService`
/// 5. Print the report and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Argument validation comes first; a bad DAY must never touch disk.
    let day = parse_day(args.day.as_deref())?;

    // 2. Resolve where and what to generate.
    let layout = config.layout().map_err(CliError::Core)?;
    let year = args.year.unwrap_or(config.puzzle.year);
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));

    debug!(%day, year, root = %root.display(), "arguments resolved");

    // 3. Assemble adapters and service.
    let service = ScaffoldService::new(
        templates::resolve(),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 4. Dry run: render everything, write nothing.
    if args.dry_run {
        let plan = service
            .plan(day, &layout, year, &root)
            .map_err(CliError::Core)?;

        output.info(&format!("Dry run: would write under {}", root.display()))?;
        for file in plan.files() {
            let verb = match file.mode {
                WriteMode::Overwrite => "write",
                WriteMode::CreateIfMissing => "touch",
            };
            output.print(&format!("  {verb:<5} {}", file.path.display()))?;
        }
        return Ok(());
    }

    // 5. Generate.
    if output.format() != OutputFormat::Json {
        output.header(&format!("Scaffolding day {day}..."))?;
    }
    info!(%day, "generate started");

    let report = service
        .generate(day, &layout, year, &root)
        .map_err(CliError::Core)?;

    info!(%day, "generate completed");

    // 6. Report.
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            CliError::Core(AocgenError::Internal {
                message: format!("report serialisation failed: {e}"),
            })
        })?;
        println!("{json}");
        return Ok(());
    }

    output.success(&format!("{} written", report.stub.display()))?;
    output.success(&format!(
        "{} regenerated ({} days registered)",
        report.aggregator.display(),
        report.days_registered
    ))?;
    if report.fixture_created {
        output.success(&format!("{} created (empty)", report.fixture.display()))?;
    } else {
        output.info(&format!(
            "{} already exists, left untouched",
            report.fixture.display()
        ))?;
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  Paste your puzzle input into {}",
            report.fixture.display()
        ))?;
        output.print(&format!(
            "  Implement part_1 and part_2 in {}",
            report.stub.display()
        ))?;
    }

    Ok(())
}

/// Validate the raw DAY argument.
///
/// `None` (no positional given) and non-integer input are the two documented
/// fatal diagnostics; both happen before any adapter is even constructed.
fn parse_day(raw: Option<&str>) -> CliResult<Day> {
    let raw = raw.ok_or(CliError::MissingDay)?;
    raw.parse::<Day>().map_err(|_| CliError::InvalidDay {
        value: raw.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
