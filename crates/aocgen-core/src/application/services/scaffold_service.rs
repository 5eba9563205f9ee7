//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Load the stub and aggregator templates
//! 2. Render both with the day's substitution context (the plan)
//! 3. Write the plan to the filesystem (the apply)
//!
//! Planning performs no I/O, so every validation and rendering failure
//! happens before a single byte hits the disk.  Applying is deliberately
//! not transactional: the tool is single-operator and interactive, and a
//! kill mid-apply leaving the stub without a regenerated aggregator is an
//! accepted risk — re-running the same day repairs it.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateSource},
    domain::{Day, Layout, PlannedFile, RenderContext, ScaffoldPlan, WriteMode},
    domain::layout::slash_path,
    error::AocgenResult,
};

/// What one generator run produced, for display and `--output-format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// The day that was scaffolded.
    pub day: i64,
    /// Relative path of the written stub.
    pub stub: std::path::PathBuf,
    /// Relative path of the regenerated aggregator.
    pub aggregator: std::path::PathBuf,
    /// Relative path of the input fixture.
    pub fixture: std::path::PathBuf,
    /// `true` if the fixture did not exist and was created empty.
    pub fixture_created: bool,
    /// How many days the aggregator now registers (`1..=D`).
    pub days_registered: u64,
}

/// Main scaffolding service.
///
/// Orchestrates template loading, rendering, and writing through the three
/// driven ports.
pub struct ScaffoldService {
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        templates: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Scaffold one day: plan, then apply.
    ///
    /// This is the main use case.  `root` anchors every relative path in
    /// `layout`; `year` only affects the documentation URL in the stub.
    #[instrument(skip_all, fields(day = %day, root = %root.display()))]
    pub fn generate(
        &self,
        day: Day,
        layout: &Layout,
        year: u16,
        root: &Path,
    ) -> AocgenResult<GenerateReport> {
        let plan = self.plan(day, layout, year, root)?;
        self.apply(&plan)
    }

    /// Render everything into a [`ScaffoldPlan`] without touching the disk.
    ///
    /// Exposed separately so callers can preview (`--dry-run`) exactly what
    /// [`Self::apply`] would write.
    pub fn plan(
        &self,
        day: Day,
        layout: &Layout,
        year: u16,
        root: &Path,
    ) -> AocgenResult<ScaffoldPlan> {
        let stub_template = self.templates.stub()?;
        let aggregator_template = self.templates.aggregator()?;

        let stub_path = layout.stub_path(day);
        let stub_context = RenderContext::new()
            .with("DAY", day.to_string())
            .with("YEAR", year.to_string())
            .with("STUB_PATH", slash_path(&stub_path))
            .with("INPUT_PATH", layout.fixture_include_path(day));
        let stub = self.renderer.render(&stub_template, &stub_context)?;

        // The aggregator is a pure function of D: one declaration line and
        // one registration line per day in 1..=D, ascending, regardless of
        // which stub files exist on disk ("always rebuild forward").
        let modules: Vec<String> = day.registered().map(|d| format!("mod day_{d};")).collect();
        let registry: Vec<String> = day
            .registered()
            .map(|d| format!("        Box::new(day_{d}::Day{d}::new()),"))
            .collect();

        let aggregator_context = RenderContext::new()
            .with("AGGREGATOR_PATH", slash_path(&layout.aggregator_path()))
            .with("MODULES", modules.join("\n"))
            .with("REGISTRY", registry.join("\n"));
        let aggregator = self
            .renderer
            .render(&aggregator_template, &aggregator_context)?;

        debug!(
            stub = %stub_path.display(),
            registered = day.registered_count(),
            "plan rendered"
        );

        Ok(ScaffoldPlan::new(
            root,
            day,
            PlannedFile::overwrite(stub_path, stub),
            PlannedFile::overwrite(layout.aggregator_path(), aggregator),
            PlannedFile::touch(layout.fixture_path(day)),
        ))
    }

    /// Write a plan to the filesystem.
    pub fn apply(&self, plan: &ScaffoldPlan) -> AocgenResult<GenerateReport> {
        let mut fixture_created = false;

        for file in plan.files() {
            let target = plan.resolve(file);

            // Ensure parent exists
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            match file.mode {
                WriteMode::Overwrite => self.filesystem.write_file(&target, &file.content)?,
                WriteMode::CreateIfMissing => {
                    fixture_created = self.filesystem.touch(&target)?;
                }
            }
        }

        let day = plan.day();
        info!(day = %day, "scaffold written");

        Ok(GenerateReport {
            day: day.value(),
            stub: plan.stub.path.clone(),
            aggregator: plan.aggregator.path.clone(),
            fixture: plan.fixture.path.clone(),
            fixture_created,
            days_registered: day.registered_count(),
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
