//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `aocgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::AocgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `aocgen_adapters::filesystem::LocalFilesystem` (production)
/// - `aocgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All methods take absolute or root-joined paths; relative-path handling
/// is the service's job.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AocgenResult<()>;

    /// Write content to a file, truncating any existing file.
    fn write_file(&self, path: &Path, content: &str) -> AocgenResult<()>;

    /// Create an empty file if none exists.  Existing files are left
    /// untouched.  Returns `true` if the file was created.
    fn touch(&self, path: &Path) -> AocgenResult<bool>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by `aocgen_adapters::renderer::SimpleRenderer` (variable
/// substitution).  Implementations must fail, not silently pass through,
/// when a `{{...}}` placeholder survives substitution.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template with the given substitution context.
    fn render(&self, template: &str, context: &RenderContext) -> AocgenResult<String>;
}

/// Port supplying the template texts.
///
/// Implemented by:
/// - `aocgen_adapters::templates::BuiltinTemplates` (embedded defaults)
/// - `aocgen_adapters::templates::FileTemplates` (user overrides on disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// The per-day stub template.
    fn stub(&self) -> AocgenResult<String>;

    /// The aggregator (`mod.rs`) template.
    fn aggregator(&self) -> AocgenResult<String>;
}
