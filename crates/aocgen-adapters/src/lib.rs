//! Infrastructure adapters for aocgen.
//!
//! This crate implements the ports defined in `aocgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use templates::{BuiltinTemplates, FileTemplates};
