//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use aocgen_core::{application::ports::Filesystem, error::AocgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> AocgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AocgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn touch(&self, path: &Path) -> AocgenResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        // create_new fails if the file appeared between the check and the
        // open; treat that the same as "already existed".
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(map_io_error(path, e, "create file")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> aocgen_core::error::AocgenError {
    use aocgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
