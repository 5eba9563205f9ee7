//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use aocgen_core::application::ports::Filesystem;
use aocgen_core::error::AocgenResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Pre-populate a file, e.g. a fixture with existing content.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> AocgenResult<()> {
        let mut inner = self.inner.write().map_err(poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> AocgenResult<()> {
        let mut inner = self.inner.write().map_err(poisoned(path))?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn touch(&self, path: &Path) -> AocgenResult<bool> {
        let mut inner = self.inner.write().map_err(poisoned(path))?;
        if inner.files.contains_key(path) {
            return Ok(false);
        }
        inner.files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn poisoned<T>(path: &Path) -> impl FnOnce(T) -> aocgen_core::error::AocgenError {
    let path = path.to_path_buf();
    move |_| {
        aocgen_core::application::ApplicationError::FilesystemError {
            path,
            reason: "lock poisoned".into(),
        }
        .into()
    }
}
