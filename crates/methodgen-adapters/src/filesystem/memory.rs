//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use methodgen_core::{
    application::{ApplicationError, ports::FileStore},
    error::MethodgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert_file(path, content);
        self
    }

    /// Seed or overwrite a file.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(path.into(), content.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.get(path).cloned()
    }
}

impl FileStore for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> MethodgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::FileError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, content: &str) -> MethodgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(path))
            .unwrap_or(false)
    }
}
