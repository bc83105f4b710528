//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use methodgen_core::{application::ports::FileStore, error::MethodgenResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> MethodgenResult<String> {
        trace!(path = %path.display(), "read");
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, content: &str) -> MethodgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> methodgen_core::error::MethodgenError {
    use methodgen_core::application::ApplicationError;

    ApplicationError::FileError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
