//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `methodgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TextEdit;
use crate::error::MethodgenResult;

/// Port for reading and writing whole files.
///
/// Implemented by:
/// - `methodgen_adapters::filesystem::LocalFilesystem` (production)
/// - `methodgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Per-file generation calls this from several threads at once, hence
/// `Send + Sync`.
#[cfg_attr(test, mockall::automock)]
pub trait FileStore: Send + Sync {
    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> MethodgenResult<String>;

    /// Replace the content of a file.
    fn write(&self, path: &Path, content: &str) -> MethodgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for inserting text into the buffer of an open file.
///
/// Implemented by:
/// - `methodgen_adapters::editor::FileBufferEditor` (edits the file on disk)
#[cfg_attr(test, mockall::automock)]
pub trait Editor: Send + Sync {
    /// Apply all `edits` at once. Positions refer to the buffer before any
    /// of them is applied.
    fn insert(&self, file: &Path, edits: &[TextEdit]) -> MethodgenResult<()>;
}
