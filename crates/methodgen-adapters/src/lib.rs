//! Infrastructure adapters for methodgen.
//!
//! This crate implements the ports defined in `methodgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod editor;
pub mod filesystem;
pub mod template_catalog;

// Re-export commonly used adapters
pub use editor::{FileBufferEditor, apply_edits};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_catalog::{TemplateCatalog, TemplateEntry};
