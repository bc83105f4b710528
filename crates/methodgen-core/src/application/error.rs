//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! signature logic (which never fails).

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A file-dependent operation ran without an open file.
    #[error("No active file: open a file to generate methods next to it")]
    NoActiveTarget,

    /// A template file does not exist.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("File error at {path}: {reason}")]
    FileError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("File store is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoActiveTarget => vec![
                "Pass the file you are editing with --file".into(),
                "Target files are created next to that file".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("Create the template at: {}", path.display()),
                "Try: methodgen templates to see available templates".into(),
                "Check root_directory and template_directory in your config".into(),
            ],
            Self::FileError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Target files must already exist; generated code is appended".into(),
                "Check that you have read and write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoActiveTarget => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FileError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
