// ============================================================================
// domain/error.rs
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Signature parsing never fails; these cover the inputs the domain refuses
/// to work with at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Method signature is empty")]
    EmptySignature,

    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },

    #[error("Template name '{name}' is configured more than once")]
    DuplicateTemplateName { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySignature => vec![
                "Type a signature such as: Foo(a string, b int) (int, error)".into(),
            ],
            Self::InvalidTemplateName { name, .. } => vec![
                format!("'{}' must be a plain file name like service.go", name),
                "Template names are comma separated: service.go,logging.go".into(),
            ],
            Self::DuplicateTemplateName { name } => vec![
                format!("Remove the repeated '{}' from template_names", name),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySignature => ErrorCategory::Validation,
            Self::InvalidTemplateName { .. } | Self::DuplicateTemplateName { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
