//! The error every public core operation returns.
//!
//! Domain errors mean the signature or the settings were unusable.
//! Application errors come from reading templates or writing files.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum MethodgenError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

pub type MethodgenResult<T> = Result<T, MethodgenError>;

/// Coarse grouping used by front ends to pick styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

impl MethodgenError {
    /// Hints shown beneath the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_template_is_not_found() {
        let err: MethodgenError = ApplicationError::TemplateNotFound {
            path: PathBuf::from("/t/a.go.tmpl"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("a.go.tmpl"));
    }

    #[test]
    fn duplicate_name_is_configuration() {
        let err: MethodgenError = DomainError::DuplicateTemplateName { name: "a".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.suggestions().is_empty());
    }
}
