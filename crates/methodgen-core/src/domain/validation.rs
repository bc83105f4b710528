use std::collections::HashSet;

use crate::domain::{DomainError, GeneratorSettings};

pub struct DomainValidator;

impl DomainValidator {
    /// The prompt rejects empty input upstream; this guards direct callers.
    pub fn validate_signature(raw: &str) -> Result<(), DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptySignature);
        }
        Ok(())
    }

    /// Template names must be plain, unique file names so that every
    /// per-file task writes a distinct target.
    pub fn validate_settings(settings: &GeneratorSettings) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        for name in &settings.template_names {
            Self::validate_template_name(name)?;
            if !seen.insert(name.as_str()) {
                return Err(DomainError::DuplicateTemplateName { name: name.clone() });
            }
        }

        if let Some(method) = &settings.method_template {
            Self::validate_template_name(method)?;
        }

        Ok(())
    }

    fn validate_template_name(name: &str) -> Result<(), DomainError> {
        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name == "." || name == ".." {
            Some("name cannot be a relative directory")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidTemplateName {
                name: name.into(),
                reason: reason.into(),
            }),
            None => Ok(()),
        }
    }
}
