//! Errors raised by the `methodgen` binary and how they reach the user.
//!
//! Every failure maps to an [`ErrorCategory`], which fixes the exit code,
//! and carries a few suggestions printed under the message.

use std::error::Error as StdError;
use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use methodgen_core::error::MethodgenError;

pub use methodgen_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

type Cause = Box<dyn StdError + Send + Sync>;

const VERBOSE_HINT: &str = "Use -v / --verbose for more details.";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// A config file could not be read, merged or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Generation failed: {0}")]
    Core(#[from] MethodgenError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Empty answer to the signature prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// The binary was built without an optional cargo feature.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Run 'methodgen init' to write a default config".into(),
                "Run 'methodgen config list' to see the merged settings".into(),
            ],
            Self::IoError { .. } => vec!["Check that the file exists and is writable".into()],
            Self::Cancelled => vec!["No files were changed".into()],
            Self::FeatureNotAvailable { feature } => vec![
                format!("This build was compiled without the '{feature}' feature"),
                format!("Pass the value with a flag, or reinstall with --features {feature}"),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// `2` user error, `3` not found, `4` configuration, `1` anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// `false` for errors that end the run without a message.
    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.source(), |err| (*err).source())
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = format!(
            "\n{} {}\n\n  {}\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );
        if verbose {
            for cause in self.causes() {
                out += &format!("\n  {} {}\n", "\u{2192}".dimmed(), cause.to_string().dimmed());
            }
        }
        out += &render_suggestions(&self.suggestions(), &"Suggestions:".yellow().bold().to_string());
        if !verbose {
            out += &format!("\n{} {}\n", "\u{2139}".blue(), VERBOSE_HINT.dimmed());
        }
        out
    }

    /// [`Self::format_colored`] without ANSI codes, for redirected stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");
        if verbose {
            for cause in self.causes() {
                out += &format!("  Caused by: {cause}\n");
            }
        }
        out += &render_suggestions(&self.suggestions(), "Suggestions:");
        if !verbose {
            out += &format!("\n{VERBOSE_HINT}\n");
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            _ if !self.is_reported() => tracing::debug!("{self}"),
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!("{self}"),
            ErrorCategory::Configuration | ErrorCategory::Internal => tracing::error!("{self}"),
        }
        for cause in self.causes() {
            tracing::debug!(cause = %cause, "caused by");
        }
    }
}

fn render_suggestions(suggestions: &[String], title: &str) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let mut out = format!("\n{title}\n");
    for suggestion in suggestions {
        out += &format!("  {suggestion}\n");
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attaches a context message while converting a foreign error into
/// [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use methodgen_core::{application::ApplicationError, domain::DomainError};

    use super::*;

    fn core(err: impl Into<MethodgenError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn core_suggestions_are_forwarded() {
        let err = core(ApplicationError::TemplateNotFound {
            path: PathBuf::from("/t/template/a.go.tmpl"),
        });
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("/t/template/a.go.tmpl"))
        );
    }

    #[test]
    fn feature_suggestion_names_feature() {
        let err = CliError::FeatureNotAvailable {
            feature: "interactive",
        };
        assert!(err.suggestions().iter().any(|s| s.contains("interactive")));
    }

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
        assert_eq!(core(DomainError::EmptySignature).exit_code(), 2);
        assert_eq!(core(ApplicationError::NoActiveTarget).exit_code(), 2);
        assert_eq!(CliError::Cancelled.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = core(ApplicationError::TemplateNotFound {
            path: PathBuf::from("x"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        let dup = core(DomainError::DuplicateTemplateName { name: "a.go".into() });
        assert_eq!(dup.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let file = core(ApplicationError::FileError {
            path: PathBuf::from("a.go"),
            reason: "No such file".into(),
        });
        assert_eq!(file.exit_code(), 1);
    }

    #[test]
    fn cancelled_is_not_reported() {
        assert!(!CliError::Cancelled.is_reported());
        assert!(core(DomainError::EmptySignature).is_reported());
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::NoActiveTarget);
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--file"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::Cancelled;
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        assert!(err.format_plain(true).contains("Caused by: disk full"));
    }

    #[test]
    fn verbose_output_walks_the_whole_cause_chain() {
        let text = core(DomainError::EmptySignature).format_plain(true);
        assert!(text.contains("Caused by: Domain error: Method signature is empty"));
        assert!(text.contains("Caused by: Method signature is empty\n"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading config"));
    }
}
