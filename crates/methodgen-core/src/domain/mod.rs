//! Core domain layer for methodgen.
//!
//! Pure logic, no I/O. Everything that touches the filesystem or the editor
//! goes through the ports in `crate::application::ports`.
//!
//! - **signature**: raw string → [`Signature`]
//! - **derivation**: values computed from a signature
//! - **placeholder**: `[[TOKEN]]` substitution
//! - **template**: [`RenderContext`] and append-only [`merge`]
//! - **settings**: explicit configuration and editor context
pub mod derivation;
pub mod error;
pub mod placeholder;
pub mod settings;
pub mod signature;
pub mod template;

mod validation;

pub use derivation::{NamedReturnStyle, UNDEFINED_LOGGING_ID};
pub use error::{DomainError, ErrorCategory};
pub use placeholder::{Placeholder, substitute};
pub use settings::{
    CursorPosition, EditorContext, GeneratorSettings, TEMPLATE_EXTENSION, TextEdit,
    split_template_names,
};
pub use signature::{Parameter, ReturnType, Signature};
pub use template::{MethodTemplate, RenderContext, merge};
pub use validation::DomainValidator;
