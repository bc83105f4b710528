//! Signature parsing and template rendering for methodgen.
//!
//! A signature such as `Get(id string) (*User, error)` is split into its
//! name, parameters and results once ([`domain::Signature`]). Every
//! `[[PLACEHOLDER]]` value is derived from that split on demand
//! ([`domain::RenderContext`]). [`application::MethodService`] then appends
//! the rendered templates to the files that sit next to the one being edited.
//!
//! `domain` does no I/O. Files and the editor buffer are reached through the
//! [`application::ports`] traits, which `methodgen-adapters` implements.
//!
//! ```rust
//! use methodgen_core::prelude::*;
//!
//! let ctx = RenderContext::from_raw("Bar(x string) error", NamedReturnStyle::FirstLetter);
//! assert_eq!(
//!     ctx.render("func [[METHODSIGNATURE]] { [[LOGGINGID]] }"),
//!     "func Bar(x string) error { x }"
//! );
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types a front end needs to drive generation.
pub mod prelude {
    pub use crate::application::{
        MethodService,
        ports::{Editor, FileStore},
    };
    pub use crate::domain::{
        CursorPosition, EditorContext, GeneratorSettings, NamedReturnStyle, Placeholder,
        RenderContext, Signature, TextEdit,
    };
    pub use crate::error::{MethodgenError, MethodgenResult};
}
