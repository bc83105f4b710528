//! Use cases over the domain: locating templates, rendering them for every
//! configured file and inserting the method template at the cursor.
//!
//! Nothing here parses signatures; that is `crate::domain`. File access goes
//! through [`ports`] so the service can run against memory or disk.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Editor, FileStore};
pub use services::{METHOD_TEMPLATE_OFFSET, MethodService, RenderedFile};
