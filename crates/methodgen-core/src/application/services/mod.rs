//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate methods for this signature".

pub mod method_service;

pub use method_service::{METHOD_TEMPLATE_OFFSET, MethodService, RenderedFile};
