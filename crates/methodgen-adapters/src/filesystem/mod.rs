//! [`FileStore`](methodgen_core::application::FileStore) backends: the real
//! disk and an in-memory map for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
