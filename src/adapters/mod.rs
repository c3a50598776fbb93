// Adapters layer: concrete record sources and chunk resolvers standing in for the CMS.

pub mod builtin;
pub mod chunks;
pub mod file;
pub mod memory;

pub use chunks::ChunkLibrary;
pub use file::FileContentTypeSource;
pub use memory::InMemoryContentTypeSource;
