//! Configuration document loader implementations.

mod memory;

pub use memory::InMemoryConfigDocuments;
