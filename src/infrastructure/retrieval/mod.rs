//! Vector index implementations and the per-domain registry

pub mod embedded;
pub mod in_memory;
pub mod registry;

pub use embedded::EmbeddingVectorIndex;
pub use in_memory::InMemoryVectorIndex;
pub use registry::DomainIndexRegistry;
