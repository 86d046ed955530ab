//! Retrieval partition abstraction

mod hit;
mod index;

pub use hit::RetrievalHit;
pub use index::VectorIndex;

#[cfg(test)]
pub use index::mock::MockVectorIndex;
