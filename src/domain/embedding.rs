//! Embedding provider seam

use std::fmt::Debug;

use async_trait::async_trait;

use super::error::DomainError;

/// Produces embedding vectors for text, used by embedding-backed retrieval
/// partitions.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Embed one text into a vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
