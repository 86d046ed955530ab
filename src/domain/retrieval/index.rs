use std::fmt::Debug;

use async_trait::async_trait;

use super::RetrievalHit;
use crate::domain::document::KnowledgeDocument;
use crate::domain::error::DomainError;

/// One domain's semantic search partition.
///
/// Implementations embed and rank however they like; callers only rely on
/// `search` returning at most `k` hits ordered by decreasing similarity.
/// Re-adding the same document id creates a duplicate entry; idempotency is
/// not part of the contract.
#[async_trait]
pub trait VectorIndex: Send + Sync + Debug {
    /// Embed and insert a document's content with its metadata
    async fn add(&self, document: &KnowledgeDocument) -> Result<(), DomainError>;

    /// Top-k similarity search by query text
    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievalHit>, DomainError>;

    /// Number of indexed entries
    async fn len(&self) -> usize;
}
