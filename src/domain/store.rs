//! Document store abstraction: durable documents plus the query audit log

use std::fmt::Debug;

use async_trait::async_trait;

use super::banking::BankingDomain;
use super::document::KnowledgeDocument;
use super::error::DomainError;
use super::query::QueryLogEntry;

/// Durable storage for knowledge documents and the append-only audit log.
///
/// Implementations must tolerate concurrent reads and concurrent appends
/// from simultaneous queries and ingestions.
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Insert a document; fails with `Conflict` on a duplicate id
    async fn save_document(&self, document: &KnowledgeDocument) -> Result<(), DomainError>;

    /// All persisted documents, used once at startup to warm the retrieval
    /// partitions. Order is unspecified but stable within one call.
    async fn load_all_documents(&self) -> Result<Vec<KnowledgeDocument>, DomainError>;

    /// Total document count, optionally restricted to one domain
    async fn count_documents(&self, domain: Option<BankingDomain>) -> Result<u64, DomainError>;

    /// Append one audit row. Callers on the query path treat a failure as
    /// best-effort and must not propagate it.
    async fn append_query_log(&self, entry: &QueryLogEntry) -> Result<(), DomainError>;

    /// Number of audit rows written so far
    async fn query_log_count(&self) -> Result<u64, DomainError>;
}
