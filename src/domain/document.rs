//! Knowledge document entity

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::banking::BankingDomain;

/// A knowledge document tagged with a single banking domain.
///
/// Immutable after creation; ingestion persists it and indexes it into the
/// domain's retrieval partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    id: String,
    title: String,
    content: String,
    domain: BankingDomain,
    source: String,
    uploaded_at: DateTime<Utc>,
    metadata: HashMap<String, serde_json::Value>,
}

impl KnowledgeDocument {
    /// Create a new document with a generated id and the current timestamp
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        domain: BankingDomain,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("doc-{}", Uuid::new_v4()),
            title: title.into(),
            content: content.into(),
            domain,
            source: source.into(),
            uploaded_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    /// Set a specific id (used when loading from storage)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_uploaded_at(mut self, uploaded_at: DateTime<Utc>) -> Self {
        self.uploaded_at = uploaded_at;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn domain(&self) -> BankingDomain {
        self.domain
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }

    /// A document with no content cannot be retrieved
    pub fn is_retrievable(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_generated_id() {
        let doc = KnowledgeDocument::new(
            "Letters of Credit Basics",
            "Letters of Credit are payment guarantees.",
            BankingDomain::GlobalTradeFinance,
            "Trade Finance Handbook",
        );

        assert!(doc.id().starts_with("doc-"));
        assert_eq!(doc.domain(), BankingDomain::GlobalTradeFinance);
        assert!(doc.is_retrievable());
    }

    #[test]
    fn test_empty_content_not_retrievable() {
        let doc = KnowledgeDocument::new(
            "Empty",
            "   ",
            BankingDomain::Compliance,
            "nowhere",
        );

        assert!(!doc.is_retrievable());
    }

    #[test]
    fn test_with_id_overrides_generated() {
        let doc = KnowledgeDocument::new(
            "T",
            "c",
            BankingDomain::Compliance,
            "s",
        )
        .with_id("doc-fixed");

        assert_eq!(doc.id(), "doc-fixed");
    }
}
