//! In-memory store for tests and local development

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::store::DocumentStore;
use crate::domain::{BankingDomain, KnowledgeDocument, QueryLogEntry};

#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, KnowledgeDocument>>,
    query_log: RwLock<Vec<QueryLogEntry>>,
    fail_query_log: RwLock<bool>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make audit-log appends fail, to exercise the best-effort path
    #[cfg(test)]
    pub fn set_fail_query_log(&self, fail: bool) {
        *self.fail_query_log.write().unwrap() = fail;
    }

    #[cfg(test)]
    pub fn query_log_entries(&self) -> Vec<QueryLogEntry> {
        self.query_log.read().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn save_document(&self, document: &KnowledgeDocument) -> Result<(), DomainError> {
        let mut documents = self.documents.write().unwrap();

        if documents.contains_key(document.id()) {
            return Err(DomainError::conflict(format!(
                "Document '{}' already exists",
                document.id()
            )));
        }

        documents.insert(document.id().to_string(), document.clone());
        Ok(())
    }

    async fn load_all_documents(&self) -> Result<Vec<KnowledgeDocument>, DomainError> {
        let documents = self.documents.read().unwrap();

        let mut all: Vec<KnowledgeDocument> = documents.values().cloned().collect();
        all.sort_by(|a, b| a.uploaded_at().cmp(&b.uploaded_at()));

        Ok(all)
    }

    async fn count_documents(&self, domain: Option<BankingDomain>) -> Result<u64, DomainError> {
        let documents = self.documents.read().unwrap();

        let count = match domain {
            Some(domain) => documents.values().filter(|d| d.domain() == domain).count(),
            None => documents.len(),
        };

        Ok(count as u64)
    }

    async fn append_query_log(&self, entry: &QueryLogEntry) -> Result<(), DomainError> {
        if *self.fail_query_log.read().unwrap() {
            return Err(DomainError::storage("query log unavailable"));
        }

        self.query_log.write().unwrap().push(entry.clone());
        Ok(())
    }

    async fn query_log_count(&self) -> Result<u64, DomainError> {
        Ok(self.query_log.read().unwrap().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, domain: BankingDomain) -> KnowledgeDocument {
        KnowledgeDocument::new("Title", "Content", domain, "Source").with_id(id)
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = InMemoryDocumentStore::new();
        store
            .save_document(&doc("doc-1", BankingDomain::Compliance))
            .await
            .unwrap();

        let all = store.load_all_documents().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id(), "doc-1");
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let store = InMemoryDocumentStore::new();
        store
            .save_document(&doc("doc-1", BankingDomain::Compliance))
            .await
            .unwrap();

        let result = store
            .save_document(&doc("doc-1", BankingDomain::RiskManagement))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_count_by_domain() {
        let store = InMemoryDocumentStore::new();
        store
            .save_document(&doc("doc-1", BankingDomain::Compliance))
            .await
            .unwrap();
        store
            .save_document(&doc("doc-2", BankingDomain::Compliance))
            .await
            .unwrap();
        store
            .save_document(&doc("doc-3", BankingDomain::CustomerService))
            .await
            .unwrap();

        assert_eq!(store.count_documents(None).await.unwrap(), 3);
        assert_eq!(
            store
                .count_documents(Some(BankingDomain::Compliance))
                .await
                .unwrap(),
            2
        );
        assert_eq!(
            store
                .count_documents(Some(BankingDomain::RiskManagement))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_query_log_appends() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(store.query_log_count().await.unwrap(), 0);

        let response = crate::domain::QueryResponse::no_knowledge();
        let entry = QueryLogEntry::from_response("user-1", "anything", &response);
        store.append_query_log(&entry).await.unwrap();

        assert_eq!(store.query_log_count().await.unwrap(), 1);
    }
}
