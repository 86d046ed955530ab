//! Embedding-backed index ranking by cosine similarity

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::KnowledgeDocument;
use crate::domain::embedding::EmbeddingProvider;
use crate::domain::error::DomainError;
use crate::domain::retrieval::{RetrievalHit, VectorIndex};

#[derive(Debug, Clone)]
struct EmbeddedEntry {
    content: String,
    title: String,
    source: String,
    domain: crate::domain::BankingDomain,
    vector: Vec<f32>,
}

/// Index that embeds documents and queries through an [`EmbeddingProvider`]
/// and ranks by cosine similarity.
#[derive(Debug)]
pub struct EmbeddingVectorIndex {
    provider: Arc<dyn EmbeddingProvider>,
    entries: RwLock<Vec<EmbeddedEntry>>,
}

impl EmbeddingVectorIndex {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            entries: RwLock::new(Vec::new()),
        }
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorIndex for EmbeddingVectorIndex {
    async fn add(&self, document: &KnowledgeDocument) -> Result<(), DomainError> {
        let vector = self.provider.embed(document.content()).await?;

        let entry = EmbeddedEntry {
            content: document.content().to_string(),
            title: document.title().to_string(),
            source: document.source().to_string(),
            domain: document.domain(),
            vector,
        };

        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievalHit>, DomainError> {
        let query_vector = self.provider.embed(query).await?;

        let entries = self.entries.read().await;

        let mut scored: Vec<(f32, &EmbeddedEntry)> = entries
            .iter()
            .map(|e| (Self::cosine_similarity(&query_vector, &e.vector), e))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(score, e)| {
                RetrievalHit::new(&e.content, &e.title, &e.source, e.domain, score)
            })
            .collect())
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::BankingDomain;

    /// Maps exact texts to fixed vectors
    #[derive(Debug, Default)]
    struct FixedEmbeddings {
        vectors: Mutex<HashMap<String, Vec<f32>>>,
    }

    impl FixedEmbeddings {
        fn with(self, text: &str, vector: Vec<f32>) -> Self {
            self.vectors.lock().unwrap().insert(text.to_string(), vector);
            self
        }
    }

    #[async_trait]
    impl EmbeddingProvider for FixedEmbeddings {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
            self.vectors
                .lock()
                .unwrap()
                .get(text)
                .cloned()
                .ok_or_else(|| DomainError::provider("fixed", format!("no vector for {:?}", text)))
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    fn doc(title: &str, content: &str) -> KnowledgeDocument {
        KnowledgeDocument::new(title, content, BankingDomain::RiskManagement, "Risk Manual")
    }

    #[tokio::test]
    async fn test_ranks_by_cosine_similarity() {
        let provider = FixedEmbeddings::default()
            .with("credit risk", vec![1.0, 0.0])
            .with("credit risk models", vec![0.9, 0.1])
            .with("branch opening hours", vec![0.0, 1.0]);

        let index = EmbeddingVectorIndex::new(Arc::new(provider));
        index.add(&doc("Hours", "branch opening hours")).await.unwrap();
        index.add(&doc("Models", "credit risk models")).await.unwrap();

        let hits = index.search("credit risk", 2).await.unwrap();
        assert_eq!(hits[0].title, "Models");
        assert!(hits[0].score > hits[1].score);
    }

    #[tokio::test]
    async fn test_embedding_failure_propagates() {
        let provider = FixedEmbeddings::default();
        let index = EmbeddingVectorIndex::new(Arc::new(provider));

        assert!(index.search("anything", 5).await.is_err());
    }

    #[test]
    fn test_cosine_degenerate_vectors() {
        assert_eq!(EmbeddingVectorIndex::cosine_similarity(&[], &[]), 0.0);
        assert_eq!(
            EmbeddingVectorIndex::cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]),
            0.0
        );
        assert_eq!(
            EmbeddingVectorIndex::cosine_similarity(&[1.0], &[1.0, 2.0]),
            0.0
        );
    }
}
