//! In-memory lexical index, the default backend when no embedding provider
//! is configured

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::KnowledgeDocument;
use crate::domain::error::DomainError;
use crate::domain::retrieval::{RetrievalHit, VectorIndex};

#[derive(Debug, Clone)]
struct IndexedEntry {
    content: String,
    title: String,
    source: String,
    domain: crate::domain::BankingDomain,
    terms: HashSet<String>,
}

/// Ranks entries by lexical term overlap with the query.
///
/// An entry whose content contains the query verbatim (case-insensitive)
/// always scores at least as high as any overlap-only match.
#[derive(Debug, Default)]
pub struct InMemoryVectorIndex {
    entries: RwLock<Vec<IndexedEntry>>,
}

impl InMemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn tokenize(text: &str) -> HashSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() > 2)
            .map(String::from)
            .collect()
    }

    fn score(entry: &IndexedEntry, query_lower: &str, query_terms: &HashSet<String>) -> f32 {
        if entry.content.to_lowercase().contains(query_lower) {
            return 1.0;
        }

        if query_terms.is_empty() {
            return 0.0;
        }

        let overlap = entry.terms.intersection(query_terms).count();
        overlap as f32 / query_terms.len() as f32
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn add(&self, document: &KnowledgeDocument) -> Result<(), DomainError> {
        let entry = IndexedEntry {
            content: document.content().to_string(),
            title: document.title().to_string(),
            source: document.source().to_string(),
            domain: document.domain(),
            terms: Self::tokenize(document.content()),
        };

        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievalHit>, DomainError> {
        let query_lower = query.to_lowercase();
        let query_terms = Self::tokenize(query);

        let entries = self.entries.read().await;

        let mut scored: Vec<(f32, &IndexedEntry)> = entries
            .iter()
            .map(|e| (Self::score(e, &query_lower, &query_terms), e))
            .filter(|(score, _)| *score > 0.0)
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
    use super::*;
    use crate::domain::BankingDomain;

    fn doc(title: &str, content: &str) -> KnowledgeDocument {
        KnowledgeDocument::new(
            title,
            content,
            BankingDomain::GlobalTradeFinance,
            "Trade Finance Handbook",
        )
    }

    #[tokio::test]
    async fn test_empty_index_returns_no_hits() {
        let index = InMemoryVectorIndex::new();
        let hits = index.search("letters of credit", 5).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_verbatim_match_ranks_first() {
        let index = InMemoryVectorIndex::new();
        index
            .add(&doc(
                "LC Basics",
                "Letters of Credit provide payment guarantees in international trade.",
            ))
            .await
            .unwrap();
        index
            .add(&doc(
                "Payments Overview",
                "Payment terms vary by counterparty and trade corridor.",
            ))
            .await
            .unwrap();

        let hits = index.search("Letters of Credit", 5).await.unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].title, "LC Basics");
        assert_eq!(hits[0].score, 1.0);
    }

    #[tokio::test]
    async fn test_term_overlap_matches() {
        let index = InMemoryVectorIndex::new();
        index
            .add(&doc(
                "Export Finance",
                "Export credit agencies support financing for exporters.",
            ))
            .await
            .unwrap();

        let hits = index.search("export financing support", 5).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].score > 0.0);
    }

    #[tokio::test]
    async fn test_k_limits_results() {
        let index = InMemoryVectorIndex::new();
        for i in 0..10 {
            index
                .add(&doc(&format!("Doc {}", i), "trade finance guidance"))
                .await
                .unwrap();
        }

        let hits = index.search("trade finance", 3).await.unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(index.len().await, 10);
    }

    #[tokio::test]
    async fn test_unrelated_query_excluded() {
        let index = InMemoryVectorIndex::new();
        index
            .add(&doc("LC Basics", "Letters of Credit guarantee payment."))
            .await
            .unwrap();

        let hits = index.search("quantum mechanics", 5).await.unwrap();
        assert!(hits.is_empty());
    }
}
