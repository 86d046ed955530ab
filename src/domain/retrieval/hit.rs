use serde::Serialize;

use crate::domain::banking::BankingDomain;

/// One fragment returned by a similarity search, with the metadata of the
/// document it came from. Transient: consumed immediately to build prompt
/// context, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalHit {
    pub content: String,
    pub title: String,
    pub source: String,
    pub domain: BankingDomain,
    /// Similarity score; higher is more similar
    pub score: f32,
}

impl RetrievalHit {
    pub fn new(
        content: impl Into<String>,
        title: impl Into<String>,
        source: impl Into<String>,
        domain: BankingDomain,
        score: f32,
    ) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
            source: source.into(),
            domain,
            score,
        }
    }
}
