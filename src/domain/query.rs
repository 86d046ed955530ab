//! Query response and audit log entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::banking::BankingDomain;

/// Upper bound on the heuristic confidence score
pub const MAX_CONFIDENCE: f64 = 0.9;

/// Fallback answer when no domain produced any retrieval hit
pub const NO_KNOWLEDGE_ANSWER: &str = "I don't have sufficient information to answer your \
     question. Please try rephrasing or contact a human expert.";

/// Fallback answer when every per-domain generation call failed
pub const GENERATION_FAILED_ANSWER: &str =
    "I apologize, but I'm unable to generate a response at this time.";

/// The synthesized answer returned for one query.
///
/// Constructed once by the orchestrator and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub answer: String,
    /// Source titles in retrieval order; duplicates are preserved
    pub sources: Vec<String>,
    pub confidence: f64,
    pub domains_consulted: Vec<BankingDomain>,
    pub timestamp: DateTime<Utc>,
}

impl QueryResponse {
    /// Response for the zero-hit path
    pub fn no_knowledge() -> Self {
        Self {
            answer: NO_KNOWLEDGE_ANSWER.to_string(),
            sources: Vec::new(),
            confidence: 0.0,
            domains_consulted: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

/// Heuristic confidence score from evidence breadth.
///
/// Rewards total hit count and the number of domains that contributed,
/// clamped to [`MAX_CONFIDENCE`]. Not a calibrated probability.
pub fn confidence_score(total_hits: usize, domains_consulted: usize) -> f64 {
    let raw = 0.1 * total_hits as f64 + 0.1 * domains_consulted as f64;
    raw.min(MAX_CONFIDENCE)
}

/// One row of the query audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub user_id: String,
    pub query: String,
    pub response: String,
    pub domains_consulted: Vec<BankingDomain>,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl QueryLogEntry {
    pub fn from_response(user_id: impl Into<String>, query: impl Into<String>, response: &QueryResponse) -> Self {
        Self {
            user_id: user_id.into(),
            query: query.into(),
            response: response.answer.clone(),
            domains_consulted: response.domains_consulted.clone(),
            confidence: response.confidence,
            timestamp: response.timestamp,
        }
    }
}
