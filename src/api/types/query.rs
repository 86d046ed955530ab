//! Query endpoint DTOs

use serde::Deserialize;

use crate::domain::BankingDomain;

/// Body of `POST /query`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    /// Caller identity for the audit trail; required, never defaulted
    pub user_id: String,
    /// Restrict the consultation to these domains; omitted means all
    #[serde(default)]
    pub preferred_domains: Option<Vec<BankingDomain>>,
    /// Free-form caller context, carried for audit purposes only
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}
