//! Document ingestion and knowledge-base DTOs

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::BankingDomain;

fn default_source() -> String {
    "api_upload".to_string()
}

/// Body of `POST /documents`
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentUploadRequest {
    pub title: String,
    pub content: String,
    pub domain: BankingDomain,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct DocumentUploadResponse {
    pub message: String,
    pub document_id: String,
}

/// Body of `GET /domains`: the domain names alongside a name-to-description map
#[derive(Debug, Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<&'static str>,
    pub descriptions: BTreeMap<&'static str, &'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_request_defaults() {
        let request: DocumentUploadRequest = serde_json::from_str(
            r#"{
                "title": "KYC Procedures",
                "content": "Verify client identity.",
                "domain": "compliance"
            }"#,
        )
        .unwrap();

        assert_eq!(request.source, "api_upload");
        assert!(request.metadata.is_empty());
        assert_eq!(request.domain, BankingDomain::Compliance);
    }

    #[test]
    fn test_upload_request_unknown_domain_rejected() {
        let result = serde_json::from_str::<DocumentUploadRequest>(
            r#"{"title": "T", "content": "C", "domain": "astrology"}"#,
        );

        assert!(result.is_err());
    }
}
