//! Document ingestion, statistics, and domain listing handlers

use axum::extract::State;
use tracing::info;

use crate::api::middleware::RequireBearerToken;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, DocumentUploadRequest, DocumentUploadResponse, DomainsResponse, Json,
};
use crate::domain::{BankingDomain, KnowledgeDocument};
use crate::infrastructure::services::KnowledgeBaseStats;

/// `POST /documents`: persist and index a knowledge document
pub async fn handle_upload(
    State(state): State<AppState>,
    RequireBearerToken(_token): RequireBearerToken,
    Json(request): Json<DocumentUploadRequest>,
) -> Result<Json<DocumentUploadResponse>, ApiError> {
    let document = KnowledgeDocument::new(
        request.title,
        request.content,
        request.domain,
        request.source,
    )
    .with_metadata(request.metadata);

    let document_id = document.id().to_string();

    state.expert_service.add_document(&document).await?;

    info!(document_id = %document_id, domain = %request.domain, "Document uploaded");

    Ok(Json(DocumentUploadResponse {
        message: "Document added successfully".to_string(),
        document_id,
    }))
}

/// `GET /stats`: knowledge-base statistics
pub async fn handle_stats(
    State(state): State<AppState>,
    RequireBearerToken(_token): RequireBearerToken,
) -> Result<Json<KnowledgeBaseStats>, ApiError> {
    let stats = state.expert_service.stats().await?;

    Ok(Json(stats))
}

/// `GET /domains`: the closed set of banking domains, unauthenticated
pub async fn handle_domains() -> Json<DomainsResponse> {
    let domains = BankingDomain::all()
        .iter()
        .map(|domain| domain.as_str())
        .collect();

    let descriptions = BankingDomain::all()
        .iter()
        .map(|domain| (domain.as_str(), domain.description()))
        .collect();

    Json(DomainsResponse {
        domains,
        descriptions,
    })
}
