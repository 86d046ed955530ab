//! Query endpoint handler

use axum::extract::State;
use tracing::info;

use crate::api::middleware::RequireBearerToken;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, QueryRequest};
use crate::domain::QueryResponse;

/// `POST /query`: consult the domain experts and return one answer
pub async fn handle_query(
    State(state): State<AppState>,
    RequireBearerToken(_token): RequireBearerToken,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("Query must not be empty").with_param("query"));
    }

    let preferred = request.preferred_domains.unwrap_or_default();

    info!(
        user_id = %request.user_id,
        preferred_domains = preferred.len(),
        "Handling query"
    );

    let response = state
        .expert_service
        .answer_query(&request.query, &request.user_id, &preferred)
        .await?;

    Ok(Json(response))
}
