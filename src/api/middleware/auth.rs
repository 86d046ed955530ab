//! Bearer token authentication middleware

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires a bearer token on the request.
///
/// Any non-empty token is accepted; there is no credential backend yet, the
/// token only identifies the caller in logs.
#[derive(Debug, Clone)]
pub struct RequireBearerToken(pub String);

impl FromRequestParts<AppState> for RequireBearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!(
            token_prefix = %token.chars().take(8).collect::<String>(),
            "Accepted bearer token"
        );

        Ok(RequireBearerToken(token))
    }
}

fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Authorization header required"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Expected 'Authorization: Bearer <token>'"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::unauthorized("Bearer token must not be empty"));
    }

    Ok(token.to_string())
}
