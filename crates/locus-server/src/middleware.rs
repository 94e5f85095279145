//! Shared-secret API-key check for the location routes.
//!
//! The configured key is compared against the `location-api-key` request
//! header; a missing or mismatched key short-circuits with 401 before the
//! request reaches the repository. Health and info endpoints are mounted
//! outside this layer and stay public.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use locus_api::ApiError;

/// Request header carrying the shared secret.
pub const API_KEY_HEADER: &str = "location-api-key";

/// State for the API-key middleware.
#[derive(Clone)]
pub struct AuthState {
    api_key: Arc<str>,
}

impl AuthState {
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

/// Rejects requests whose `location-api-key` header is missing or does not
/// match the configured key. An empty configured key rejects everything.
pub async fn api_key_middleware(
    State(state): State<AuthState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        None => {
            tracing::debug!(path = %req.uri().path(), "missing api-key header");
            ApiError::Unauthorized("Invalid or missing api-key.".into()).into_response()
        }
        Some(key) if !state.api_key.is_empty() && key == state.api_key.as_ref() => {
            next.run(req).await
        }
        Some(_) => {
            tracing::debug!(path = %req.uri().path(), "api-key mismatch");
            ApiError::Unauthorized("Invalid api-key.".into()).into_response()
        }
    }
}
