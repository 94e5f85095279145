use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use locus_api::envelope_response;
use locus_core::{LocationUpdate, NewLocation};

use crate::repository::LocationRepository;

/// Shared handler state: the repository behind every location route.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<LocationRepository>,
}

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "Locus",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

pub async fn readyz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ready" }))
}

// ---- Location CRUD ----

/// `GET /api/locations` — all locations, ordered by name.
pub async fn list_locations(State(state): State<AppState>) -> Response {
    envelope_response(state.repository.get_all().await)
}

/// `GET /api/locations/{id}` — a single location.
pub async fn get_location(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    envelope_response(state.repository.get_by_id(&id).await)
}

/// `HEAD /api/locations/{id}` — existence check straight from the store.
pub async fn head_location(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    envelope_response(state.repository.exists(&id).await)
}

/// `POST /api/locations` — create a location; responds 201 with the
/// created record, generated identifier included.
pub async fn create_location(
    State(state): State<AppState>,
    Json(input): Json<NewLocation>,
) -> Response {
    envelope_response(state.repository.add(input).await)
}

/// `PUT /api/locations` — replace a location in place; the identifier
/// travels in the body.
pub async fn update_location(
    State(state): State<AppState>,
    Json(input): Json<LocationUpdate>,
) -> Response {
    envelope_response(state.repository.update(input).await)
}

/// `DELETE /api/locations/{id}` — remove a location and its directions.
pub async fn delete_location(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    envelope_response(state.repository.delete(&id).await)
}
