//! # locus-api
//!
//! Transport-facing API types for the Locus location service: the error
//! type mapped to HTTP responses and the single translation point from a
//! repository [`DataResponse`] envelope to an HTTP response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use locus_core::DataResponse;

/// High-level API errors raised by the transport layer itself (never by
/// the repository, whose outcomes travel in the envelope).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Unauthorized(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "message": self.message() });
        (self.status_code(), Json(body)).into_response()
    }
}

/// Translates a repository envelope into an HTTP response.
///
/// The envelope's `status_code` becomes the HTTP status verbatim. A
/// successful envelope serializes its payload (or an empty body without
/// one); a failed envelope serializes its message, when present, as
/// `{"message": ...}`.
pub fn envelope_response<T: Serialize>(envelope: DataResponse<T>) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if envelope.succeeded {
        match envelope.result {
            Some(result) => (status, Json(result)).into_response(),
            None => status.into_response(),
        }
    } else {
        match envelope.message {
            Some(message) => (status, Json(json!({ "message": message }))).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_keeps_its_status() {
        let response = envelope_response(DataResponse::created("payload"));
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = envelope_response(DataResponse::ok(42));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn failure_envelope_keeps_its_status() {
        let response = envelope_response(DataResponse::<()>::not_found());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = envelope_response(DataResponse::<()>::server_error("backend gone"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn out_of_range_status_degrades_to_500() {
        let envelope = DataResponse::<()> {
            succeeded: false,
            status_code: 0,
            message: None,
            result: None,
        };
        let response = envelope_response(envelope);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn api_error_maps_to_its_status() {
        let err = ApiError::Unauthorized("Invalid or missing api-key.".into());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
