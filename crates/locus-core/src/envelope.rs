//! The uniform result envelope returned by every repository operation.

use serde::{Deserialize, Serialize};

/// Outcome of a repository operation: a tagged success/failure with the
/// status code the transport adapter forwards verbatim, an optional
/// human-readable message, and an optional payload.
///
/// Transport adapters translate `status_code` directly into the wire-level
/// status and `result`/`message` into the response body; they never invent
/// status codes of their own for repository outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse<T> {
    pub succeeded: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> DataResponse<T> {
    /// Success (200) with a payload.
    #[must_use]
    pub fn ok(result: T) -> Self {
        Self {
            succeeded: true,
            status_code: 200,
            message: None,
            result: Some(result),
        }
    }

    /// Created (201) with the freshly persisted payload.
    #[must_use]
    pub fn created(result: T) -> Self {
        Self {
            succeeded: true,
            status_code: 201,
            message: None,
            result: Some(result),
        }
    }

    /// Success with a status code and no payload.
    #[must_use]
    pub fn success(status_code: u16) -> Self {
        Self {
            succeeded: true,
            status_code,
            message: None,
            result: None,
        }
    }

    /// Failure with a status code and no message.
    #[must_use]
    pub fn failure(status_code: u16) -> Self {
        Self {
            succeeded: false,
            status_code,
            message: None,
            result: None,
        }
    }

    /// Bad request (400).
    #[must_use]
    pub fn bad_request() -> Self {
        Self::failure(400)
    }

    /// Not found (404).
    #[must_use]
    pub fn not_found() -> Self {
        Self::failure(404)
    }

    /// Server error (500) carrying the underlying failure's message verbatim.
    #[must_use]
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            status_code: 500,
            message: Some(message.into()),
            result: None,
        }
    }

    /// Attaches a message to this envelope.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_status_and_flag() {
        let ok = DataResponse::ok("payload");
        assert!(ok.succeeded);
        assert_eq!(ok.status_code, 200);
        assert_eq!(ok.result, Some("payload"));

        let created = DataResponse::created(1);
        assert!(created.succeeded);
        assert_eq!(created.status_code, 201);

        let nf = DataResponse::<()>::not_found();
        assert!(!nf.succeeded);
        assert_eq!(nf.status_code, 404);
        assert!(nf.result.is_none());

        let err = DataResponse::<()>::server_error("disk on fire");
        assert_eq!(err.status_code, 500);
        assert_eq!(err.message.as_deref(), Some("disk on fire"));
    }

    #[test]
    fn serializes_camel_case_and_skips_empty_fields() {
        let env = DataResponse::<()>::failure(400);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"succeeded": false, "statusCode": 400})
        );
    }
}
