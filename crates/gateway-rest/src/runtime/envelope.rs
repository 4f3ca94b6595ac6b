//! The `{code, message, data | error}` response body.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Uniform JSON body returned for every REST response.
///
/// Exactly one of `data` / `error` is set. Build it with [`Envelope::success`],
/// [`Envelope::ok`] or [`Envelope::failure`].
///
/// ```json
/// { "code": 200, "message": "ok", "data": { "id": "…", "name": "Acme" } }
/// { "code": 404, "message": "error while getting company", "error": "NOT_FOUND" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// Short human-readable summary.
    pub message: String,
    /// Success payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Failure payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl Envelope {
    /// Success envelope with an explicit status and message.
    ///
    /// A `Value::Null` payload is still emitted as `"data": null`.
    #[must_use]
    pub fn success(status: StatusCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// `200 "ok"` with the given payload.
    #[must_use]
    pub fn ok(data: impl Into<Value>) -> Self {
        Self::success(StatusCode::OK, "ok", data.into())
    }

    /// Failure envelope.
    #[must_use]
    pub fn failure(status: StatusCode, message: impl Into<String>, error: Value) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: None,
            error: Some(error),
        }
    }

    /// HTTP status carried by this envelope.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}
