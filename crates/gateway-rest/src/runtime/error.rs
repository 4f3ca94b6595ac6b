//! REST error type: every way a handler can fail, rendered as one envelope.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::envelope::Envelope;
use super::request::QueryParamError;
use super::status_map::{grpc_code_name, translate_status, ErrorId};
use super::transcode::TranscodeError;

/// Message used for query-string parse failures.
const QUERY_PARAM_MESSAGE: &str = "error while parsing query param";
/// Message used for request bodies that fail to deserialize.
const JSON_BIND_MESSAGE: &str = "error while binding json";
/// Message used when a backend response cannot be transcoded.
const TRANSCODE_MESSAGE: &str = "error while parsing to struct";

/// A failed REST request.
///
/// Converting it into a response logs the full detail at ERROR level and
/// writes exactly one [`Envelope`]:
///
/// - [`RestError::Rpc`]: status and error come from [`translate_status`];
///   the backend message stays server-side.
/// - [`RestError::Validation`]: 400 with the local detail, which only echoes
///   the client's own input.
/// - [`RestError::Transcode`]: 500 `INTERNAL_SERVER_ERROR`.
///
/// # Examples
///
/// ```
/// use axum::response::IntoResponse;
/// use gateway_rest::RestError;
///
/// let err = RestError::rpc("error while getting company", tonic::Status::not_found("no rows"));
/// assert_eq!(err.into_response().status(), axum::http::StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RestError {
    /// The backend call failed.
    #[error("{context}: {}: {}", grpc_code_name(.status.code()), .status.message())]
    Rpc {
        /// What the handler was doing, e.g. `"error while getting company"`.
        context: &'static str,
        /// Status returned by the backend.
        status: tonic::Status,
    },

    /// The request was rejected before any backend call.
    #[error("{message}: {detail}")]
    Validation {
        /// Envelope message.
        message: String,
        /// Envelope error payload.
        detail: String,
    },

    /// The backend answered but its message could not be transcoded.
    #[error("{context}: {source}")]
    Transcode {
        /// What the handler was doing.
        context: &'static str,
        /// Underlying serializer failure.
        #[source]
        source: TranscodeError,
    },
}

impl RestError {
    /// A failed backend call.
    #[must_use]
    pub const fn rpc(context: &'static str, status: tonic::Status) -> Self {
        Self::Rpc { context, status }
    }

    /// A local validation failure (HTTP 400).
    #[must_use]
    pub fn validation(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// HTTP status this error is reported with.
    #[must_use]
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Rpc { status, .. } => translate_status(status).http_status,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Transcode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing envelope for this error.
    #[must_use]
    pub fn envelope(&self) -> Envelope {
        match self {
            Self::Rpc { context, status } => {
                let t = translate_status(status);
                Envelope::failure(t.http_status, *context, t.error.to_json())
            }
            Self::Validation { message, detail } => {
                Envelope::failure(StatusCode::BAD_REQUEST, message.as_str(), detail.as_str().into())
            }
            Self::Transcode { .. } => Envelope::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                TRANSCODE_MESSAGE,
                ErrorId::InternalServerError.as_str().into(),
            ),
        }
    }

    fn log(&self) {
        match self {
            Self::Rpc { context, status } => {
                let t = translate_status(status);
                tracing::error!(
                    code = t.http_status.as_u16(),
                    grpc_code = grpc_code_name(status.code()),
                    error = %status.message(),
                    "{context}, {}",
                    t.label
                );
            }
            Self::Validation { message, detail } => {
                tracing::error!(code = 400, error = %detail, "{message}");
            }
            Self::Transcode { context, source } => {
                tracing::error!(code = 500, error = %source, "{context}, {TRANSCODE_MESSAGE}");
            }
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> axum::response::Response {
        self.log();
        self.envelope().into_response()
    }
}

impl From<QueryParamError> for RestError {
    fn from(err: QueryParamError) -> Self {
        Self::validation(QUERY_PARAM_MESSAGE, err.to_string())
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(JSON_BIND_MESSAGE, rejection.body_text())
    }
}

/// Attach a handler context to a raw RPC result.
///
/// ```ignore
/// let company = client.get(req).await.into_rest("error while getting company")?;
/// ```
pub trait RpcResultExt<T> {
    /// Unwrap the response message, or turn the status into [`RestError::Rpc`].
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Rpc`] if the call failed.
    fn into_rest(self, context: &'static str) -> Result<T, RestError>;
}

impl<T> RpcResultExt<T> for Result<tonic::Response<T>, tonic::Status> {
    fn into_rest(self, context: &'static str) -> Result<T, RestError> {
        self.map(tonic::Response::into_inner)
            .map_err(|status| RestError::rpc(context, status))
    }
}

impl<T> RpcResultExt<T> for Result<T, TranscodeError> {
    fn into_rest(self, context: &'static str) -> Result<T, RestError> {
        self.map_err(|source| RestError::Transcode { context, source })
    }
}
