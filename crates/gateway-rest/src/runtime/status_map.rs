//! gRPC status → HTTP status and client error mapping.

use axum::http::StatusCode;
use serde::Serialize;

/// Closed vocabulary of error identifiers sent to REST clients.
///
/// Backend detail strings are never forwarded; clients only ever see one of
/// these (except for [`ClientError::Passthrough`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorId {
    /// The resource already exists, or the request was rejected as invalid.
    AlreadyExists,
    /// The requested resource does not exist.
    NotFound,
    /// Catch-all for internal, unknown and unmapped failures.
    InternalServerError,
    /// The backend is unreachable or overloaded.
    ServiceUnavailable,
}

impl ErrorId {
    /// The wire form of the identifier, e.g. `"NOT_FOUND"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }
}

impl std::fmt::Display for ErrorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the client is told about a failed RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A sanitized identifier from the closed vocabulary.
    Id(ErrorId),
    /// The backend message, forwarded as-is. Only produced for `Cancelled`.
    Passthrough(String),
}

impl ClientError {
    /// JSON value placed in the envelope's `error` field.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Id(id) => serde_json::Value::from(id.as_str()),
            Self::Passthrough(message) => serde_json::Value::from(message.as_str()),
        }
    }
}

/// Outcome of [`translate_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// HTTP status written to the client.
    pub http_status: StatusCode,
    /// Error payload written to the client.
    pub error: ClientError,
    /// Short label appended to the server-side log line.
    pub label: &'static str,
}

/// Map a failed RPC to its HTTP status and client-facing error.
///
/// Evaluated top to bottom, first match wins:
///
/// | gRPC code                         | HTTP | client error             |
/// |-----------------------------------|------|--------------------------|
/// | `Cancelled`                       | 400  | backend message          |
/// | `AlreadyExists`, `InvalidArgument`| 400  | `ALREADY_EXISTS`         |
/// | `NotFound`                        | 404  | `NOT_FOUND`              |
/// | `Unavailable`                     | 503  | `SERVICE_UNAVAILABLE`    |
/// | anything else                     | 500  | `INTERNAL_SERVER_ERROR`  |
///
/// `InvalidArgument` sharing `ALREADY_EXISTS`, and `Cancelled` leaking the
/// backend message, are both part of the public contract.
///
/// A status only reaches this function as the error side of an RPC result,
/// so even `Code::Ok` is treated as a failure here.
///
/// # Examples
///
/// ```
/// use gateway_rest::{translate_status, ClientError, ErrorId};
///
/// let t = translate_status(&tonic::Status::not_found("no row 42"));
/// assert_eq!(t.http_status, axum::http::StatusCode::NOT_FOUND);
/// assert_eq!(t.error, ClientError::Id(ErrorId::NotFound));
/// ```
#[must_use]
pub fn translate_status(status: &tonic::Status) -> Translation {
    use tonic::Code;

    let (http_status, error, label) = match status.code() {
        Code::Cancelled => (
            StatusCode::BAD_REQUEST,
            ClientError::Passthrough(status.message().to_owned()),
            "canceled",
        ),
        Code::AlreadyExists | Code::InvalidArgument => (
            StatusCode::BAD_REQUEST,
            ClientError::Id(ErrorId::AlreadyExists),
            "already exists",
        ),
        Code::NotFound => (
            StatusCode::NOT_FOUND,
            ClientError::Id(ErrorId::NotFound),
            "not found",
        ),
        Code::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            ClientError::Id(ErrorId::ServiceUnavailable),
            "service unavailable",
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ClientError::Id(ErrorId::InternalServerError),
            "internal server error",
        ),
    };

    Translation {
        http_status,
        error,
        label,
    }
}

/// Return the canonical `SCREAMING_SNAKE_CASE` name for a gRPC status code.
///
/// Used in server-side logs only; clients see an [`ErrorId`] instead.
///
/// ```
/// use gateway_rest::grpc_code_name;
///
/// assert_eq!(grpc_code_name(tonic::Code::NotFound), "NOT_FOUND");
/// ```
#[must_use]
pub fn grpc_code_name(code: tonic::Code) -> &'static str {
    match code {
        tonic::Code::Ok => "OK",
        tonic::Code::Cancelled => "CANCELLED",
        tonic::Code::Unknown => "UNKNOWN",
        tonic::Code::InvalidArgument => "INVALID_ARGUMENT",
        tonic::Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
        tonic::Code::NotFound => "NOT_FOUND",
        tonic::Code::AlreadyExists => "ALREADY_EXISTS",
        tonic::Code::PermissionDenied => "PERMISSION_DENIED",
        tonic::Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
        tonic::Code::FailedPrecondition => "FAILED_PRECONDITION",
        tonic::Code::Aborted => "ABORTED",
        tonic::Code::OutOfRange => "OUT_OF_RANGE",
        tonic::Code::Unimplemented => "UNIMPLEMENTED",
        tonic::Code::Internal => "INTERNAL",
        tonic::Code::Unavailable => "UNAVAILABLE",
        tonic::Code::DataLoss => "DATA_LOSS",
        tonic::Code::Unauthenticated => "UNAUTHENTICATED",
    }
}
