//! Request-side helpers: local validation and the Axum → tonic bridge.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderMap;
use tonic::Request;
use uuid::Uuid;

use super::error::RestError;

/// HTTP headers copied into gRPC metadata for client identification.
pub const FORWARDED_HEADERS: &[&str] = &["user-agent", "x-forwarded-for", "x-real-ip", "x-request-id"];

/// Wrap a message in a [`tonic::Request`], forwarding [`FORWARDED_HEADERS`].
///
/// Header values that are not valid ASCII metadata are skipped.
///
/// # Examples
///
/// ```
/// use axum::http::HeaderMap;
/// use gateway_rest::build_rpc_request;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-request-id", "abc-123".parse().unwrap());
///
/// let req = build_rpc_request("body", &headers);
/// assert_eq!(req.metadata().get("x-request-id").unwrap(), "abc-123");
/// ```
pub fn build_rpc_request<T>(body: T, headers: &HeaderMap) -> Request<T> {
    let mut req = Request::new(body);

    let metadata = req.metadata_mut();
    for &name in FORWARDED_HEADERS {
        let Some(val) = headers.get(name).and_then(|v| v.to_str().ok()) else {
            continue;
        };
        let Ok(key) = name.parse::<tonic::metadata::MetadataKey<tonic::metadata::Ascii>>() else {
            continue;
        };
        if let Ok(parsed) = val.parse() {
            metadata.insert(key, parsed);
        }
    }

    req
}

/// Check that a path identifier is a UUID before it is sent to the backend.
///
/// `what` names the identifier in the error message, e.g. `"company id"`
/// yields `"company id is not valid"`.
///
/// # Errors
///
/// Returns [`RestError::Validation`] (HTTP 400) if `raw` is not a UUID.
pub fn parse_uuid(raw: &str, what: &str) -> Result<Uuid, RestError> {
    Uuid::parse_str(raw).map_err(|_| {
        let message = format!("{what} is not valid");
        RestError::validation(message.clone(), message)
    })
}

/// A query parameter could not be parsed into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for query parameter `{key}`: {reason}")]
pub struct QueryParamError {
    key: String,
    value: String,
    reason: String,
}

impl QueryParamError {
    /// Name of the offending parameter.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Parse `key` from the query string, falling back to `default` when absent.
///
/// A key that is present but empty (`?limit=`) is parsed as the empty string
/// and therefore fails for numeric types. This function writes nothing; the
/// caller decides how to report the error.
///
/// # Errors
///
/// Returns [`QueryParamError`] if the value (or the default) does not parse as `T`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use gateway_rest::parse_query_param;
///
/// let query = HashMap::from([("limit".to_owned(), "25".to_owned())]);
/// assert_eq!(parse_query_param::<u32>(&query, "limit", "10"), Ok(25));
/// assert_eq!(parse_query_param::<u32>(&query, "offset", "0"), Ok(0));
/// ```
pub fn parse_query_param<T>(
    query: &HashMap<String, String>,
    key: &str,
    default: &str,
) -> Result<T, QueryParamError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = query.get(key).map_or(default, String::as_str);
    value.parse().map_err(|e: T::Err| QueryParamError {
        key: key.to_owned(),
        value: value.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn forwards_known_headers_to_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert("user-agent", "TestClient/1".parse().unwrap());
        headers.insert("x-forwarded-for", "1.2.3.4".parse().unwrap());
        headers.insert("x-real-ip", "5.6.7.8".parse().unwrap());
        headers.insert("x-request-id", "req-1".parse().unwrap());

        let req = build_rpc_request((), &headers);
        let meta = req.metadata();
        assert_eq!(meta.get("user-agent").unwrap(), "TestClient/1");
        assert_eq!(meta.get("x-forwarded-for").unwrap(), "1.2.3.4");
        assert_eq!(meta.get("x-real-ip").unwrap(), "5.6.7.8");
        assert_eq!(meta.get("x-request-id").unwrap(), "req-1");
    }

    #[test]
    fn skips_unlisted_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer tok".parse().unwrap());
        headers.insert("cookie", "a=b".parse().unwrap());

        let req = build_rpc_request((), &headers);
        assert!(req.metadata().is_empty());
    }

    #[test]
    fn uuid_accepted() {
        let id = parse_uuid("0b7c7e4a-3f7d-4a51-9d2e-6f1c2b3a4d5e", "company id").unwrap();
        assert_eq!(id.to_string(), "0b7c7e4a-3f7d-4a51-9d2e-6f1c2b3a4d5e");
    }

    #[test]
    fn non_uuid_rejected_with_local_message() {
        let err = parse_uuid("not-a-uuid", "company id").unwrap_err();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        let env = err.envelope();
        assert_eq!(env.message, "company id is not valid");
        assert_eq!(env.error, Some(serde_json::json!("company id is not valid")));
    }

    #[test]
    fn default_used_when_key_absent() {
        assert_eq!(parse_query_param::<u32>(&query(&[]), "limit", "10"), Ok(10));
    }

    #[test]
    fn present_value_wins_over_default() {
        let q = query(&[("offset", "30")]);
        assert_eq!(parse_query_param::<u32>(&q, "offset", "0"), Ok(30));
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        let err = parse_query_param::<u32>(&query(&[("limit", "abc")]), "limit", "10").unwrap_err();
        assert_eq!(err.key(), "limit");
        assert!(err.to_string().contains("\"abc\""), "{err}");
    }

    #[test]
    fn empty_value_does_not_fall_back_to_default() {
        assert!(parse_query_param::<u32>(&query(&[("limit", "")]), "limit", "10").is_err());
    }

    #[test]
    fn negative_value_rejected_for_unsigned() {
        assert!(parse_query_param::<u32>(&query(&[("offset", "-1")]), "offset", "0").is_err());
    }
}
