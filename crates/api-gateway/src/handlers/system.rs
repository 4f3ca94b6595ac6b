//! Liveness and config inspection.

use axum::extract::State;
use axum::http::StatusCode;
use gateway_rest::{transcode, Envelope, RestError, RpcResultExt};
use serde_json::Value;

use crate::config::Config;
use crate::state::AppState;

/// `GET /v1/ping`
#[utoipa::path(
    get,
    path = "/v1/ping",
    tag = "system",
    responses((status = 200, description = "`\"pong\"`", body = Envelope))
)]
pub async fn ping() -> Envelope {
    Envelope::ok("pong")
}

/// `GET /config`
///
/// The full config is only disclosed in `development`; other known
/// environments get an empty payload and anything else is a 400.
#[utoipa::path(
    get,
    path = "/config",
    tag = "system",
    responses(
        (status = 200, description = "Config, or an empty payload outside development", body = Envelope),
        (status = 400, description = "Unknown environment", body = Envelope),
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Envelope, RestError> {
    let config: &Config = &state.config;
    tracing::info!(environment = %config.environment, "get config");

    match config.environment.as_str() {
        "development" => Ok(Envelope::ok(
            transcode(config).into_rest("error while reading config")?,
        )),
        "staging" => Ok(Envelope::success(
            StatusCode::OK,
            config.environment.as_str(),
            Value::Null,
        )),
        "production" => Ok(Envelope::success(StatusCode::OK, "private data", Value::Null)),
        other => Err(RestError::validation("wrong environment", other)),
    }
}
