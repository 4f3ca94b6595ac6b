//! Process configuration, read from command-line flags or the environment.
//!
//! Every flag has an environment fallback, so a bare `api-gateway` started with
//! a populated environment behaves the same as one given explicit flags:
//!
//! ```text
//! ENVIRONMENT=development \
//! HTTP_PORT=:8090 \
//! COMPANY_SERVICE_HOST=company-service COMPANY_SERVICE_PORT=5004 \
//!     api-gateway
//! ```

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Gateway configuration.
#[derive(Debug, Clone, Parser, Serialize)]
#[command(name = "api-gateway", version, about = "REST/JSON gateway for the company gRPC service")]
pub struct Config {
    /// Deployment environment: `development`, `staging` or `production`.
    #[arg(long, env = "ENVIRONMENT", default_value = "develop")]
    pub environment: String,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `api_gateway=debug`).
    #[arg(long, env = "LOG_LEVEL", default_value = "debug")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// HTTP listen address: `:8090`, `8090` or `127.0.0.1:8090`.
    #[arg(long, env = "HTTP_PORT", default_value = ":8090")]
    pub http_port: String,

    /// Hostname of the company gRPC service.
    #[arg(long, env = "COMPANY_SERVICE_HOST", default_value = "localhost")]
    pub company_service_host: String,

    /// Port of the company gRPC service.
    #[arg(long, env = "COMPANY_SERVICE_PORT", default_value_t = 5004)]
    pub company_service_port: u16,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Invalid configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `HTTP_PORT` is neither a port nor a socket address.
    #[error("invalid listen address {0:?}; expected ':PORT', 'PORT' or 'HOST:PORT'")]
    ListenAddr(String),
}

impl Config {
    /// Socket address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ListenAddr`] if `http_port` cannot be parsed.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr(&self.http_port)
    }

    /// gRPC endpoint URI of the company service.
    #[must_use]
    pub fn company_service_uri(&self) -> String {
        format!(
            "http://{}:{}",
            self.company_service_host, self.company_service_port
        )
    }
}

/// `":8090"` and `"8090"` bind every interface; anything else must be a full
/// socket address.
fn parse_listen_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    let raw = raw.trim();
    let candidate = match raw.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            format!("0.0.0.0:{raw}")
        }
        None => raw.to_owned(),
    };
    candidate
        .parse()
        .map_err(|_| ConfigError::ListenAddr(raw.to_owned()))
}
