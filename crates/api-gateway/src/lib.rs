//! REST/JSON gateway for the company gRPC service.
//!
//! The binary (`main.rs`) wires these pieces together:
//!
//! - [`config::Config`]: flags / environment variables
//! - [`service::CompanyService`]: the backend seam, implemented over gRPC by
//!   [`service::GrpcCompanyService`]
//! - [`router::build_router`]: Axum routes, CORS, request tracing, panic
//!   recovery and the Swagger UI for [`openapi::ApiDoc`]
//! - [`handlers`]: one function per route; translation lives in `gateway_rest`

#![forbid(unsafe_code)]

pub mod config;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod router;
pub mod service;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use router::build_router;
pub use state::AppState;
