//! Runtime types shared by the gateway's REST handlers.
//!
//! - [`RestError`]: error type that renders as an error [`Envelope`]
//! - [`translate_status`]: the gRPC → HTTP decision table
//! - [`transcode`]: typed message → JSON value
//! - [`build_rpc_request`]: bridges Axum requests to [`tonic::Request`]

mod envelope;
mod error;
mod request;
mod status_map;
mod transcode;

pub use envelope::Envelope;
pub use error::{RestError, RpcResultExt};
pub use request::{
    build_rpc_request, parse_query_param, parse_uuid, QueryParamError, FORWARDED_HEADERS,
};
pub use status_map::{grpc_code_name, translate_status, ClientError, ErrorId, Translation};
pub use transcode::{transcode, TranscodeError};
