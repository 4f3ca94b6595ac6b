//! Runtime translation layer between a gRPC backend and REST/JSON clients.
//!
//! # Types
//!
//! - [`RestError`]: every failure a REST handler can produce, rendered as one [`Envelope`]
//! - [`Envelope`]: the `{code, message, data | error}` body shared by every response
//! - [`translate_status`]: maps a [`tonic::Status`] to an HTTP status and a [`ClientError`]
//! - [`transcode`]: converts a typed message into a [`serde_json::Value`]
//! - [`parse_query_param`], [`parse_uuid`]: local request validation
//! - [`build_rpc_request`]: bridges Axum headers into [`tonic::Request`] metadata
//!
//! # Usage
//!
//! ```ignore
//! async fn get_company(Path(raw): Path<String>) -> Result<Envelope, RestError> {
//!     parse_uuid(&raw, "company id")?;
//!     let company = client
//!         .get(CompanyId { id: raw })
//!         .await
//!         .into_rest("error while getting company")?;
//!     Ok(Envelope::ok(transcode(&company)?))
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod runtime;

pub use runtime::*;
