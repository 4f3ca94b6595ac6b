//! Protobuf types for the `company_service` package.
//!
//! The messages mirror `proto/company_service.proto` field-for-field. Besides the
//! prost wire encoding they derive [`serde::Serialize`] without any
//! `skip_serializing_if`, so JSON output keeps the proto field names and
//! always contains fields that hold their default value.
//!
//! [`client::CompanyServiceClient`] is the unary client for
//! `company_service.CompanyService`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod client;

use serde::Serialize;

/// Request body of `CompanyService.Create`.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct CreateCompany {
    /// Display name of the new company.
    #[prost(string, tag = "1")]
    pub name: String,
}

/// Identifier-only request used by `Get` and `Delete`.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct CompanyId {
    /// Company UUID, as sent by the REST client.
    #[prost(string, tag = "1")]
    pub id: String,
}

/// A company record.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Company {
    /// Company UUID.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Display name.
    #[prost(string, tag = "2")]
    pub name: String,
}

/// Request body of `CompanyService.GetAll`.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct GetAllCompanyRequest {
    /// Maximum number of records to return.
    #[prost(uint32, tag = "1")]
    pub limit: u32,
    /// Number of records to skip.
    #[prost(uint32, tag = "2")]
    pub offset: u32,
    /// Optional name filter; empty matches every company.
    #[prost(string, tag = "3")]
    pub name: String,
}

/// Response of `CompanyService.GetAll`.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct GetAllCompanyResponse {
    /// One page of companies.
    #[prost(message, repeated, tag = "1")]
    pub companies: Vec<Company>,
    /// Total number of companies matching the filter.
    #[prost(uint32, tag = "2")]
    pub count: u32,
}

/// Empty response returned by `Update` and `Delete`.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Empty {}
