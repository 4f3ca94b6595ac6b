//! REST request and response bodies that are not backend messages.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /v1/company`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCompanyBody {
    /// Must be non-empty.
    pub name: String,
}

/// Body of `PUT /v1/company/{company_id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCompanyBody {
    /// New display name.
    pub name: String,
}

/// `{"message": "..."}` payload for operations whose backend reply is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgResponse {
    /// Human-readable result.
    pub message: &'static str,
}

impl MsgResponse {
    /// Returned by a successful update.
    pub const UPDATED: Self = Self { message: "Updated" };
    /// Returned by a successful delete.
    pub const DELETED: Self = Self { message: "Deleted" };
}
