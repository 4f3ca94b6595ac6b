//! `/v1/company` CRUD handlers.

use std::collections::HashMap;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::HeaderMap;
use company_proto::{Company, CompanyId, CreateCompany, GetAllCompanyRequest};
use gateway_rest::{
    build_rpc_request, parse_query_param, parse_uuid, transcode, Envelope, RestError,
    RpcResultExt,
};

use crate::models::{CreateCompanyBody, MsgResponse, UpdateCompanyBody};
use crate::state::AppState;

const DEFAULT_LIMIT: &str = "10";
const DEFAULT_OFFSET: &str = "0";
const COMPANY_ID: &str = "company id";

/// The `{company_id}` path segment, checked to be a UUID and returned as sent.
fn company_id(path: Result<Path<String>, PathRejection>) -> Result<String, RestError> {
    let Path(raw) = path.map_err(|rejection| {
        RestError::validation(format!("{COMPANY_ID} is not valid"), rejection.body_text())
    })?;
    parse_uuid(&raw, COMPANY_ID)?;
    Ok(raw)
}

/// `POST /v1/company`
#[utoipa::path(
    post,
    path = "/v1/company",
    tag = "company",
    request_body = CreateCompanyBody,
    responses(
        (status = 200, description = "Created company", body = Envelope),
        (status = 400, description = "Invalid request or company already exists", body = Envelope),
        (status = 500, description = "Backend failure", body = Envelope),
        (status = 503, description = "Backend unavailable", body = Envelope),
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateCompanyBody>, JsonRejection>,
) -> Result<Envelope, RestError> {
    const CONTEXT: &str = "error while creating company";

    let Json(body) = body?;
    if body.name.is_empty() {
        return Err(RestError::validation("error while binding json", "name is required"));
    }

    let company = state
        .companies
        .create(build_rpc_request(CreateCompany { name: body.name }, &headers))
        .await
        .into_rest(CONTEXT)?;

    Ok(Envelope::ok(transcode(&company).into_rest(CONTEXT)?))
}

/// `GET /v1/company/{company_id}`
#[utoipa::path(
    get,
    path = "/v1/company/{company_id}",
    tag = "company",
    params(
        ("company_id" = String, Path, description = "Company UUID"),
    ),
    responses(
        (status = 200, description = "Company", body = Envelope),
        (status = 400, description = "Invalid request or company already exists", body = Envelope),
        (status = 404, description = "Company not found", body = Envelope),
        (status = 500, description = "Backend failure", body = Envelope),
        (status = 503, description = "Backend unavailable", body = Envelope),
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<String>, PathRejection>,
) -> Result<Envelope, RestError> {
    const CONTEXT: &str = "error while getting company";

    let id = company_id(path)?;

    let company = state
        .companies
        .get(build_rpc_request(CompanyId { id }, &headers))
        .await
        .into_rest(CONTEXT)?;

    Ok(Envelope::ok(transcode(&company).into_rest(CONTEXT)?))
}

/// `GET /v1/company?limit=&offset=&name=`
///
/// `limit` defaults to 10 and `offset` to 0; both are forwarded unchanged.
#[utoipa::path(
    get,
    path = "/v1/company",
    tag = "company",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, default 10"),
        ("offset" = Option<u32>, Query, description = "Records to skip, default 0"),
        ("name" = Option<String>, Query, description = "Name filter"),
    ),
    responses(
        (status = 200, description = "One page of companies and the total count", body = Envelope),
        (status = 400, description = "Invalid request or company already exists", body = Envelope),
        (status = 500, description = "Backend failure", body = Envelope),
        (status = 503, description = "Backend unavailable", body = Envelope),
    )
)]
pub async fn list_companies(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Envelope, RestError> {
    const CONTEXT: &str = "error while getting all companies";

    let limit: u32 = parse_query_param(&query, "limit", DEFAULT_LIMIT)?;
    let offset: u32 = parse_query_param(&query, "offset", DEFAULT_OFFSET)?;
    let name = query.get("name").cloned().unwrap_or_default();

    let companies = state
        .companies
        .get_all(build_rpc_request(
            GetAllCompanyRequest {
                limit,
                offset,
                name,
            },
            &headers,
        ))
        .await
        .into_rest(CONTEXT)?;

    Ok(Envelope::ok(transcode(&companies).into_rest(CONTEXT)?))
}

/// `PUT /v1/company/{company_id}`
#[utoipa::path(
    put,
    path = "/v1/company/{company_id}",
    tag = "company",
    params(
        ("company_id" = String, Path, description = "Company UUID"),
    ),
    request_body = UpdateCompanyBody,
    responses(
        (status = 200, description = "`{\"message\": \"Updated\"}`", body = Envelope),
        (status = 400, description = "Invalid request or company already exists", body = Envelope),
        (status = 404, description = "Company not found", body = Envelope),
        (status = 500, description = "Backend failure", body = Envelope),
        (status = 503, description = "Backend unavailable", body = Envelope),
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateCompanyBody>, JsonRejection>,
) -> Result<Envelope, RestError> {
    const CONTEXT: &str = "error while updating company";

    let id = company_id(path)?;
    let Json(body) = body?;

    state
        .companies
        .update(build_rpc_request(
            Company {
                id,
                name: body.name,
            },
            &headers,
        ))
        .await
        .into_rest(CONTEXT)?;

    Ok(Envelope::ok(transcode(&MsgResponse::UPDATED).into_rest(CONTEXT)?))
}

/// `DELETE /v1/company/{company_id}`
#[utoipa::path(
    delete,
    path = "/v1/company/{company_id}",
    tag = "company",
    params(
        ("company_id" = String, Path, description = "Company UUID"),
    ),
    responses(
        (status = 200, description = "`{\"message\": \"Deleted\"}`", body = Envelope),
        (status = 400, description = "Invalid request or company already exists", body = Envelope),
        (status = 404, description = "Company not found", body = Envelope),
        (status = 500, description = "Backend failure", body = Envelope),
        (status = 503, description = "Backend unavailable", body = Envelope),
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<String>, PathRejection>,
) -> Result<Envelope, RestError> {
    const CONTEXT: &str = "error while deleting company";

    let id = company_id(path)?;

    state
        .companies
        .delete(build_rpc_request(CompanyId { id }, &headers))
        .await
        .into_rest(CONTEXT)?;

    Ok(Envelope::ok(transcode(&MsgResponse::DELETED).into_rest(CONTEXT)?))
}
