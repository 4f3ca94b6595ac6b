//! OpenAPI document for the REST surface, served by Swagger UI under `/swagger`.

use gateway_rest::Envelope;
use utoipa::OpenApi;

use crate::handlers::{company, system};
use crate::models::{CreateCompanyBody, UpdateCompanyBody};

/// Where the generated document is served.
pub const DOC_PATH: &str = "/swagger/doc.json";

/// OpenAPI description of every route in [`build_router`](crate::build_router).
#[derive(OpenApi)]
#[openapi(
    info(title = "api-gateway", description = "REST/JSON gateway for the company gRPC service"),
    paths(
        system::ping,
        system::get_config,
        company::create_company,
        company::list_companies,
        company::get_company,
        company::update_company,
        company::delete_company,
    ),
    components(schemas(Envelope, CreateCompanyBody, UpdateCompanyBody)),
    tags(
        (name = "company", description = "Company CRUD"),
        (name = "system", description = "Liveness and config"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort_unstable();
        assert_eq!(
            paths,
            ["/config", "/v1/company", "/v1/company/{company_id}", "/v1/ping"]
        );

        let item = &doc.paths.paths["/v1/company/{company_id}"];
        assert!(item.get.is_some() && item.put.is_some() && item.delete.is_some());
    }

    #[test]
    fn envelope_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Envelope"));
        assert!(schemas.contains_key("CreateCompanyBody"));
    }
}
