//! Route table.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use gateway_rest::{Envelope, ErrorId};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{company, system};
use crate::openapi::{ApiDoc, DOC_PATH};
use crate::state::AppState;

/// Build the full HTTP router.
///
/// | Method | Path                       | Handler                    |
/// |--------|----------------------------|----------------------------|
/// | GET    | `/config`                  | [`system::get_config`]     |
/// | GET    | `/v1/ping`                 | [`system::ping`]           |
/// | POST   | `/v1/company`              | [`company::create_company`]|
/// | GET    | `/v1/company`              | [`company::list_companies`]|
/// | GET    | `/v1/company/{company_id}` | [`company::get_company`]   |
/// | PUT    | `/v1/company/{company_id}` | [`company::update_company`]|
/// | DELETE | `/v1/company/{company_id}` | [`company::delete_company`]|
/// | GET    | `/swagger/*`               | Swagger UI over [`ApiDoc`] |
pub fn build_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/ping", get(system::ping))
        .route(
            "/company",
            post(company::create_company).get(company::list_companies),
        )
        .route(
            "/company/{company_id}",
            get(company::get_company)
                .put(company::update_company)
                .delete(company::delete_company),
        );

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_headers(AnyOrigin)
        .allow_methods(AnyOrigin);

    Router::new()
        .route("/config", get(system::get_config))
        .nest("/v1", v1)
        .merge(SwaggerUi::new("/swagger").url(DOC_PATH, ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(panic_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 500 envelope for a handler that panicked.
fn panic_envelope(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned());
    tracing::error!(code = 500, error = %detail, "handler panicked");

    Envelope::failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error",
        ErrorId::InternalServerError.as_str().into(),
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("index out of bounds: secret detail")
    }

    #[tokio::test]
    async fn panicking_handler_yields_500_envelope() {
        let app: Router = Router::new()
            .route("/boom", get(explode))
            .layer(CatchPanicLayer::custom(panic_envelope));

        let response = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "code": 500, "message": "internal server error", "error": "INTERNAL_SERVER_ERROR" })
        );
    }

    #[test]
    fn string_payloads_are_accepted() {
        let response = panic_envelope(Box::new(String::from("owned")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = panic_envelope(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
