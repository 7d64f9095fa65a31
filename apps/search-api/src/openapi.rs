//! OpenAPI documentation configuration

use axum_helpers::HealthApiDoc;
use utoipa::OpenApi;

use crate::api::health::ReadyResponse;

/// Service-level metadata and the readiness path
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HomeViu Search API",
        version = "0.1.0",
        description = "Free-text search over inventory items stored in MongoDB"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(crate::api::health::readiness_check),
    components(schemas(ReadyResponse))
)]
struct ServiceDoc;

/// Combined documentation: service metadata, liveness, readiness and search
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(HealthApiDoc::openapi());
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}
