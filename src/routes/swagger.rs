//! Swagger documentation route group.
//!
//! Serves the generated OpenAPI document at `/api-docs/openapi.json` and the
//! interactive UI under `/swagger-ui`.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::{private, public};

/// OpenAPI document covering the scaffold's API surface.
#[derive(OpenApi)]
#[openapi(
    info(title = "API Server", description = "Minimal HTTP API server scaffold"),
    paths(public::status, private::server_info),
    components(schemas(public::SystemStatus, private::ServerInfo)),
    modifiers(&ApiKeyAddon),
    tags(
        (name = "public", description = "Routes served without authentication"),
        (name = "private", description = "Routes requiring the configured API key")
    )
)]
pub struct ApiDoc;

struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

pub fn routes() -> Router {
    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_route_groups() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/status"));
        assert!(paths.contains_key("/api/v1/server/info"));
    }

    #[test]
    fn bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components declared");
        assert!(components.security_schemes.contains_key("api_key"));
    }
}
