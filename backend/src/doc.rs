//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the directory pages, the health probes, and the JSON
//! error envelope returned when the record store fails. Swagger UI serves it
//! in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};

/// OpenAPI document for the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet directory",
        description = "HTML pages describing pets and their owners, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::directory::index,
        crate::inbound::http::directory::pet_by_id,
        crate::inbound::http::directory::owner_by_id,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Error, ErrorCode)),
    tags(
        (name = "directory", description = "Pet and owner pages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    #[rstest]
    #[case("/")]
    #[case("/pets/{id}")]
    #[case("/owner/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_lists_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        match error_schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(obj.properties.contains_key("code"));
                assert!(obj.properties.contains_key("message"));
            }
            _ => panic!("expected Object schema"),
        }
    }
}
