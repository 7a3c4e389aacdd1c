//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Remote-callable product operations. Every call is a POST whose body wraps the argument in `data`.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Remote-callable product operations")
    )
)]
pub struct ApiDoc;
