//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lost & Found API",
        version = "0.1.0",
        description = "Campus lost-and-found REST API backed by MongoDB and Google Cloud Storage",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc),
        (path = "/api/upload", api = domain_uploads::handlers::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Lost-and-found item endpoints (MongoDB)"),
        (name = "Uploads", description = "Image upload to public object storage")
    )
)]
pub struct ApiDoc;
