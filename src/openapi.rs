use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using utoipa procedural macros. The document is
/// served at `/openapi.json` and rendered by the Swagger UI (`/docs`) and
/// ReDoc (`/redoc`) pages.
///
/// # Endpoints
/// - API information: `GET /`
/// - Greeting: `GET /hello`
/// - Health Check: `GET /health`
///
/// # API Information
/// - **Title**: Hello World API
/// - **Version**: 1.0.0
///
/// # Note
/// The document is generated at compile time from the route annotations.
/// Title and version come from [`crate::config`].
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::hello::hello,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::RootInfo,
            crate::models::Greeting,
            crate::models::HealthStatus
        )
    ),
    tags(
        (name = "General", description = "API information"),
        (name = "Greeting", description = "Hello World greeting"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "A simple Hello World API with DevSecOps best practices",
        title = crate::config::API_TITLE,
        version = crate::config::API_VERSION,
    )
)]
pub struct ApiDoc;
