use actix_web::web;

/// # Root Endpoint
///
/// `GET /` describes the API and links to the docs and health routes.
pub mod root;

/// # Hello Endpoint
///
/// `GET /hello` returns the greeting, the API version and the current time.
pub mod hello;

/// # Health Check Endpoint
///
/// `GET /health` reports liveness together with the service name.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "hello-world-api",
///   "timestamp": "2023-10-05T12:34:56.789012Z"
/// }
/// ```
pub mod health;

/// # API Route Configuration
///
/// Mounts the JSON endpoints at the server root.
///
/// ```text
/// GET /       - API information
/// GET /hello  - Greeting with timestamp
/// GET /health - Service health status
/// ```
///
/// Other methods on these paths answer `405 Method Not Allowed`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(hello::configure_routes)
        .configure(health::configure_routes);
}
