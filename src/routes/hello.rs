use crate::models::Greeting;
use actix_web::{HttpResponse, Responder, web};
use tracing::info;

/// # Hello Endpoint
///
/// Greets the caller with the API version and the current UTC time. Every
/// call logs one `INFO` line.
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Hello, World!",
///   "timestamp": "2024-01-01T00:00:00.000000Z",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Greeting with timestamp", body = Greeting, content_type = "application/json")
    ),
    tag = "Greeting"
)]
pub async fn hello() -> impl Responder {
    info!("Hello endpoint accessed");
    HttpResponse::Ok().json(Greeting::hello_world())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/hello").route(web::get().to(hello)));
}
