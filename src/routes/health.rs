use crate::models::HealthStatus;
use actix_web::{HttpResponse, Responder, web};

/// # Health Check Endpoint
///
/// Returns the health of the service along with its name and a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `service` and `timestamp`
///     in ISO 8601 format
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
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus, content_type = "application/json")
    ),
    tag = "Health Check"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::healthy())
}

/// # Route Configuration
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::header, test};

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Set up test app
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json",
            "Content-Type should be application/json"
        );

        let health_status: HealthStatus = test::read_body_json(resp).await;

        assert_eq!(health_status.status, "healthy");
        assert_eq!(health_status.service, "hello-world-api");
        assert!(!health_status.timestamp.is_empty());
    }

    #[actix_web::test]
    async fn test_health_rejects_other_methods() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::delete().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 405);
    }
}
