use crate::openapi::ApiDoc;
use actix_web::{HttpResponse, Responder, web};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the machine-readable OpenAPI document.
pub const OPENAPI_URL: &str = "/openapi.json";

/// Path of the Swagger UI page. Its static assets live beneath it.
pub const SWAGGER_UI_PATH: &str = "/docs";

pub const REDOC_PATH: &str = "/redoc";

/// Swagger UI page bootstrapped against [`OPENAPI_URL`].
///
/// The bundled `index.html` uses relative asset links and therefore only
/// works at `/docs/`. This page references the same assets by absolute path
/// so `/docs` renders without a redirect.
fn swagger_ui_html() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{title} - Swagger UI</title>
  <link rel="stylesheet" type="text/css" href="{base}/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="{base}/swagger-ui-bundle.js" charset="UTF-8"></script>
  <script src="{base}/swagger-ui-standalone-preset.js" charset="UTF-8"></script>
  <script>
    window.ui = SwaggerUIBundle({{
      url: "{openapi}",
      dom_id: "#swagger-ui",
      deepLinking: true,
      presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
      layout: "StandaloneLayout"
    }});
  </script>
</body>
</html>
"##,
        title = crate::config::API_TITLE,
        base = SWAGGER_UI_PATH,
        openapi = OPENAPI_URL,
    )
}

/// Serves the interactive Swagger UI.
pub async fn swagger_ui() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(swagger_ui_html())
}

/// # Documentation Route Configuration
///
/// - `GET /docs`: Swagger UI page
/// - `GET /docs/{file}`: Swagger UI static assets
/// - `GET /openapi.json`: OpenAPI document
/// - `GET /redoc`: ReDoc page with the document embedded
pub fn configure(cfg: &mut web::ServiceConfig) {
    let openapi = ApiDoc::openapi();

    cfg.service(web::resource(SWAGGER_UI_PATH).route(web::get().to(swagger_ui)))
        .service(
            SwaggerUi::new(format!("{SWAGGER_UI_PATH}/{{_:.*}}")).url(OPENAPI_URL, openapi.clone()),
        )
        .service(Redoc::with_url(REDOC_PATH, openapi));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::header, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_openapi_json_available() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/openapi.json").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("openapi").is_some());
        assert!(body.get("info").is_some());
        assert_eq!(body["info"]["title"], "Hello World API");
    }

    #[actix_web::test]
    async fn test_swagger_ui_available() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/docs").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("url: \"/openapi.json\""));
        assert!(html.contains("/docs/swagger-ui-bundle.js"));
    }

    #[actix_web::test]
    async fn test_swagger_ui_assets_served_under_docs() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/docs/swagger-ui-bundle.js")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_redoc_available() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/redoc").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
