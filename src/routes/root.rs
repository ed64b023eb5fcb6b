use crate::models::RootInfo;
use actix_web::{HttpResponse, Responder, web};

/// API information: a welcome message plus the paths of the docs and health
/// endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = RootInfo, content_type = "application/json")
    ),
    tag = "General"
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootInfo::default())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root)));
}
