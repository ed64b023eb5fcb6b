use actix_web::web;

pub mod config;
pub mod cors;
pub mod docs;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;


/// Registers every route the service exposes: the JSON endpoints plus the
/// documentation pages and the OpenAPI document.
///
/// Middleware (CORS, access logging) is applied by the caller with `wrap`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(routes::configure).configure(docs::configure);
}
