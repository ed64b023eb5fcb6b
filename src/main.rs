use actix_web::{App, HttpServer, middleware::Logger};
use hello_world_api::config::ServerConfig;
use hello_world_api::{cors, logging};
use tracing::info;

/// Hello World API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - JSON endpoints `/`, `/hello` and `/health`
/// - Swagger UI at `/docs`, ReDoc at `/redoc`, OpenAPI document at `/openapi.json`
/// - Permissive CORS on every route
/// - Access log line per request, written through `tracing`
///
/// # Configuration
/// - Server binds to `0.0.0.0:8000`
/// - `RUST_LOG` (optionally from a `.env` file) sets the log filter
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    if let Err(err) = logging::init() {
        eprintln!("failed to install logger: {err}");
    }

    let config = ServerConfig::default();
    info!(host = %config.host, port = config.port, "starting Hello World API");

    HttpServer::new(|| {
        App::new()
            .wrap(cors::permissive())
            .wrap(Logger::default())
            .configure(hello_world_api::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
