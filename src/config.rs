//! Service constants and server bind settings.

/// Identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "hello-world-api";

/// Title published in the OpenAPI document.
pub const API_TITLE: &str = "Hello World API";

/// API version, reported by `/hello` and the OpenAPI document.
pub const API_VERSION: &str = "1.0.0";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// # Server Configuration
///
/// Address the HTTP server listens on. The service is not configurable from
/// the environment; [`ServerConfig::default`] binds every interface on port
/// 8000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Socket address in the form accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
